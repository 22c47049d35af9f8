//! Applies planned effects to a stage on a scheduler's clock.

use std::cell::RefCell;
use std::rc::Rc;

use fastrand::Rng;

use crate::effect::{Effect, Stage};
use crate::lifecycle::Teardown;
use crate::scheduler::Scheduler;
use crate::sequence::Sequence;
use crate::typewriter::{Typewriter, TypewriterRun};

/// Cheap to clone: clones share the stage, the scheduler and the random
/// source that typewriter runs fork from.
#[derive(Clone)]
pub struct Director<St, S> {
    stage: St,
    scheduler: S,
    rng: Rc<RefCell<Rng>>,
}

impl<St, S> Director<St, S>
where
    St: Stage + Clone + 'static,
    S: Scheduler + Clone + 'static,
{
    pub fn new(stage: St, scheduler: S, rng: Rng) -> Self {
        Self {
            stage,
            scheduler,
            rng: Rc::new(RefCell::new(rng)),
        }
    }

    pub fn stage(&self) -> &St {
        &self.stage
    }

    pub fn apply(&self, effect: Effect<St::Element>) {
        match effect {
            Effect::AddClass { target, class } => self.stage.add_class(&target, &class),
            Effect::SetStyle {
                target,
                property,
                value,
            } => self.stage.set_style(&target, property, &value),
            Effect::Type {
                target,
                text,
                delay_per_char_ms,
            } => {
                let rng = self.rng.borrow_mut().fork();
                let stage = self.stage.clone();
                TypewriterRun::new(Typewriter::new(&text, delay_per_char_ms, rng), move |visible| {
                    stage.set_text(&target, visible)
                })
                .start(self.scheduler.clone());
            }
            Effect::After { delay_ms, effects } => {
                let director = self.clone();
                self.scheduler
                    .schedule(delay_ms, Box::new(move || director.apply_all(effects)));
            }
            Effect::Remove { target } => self.stage.remove(&target),
            Effect::RestoreScroll => self.stage.restore_scroll(),
            Effect::Log(message) => log::info!("{message}"),
        }
    }

    pub fn apply_all(&self, effects: Vec<Effect<St::Element>>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Schedule every entry at its own delay from now, in sorted order.
    pub fn run(&self, sequence: Sequence<St::Element>) {
        for entry in sequence.into_entries() {
            let director = self.clone();
            let effects = entry.effects;
            self.scheduler
                .schedule(entry.delay_ms, Box::new(move || director.apply_all(effects)));
        }
    }

    /// Run the sequence and schedule the overlay teardown after it.
    pub fn play(
        &self,
        sequence: Sequence<St::Element>,
        overlay: Option<St::Element>,
        buffer_ms: f64,
        fade_ms: f64,
    ) -> Teardown {
        let teardown = Teardown::after(sequence.max_delay_ms(), buffer_ms, fade_ms);
        log::debug!(
            "running {} entries, teardown at {}ms",
            sequence.entries().len(),
            teardown.fade_at_ms
        );
        self.run(sequence);
        if let Some(overlay) = overlay {
            self.apply(teardown.effect(overlay));
        }
        teardown
    }
}

//! Character-by-character text reveal.

use fastrand::Rng;

use crate::scheduler::Scheduler;

/// Chance that a character is followed by a thinking pause.
const PAUSE_CHANCE: f64 = 0.1;
const PAUSE_FACTOR: f64 = 3.0;

/// Delay after one character: usually base × [0.75, 1.25), occasionally a
/// 3× hesitation.
pub fn char_delay(rng: &mut Rng, base_ms: f64) -> f64 {
    if rng.f64() < PAUSE_CHANCE {
        base_ms * PAUSE_FACTOR
    } else {
        base_ms * (rng.f64() * 0.5 + 0.75)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeStep {
    /// One more character is visible; call again after `next_delay_ms`.
    Revealed { next_delay_ms: f64 },
    /// Everything is visible.
    Finished,
}

/// Typing state for a single element.
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    base_delay_ms: f64,
    rng: Rng,
}

impl Typewriter {
    pub fn new(text: &str, base_delay_ms: f64, rng: Rng) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            base_delay_ms,
            rng,
        }
    }

    /// Text visible so far.
    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn advance(&mut self) -> TypeStep {
        if self.is_finished() {
            return TypeStep::Finished;
        }
        self.shown += 1;
        TypeStep::Revealed {
            next_delay_ms: char_delay(&mut self.rng, self.base_delay_ms),
        }
    }
}

/// A typewriter bound to its output.
pub struct TypewriterRun {
    machine: Typewriter,
    on_text: Box<dyn FnMut(&str)>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl TypewriterRun {
    pub fn new(machine: Typewriter, on_text: impl FnMut(&str) + 'static) -> Self {
        Self {
            machine,
            on_text: Box::new(on_text),
            on_complete: None,
        }
    }

    pub fn on_complete(mut self, done: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(done));
        self
    }

    /// Clear the output and type the first character now; the rest follow on
    /// `scheduler` timers. A run of L characters fires exactly L timers, the
    /// last of which reports completion.
    pub fn start<S>(mut self, scheduler: S)
    where
        S: Scheduler + Clone + 'static,
    {
        (self.on_text)("");
        self.pump(scheduler);
    }

    fn pump<S>(mut self, scheduler: S)
    where
        S: Scheduler + Clone + 'static,
    {
        match self.machine.advance() {
            TypeStep::Revealed { next_delay_ms } => {
                let visible = self.machine.visible();
                (self.on_text)(&visible);
                let next = scheduler.clone();
                scheduler.schedule(next_delay_ms, Box::new(move || self.pump(next)));
            }
            TypeStep::Finished => {
                if let Some(done) = self.on_complete.take() {
                    done();
                }
            }
        }
    }
}

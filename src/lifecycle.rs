//! Fade-out and removal of the splash overlay.

use crate::effect::Effect;

const FADE_EASING: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";

/// When the overlay goes away, relative to sequence start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Teardown {
    /// Fade begins.
    pub fade_at_ms: f64,
    /// Overlay removed, scroll restored.
    pub remove_at_ms: f64,
    pub fade_ms: f64,
}

impl Teardown {
    /// Fade starts `buffer_ms` after the last sequence entry fires.
    pub fn after(max_delay_ms: f64, buffer_ms: f64, fade_ms: f64) -> Self {
        let fade_at_ms = max_delay_ms.max(0.0) + buffer_ms;
        Self {
            fade_at_ms,
            remove_at_ms: fade_at_ms + fade_ms,
            fade_ms,
        }
    }

    /// The teardown as one delayed effect: fade, then remove once the
    /// transition has had time to finish.
    pub fn effect<E: Clone>(&self, overlay: E) -> Effect<E> {
        let seconds = self.fade_ms / 1000.0;
        Effect::After {
            delay_ms: self.fade_at_ms,
            effects: vec![
                Effect::set_style(overlay.clone(), "transition", format!("opacity {seconds}s {FADE_EASING}")),
                Effect::set_style(overlay.clone(), "opacity", "0"),
                Effect::After {
                    delay_ms: self.fade_ms,
                    effects: vec![
                        Effect::Remove { target: overlay },
                        Effect::RestoreScroll,
                        Effect::Log("Splash screen finished.".to_string()),
                    ],
                },
            ],
        }
    }
}

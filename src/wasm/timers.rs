use fastrand::Rng;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

use crate::scheduler::{Scheduler, Task};

/// `setTimeout`.
#[derive(Clone, Copy)]
pub struct Timeout;

impl Scheduler for Timeout {
    fn schedule(&self, delay_ms: f64, task: Task) {
        let Some(window) = window() else {
            return;
        };
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.max(0.0) as i32,
        ) {
            log::warn!("setTimeout failed: {e:?}");
        }
    }
}

/// Random source seeded from `Math.random`.
pub fn seeded_rng() -> Rng {
    Rng::with_seed((js_sys::Math::random() * u64::MAX as f64) as u64)
}

#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Animated splash screen for the browser: particle canvas, SVG draw-in,
//! staggered reveals, typewriter text and pointer parallax, torn down once
//! the timeline has played.
//!
//! Planning and simulation are plain Rust and build on any target; only the
//! `wasm` module talks to the DOM.

pub mod attrs;
pub mod config;
pub mod director;
pub mod effect;
pub mod error;
pub mod lifecycle;
pub mod parallax;
pub mod particles;
pub mod primer;
pub mod scheduler;
pub mod sequence;
pub mod stagger;
pub mod typewriter;

pub use config::SplashConfig;
pub use error::SplashError;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    #[cfg(test)]
    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    mod markup;
    mod pointer;
    mod render;
    mod stage;
    mod timers;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let config = markup::read_config(&document);
        let level = config.as_ref().map_or(log::Level::Info, |c| c.log_level());
        console_log::init_with_level(level).ok();
        let config = config.unwrap_or_else(|e| {
            log::warn!("{e}; using defaults");
            crate::SplashConfig::default()
        });
        log::info!("splash starting");

        // The timeline drives the page, so a missing canvas only costs the
        // particles.
        if let Err(e) = render::start(&window, &document, &config) {
            log::warn!("particles disabled: {e}");
        }
        play(&document, &config)?;
        Ok(())
    }

    fn play(document: &web_sys::Document, config: &crate::SplashConfig) -> Result<(), crate::SplashError> {
        use crate::director::Director;
        use crate::primer::prime_path;
        use crate::sequence::Sequence;

        let director = Director::new(stage::DomStage::new(document.clone()), timers::Timeout, timers::seeded_rng());

        // dash offsets must be in place before any draw-in fires
        for (path, length) in markup::draw_paths(document)? {
            director.apply_all(prime_path(Some(path), length));
        }

        let overlay = markup::overlay(document);
        if let Some(overlay) = &overlay {
            pointer::attach_parallax(overlay, config)?;
        }

        let page = markup::scan(document)?;
        let sequence = Sequence::plan(&page, config.type_delay_ms);
        let teardown = director.play(sequence, overlay, config.hide_buffer_ms, config.fade_ms);
        log::info!("splash ends in {}ms", teardown.remove_at_ms);
        Ok(())
    }
}

//! Tunables for the splash screen.
//!
//! Every field has a default matching the stock page, so an override only
//! needs to name what it changes:
//!
//! ```json
//! { "particleCount": 120, "hideBufferMs": 5000 }
//! ```

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplashConfig {
    /// Particles generated per canvas setup.
    pub particle_count: usize,
    /// Delay before the particle loop requests its first frame.
    pub particle_start_delay_ms: f64,
    /// Quiet period after the last resize event before the canvas is rebuilt.
    pub resize_debounce_ms: f64,
    /// Pointer repulsion radius in CSS pixels.
    pub pointer_radius: f64,
    /// Time added after the last sequence delay before the fade starts.
    pub hide_buffer_ms: f64,
    /// Length of the overlay opacity fade.
    pub fade_ms: f64,
    /// Per-character typing delay when `data-type-delay` is absent.
    pub type_delay_ms: f64,
    /// Parallax factor when `data-parallax-factor` is absent.
    pub parallax_factor: f64,
    /// Fraction of the remaining distance a layer moves per pointer event.
    pub parallax_smoothing: f64,
    /// `log` level name for the console logger.
    pub log_level: String,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            particle_count: 60,
            particle_start_delay_ms: 500.0,
            resize_debounce_ms: 250.0,
            pointer_radius: 80.0,
            hide_buffer_ms: 3500.0,
            fade_ms: 1000.0,
            type_delay_ms: 75.0,
            parallax_factor: 0.01,
            parallax_smoothing: 0.05,
            log_level: "info".to_string(),
        }
    }
}

impl SplashConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configured log level, falling back to `Info` on unknown names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

//! Error type for splash setup.

use thiserror::Error;

/// Errors raised while wiring the splash screen into the page.
///
/// Optional markup is never an error: absent elements are skipped. Only the
/// browser objects the splash cannot run without end up here.
#[derive(Debug, Error)]
pub enum SplashError {
    /// A required browser object (window, document, canvas) is missing.
    #[error("missing {0}")]
    Missing(&'static str),

    /// A DOM call threw.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The `data-splash-config` override is not valid JSON for `SplashConfig`.
    #[error("invalid splash config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SplashError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SplashError> for wasm_bindgen::JsValue {
    fn from(err: SplashError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SplashError>;

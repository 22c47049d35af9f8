//! Pure descriptions of page mutations.
//!
//! Planning code (sequence, primer, lifecycle) only ever produces `Effect`
//! values; the [`Director`](crate::director::Director) applies them to a
//! [`Stage`]. On wasm the stage is the live DOM, in tests it is a recorder.

/// Class added to every revealed element.
pub const VISIBLE: &str = "visible";

#[derive(Debug, Clone, PartialEq)]
pub enum Effect<E> {
    /// Add a CSS class.
    AddClass { target: E, class: String },
    /// Set an inline style property (kebab-case name).
    SetStyle {
        target: E,
        property: &'static str,
        value: String,
    },
    /// Start a typewriter run that rewrites the target's text.
    Type {
        target: E,
        text: String,
        delay_per_char_ms: f64,
    },
    /// Apply `effects` after `delay_ms`, on a timer of its own.
    After { delay_ms: f64, effects: Vec<Effect<E>> },
    /// Detach the target from the page.
    Remove { target: E },
    /// Give the page its scrollbar back.
    RestoreScroll,
    /// Emit an info-level log line.
    Log(String),
}

impl<E> Effect<E> {
    pub fn add_class(target: E, class: impl Into<String>) -> Self {
        Self::AddClass {
            target,
            class: class.into(),
        }
    }

    pub fn reveal(target: E) -> Self {
        Self::add_class(target, VISIBLE)
    }

    pub fn set_style(target: E, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle {
            target,
            property,
            value: value.into(),
        }
    }
}

/// The surface effects land on.
///
/// Implementations are expected to be cheap handles (`Clone`) because the
/// director moves clones into timer callbacks.
pub trait Stage {
    type Element: Clone + 'static;

    fn add_class(&self, target: &Self::Element, class: &str);
    fn set_style(&self, target: &Self::Element, property: &str, value: &str);
    fn set_text(&self, target: &Self::Element, text: &str);
    fn remove(&self, target: &Self::Element);
    fn restore_scroll(&self);
}

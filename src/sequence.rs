//! Reveal timeline built from the splash markup.
//!
//! The markup is first scanned into a [`PageModel`] (see `wasm::markup`), then
//! [`Sequence::plan`] turns it into timed entries whose actions are plain
//! [`Effect`] lists. Nothing here touches the DOM.

use crate::attrs;
use crate::effect::{Effect, VISIBLE};
use crate::stagger;

const HEAD_ANIMATION: &str = "scaleUp";
const ELEMENT_ANIMATION: &str = "fadeIn";
/// Animation type that only reveals, without an `animation-*` class.
const NO_ANIMATION: &str = "none";

const OUTLINE_OFFSET_MS: f64 = 200.0;
const CIRCUIT_OFFSET_MS: f64 = 700.0;

const OUTLINE_ANIMATION: &str = "drawLine 2s cubic-bezier(0.215, 0.61, 0.355, 1) forwards, \
     pulseBreathe 4s infinite alternate cubic-bezier(0.455, 0.03, 0.515, 0.955) 2.2s";
const CIRCUIT_EASING: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";

/// Raw `data-delay` / `data-animation-type` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timing {
    pub delay: Option<String>,
    pub animation_type: Option<String>,
}

impl Timing {
    pub fn new(delay: Option<&str>, animation_type: Option<&str>) -> Self {
        Self {
            delay: delay.map(str::to_owned),
            animation_type: animation_type.map(str::to_owned),
        }
    }

    fn delay_ms(&self) -> f64 {
        attrs::int_or(self.delay.as_deref(), 0.0)
    }

    fn animation<'a>(&'a self, default: &'a str) -> &'a str {
        attrs::text_or(self.animation_type.as_deref(), default)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Head<E> {
    pub element: E,
    pub timing: Timing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircuitLine<E> {
    pub element: E,
    /// `<circle>` elements draw in faster than paths.
    pub is_point: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypewriterText<E> {
    pub element: E,
    pub text: Option<String>,
    pub type_delay: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MicroSpan<E> {
    pub element: E,
    pub micro_delay: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animated<E> {
    pub element: E,
    pub timing: Timing,
    pub is_main_title: bool,
    pub is_subtitle: bool,
    pub typewriters: Vec<TypewriterText<E>>,
    pub micro_spans: Vec<MicroSpan<E>>,
}

impl<E> Animated<E> {
    pub fn new(element: E, timing: Timing) -> Self {
        Self {
            element,
            timing,
            is_main_title: false,
            is_subtitle: false,
            typewriters: Vec::new(),
            micro_spans: Vec::new(),
        }
    }
}

/// Everything the sequencer reads from the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel<E> {
    pub head: Option<Head<E>>,
    pub outline: Option<E>,
    pub circuit_lines: Vec<CircuitLine<E>>,
    /// `.animated-element`s other than the head graphic.
    pub animated: Vec<Animated<E>>,
    pub subtitle_spans: Vec<E>,
}

impl<E> Default for PageModel<E> {
    fn default() -> Self {
        Self {
            head: None,
            outline: None,
            circuit_lines: Vec::new(),
            animated: Vec::new(),
            subtitle_spans: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceEntry<E> {
    pub target: E,
    pub delay_ms: f64,
    pub effects: Vec<Effect<E>>,
}

/// Entries sorted by ascending delay.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<E> {
    entries: Vec<SequenceEntry<E>>,
}

impl<E: Clone> Sequence<E> {
    /// Build the timeline. `type_delay_ms` is the per-character default for
    /// typewriter text that declares none.
    pub fn plan(page: &PageModel<E>, type_delay_ms: f64) -> Self {
        let mut entries = Vec::new();
        let head_delay = page.head.as_ref().map_or(0.0, |h| h.timing.delay_ms());

        if let Some(head) = &page.head {
            let animation = head.timing.animation(HEAD_ANIMATION);
            entries.push(SequenceEntry {
                target: head.element.clone(),
                delay_ms: head_delay,
                effects: vec![
                    Effect::reveal(head.element.clone()),
                    Effect::add_class(head.element.clone(), format!("animation-{animation}")),
                ],
            });
        }

        if let Some(outline) = &page.outline {
            entries.push(SequenceEntry {
                target: outline.clone(),
                delay_ms: head_delay + OUTLINE_OFFSET_MS,
                effects: vec![Effect::set_style(outline.clone(), "animation", OUTLINE_ANIMATION)],
            });
        }

        let total = page.circuit_lines.len();
        for (index, line) in page.circuit_lines.iter().enumerate() {
            let duration = if line.is_point { "0.5s" } else { "1.2s" };
            entries.push(SequenceEntry {
                target: line.element.clone(),
                delay_ms: head_delay + CIRCUIT_OFFSET_MS + stagger::eased_delay(0.0, index, total),
                effects: vec![Effect::set_style(
                    line.element.clone(),
                    "animation",
                    format!("drawLine {duration} {CIRCUIT_EASING} forwards"),
                )],
            });
        }

        for el in &page.animated {
            entries.push(SequenceEntry {
                target: el.element.clone(),
                delay_ms: el.timing.delay_ms(),
                effects: element_effects(el, &page.subtitle_spans, type_delay_ms),
            });
        }

        Self::from_entries(entries)
    }

    /// Sort arbitrary entries into a sequence. Equal delays keep their order.
    pub fn from_entries(mut entries: Vec<SequenceEntry<E>>) -> Self {
        entries.sort_by(|a, b| a.delay_ms.total_cmp(&b.delay_ms));
        log::debug!("sequence planned with {} entries", entries.len());
        Self { entries }
    }
}

impl<E> Sequence<E> {
    pub fn entries(&self) -> &[SequenceEntry<E>] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest entry delay, or zero for an empty sequence.
    pub fn max_delay_ms(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.delay_ms)
            .fold(0.0, f64::max)
    }

    pub fn into_entries(self) -> Vec<SequenceEntry<E>> {
        self.entries
    }
}

fn element_effects<E: Clone>(el: &Animated<E>, subtitle_spans: &[E], type_delay_ms: f64) -> Vec<Effect<E>> {
    let mut effects = vec![Effect::reveal(el.element.clone())];

    let animation = el.timing.animation(ELEMENT_ANIMATION);
    // the main title runs its own CSS animation
    if animation != NO_ANIMATION && !el.is_main_title {
        effects.push(Effect::add_class(el.element.clone(), format!("animation-{animation}")));
    }

    if el.is_subtitle {
        let count = subtitle_spans.len();
        for (i, span) in subtitle_spans.iter().enumerate() {
            effects.push(Effect::After {
                delay_ms: stagger::subtitle_delay(i, count),
                effects: vec![Effect::reveal(span.clone())],
            });
        }
    }

    for tw in &el.typewriters {
        effects.push(Effect::add_class(tw.element.clone(), VISIBLE));
        effects.push(Effect::Type {
            target: tw.element.clone(),
            text: tw.text.clone().unwrap_or_default(),
            delay_per_char_ms: attrs::int_or(tw.type_delay.as_deref(), type_delay_ms),
        });
    }

    for (i, span) in el.micro_spans.iter().enumerate() {
        effects.push(Effect::After {
            delay_ms: attrs::int_or(span.micro_delay.as_deref(), stagger::micro_delay(i)),
            effects: vec![Effect::reveal(span.element.clone())],
        });
    }

    effects
}

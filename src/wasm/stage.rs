use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement};

use crate::effect::Stage;

/// The live page.
#[derive(Clone)]
pub struct DomStage {
    document: Document,
}

impl DomStage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

/// Inline style of an HTML or SVG element.
pub fn inline_style(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    el.dyn_ref::<SvgElement>().map(SvgElement::style)
}

impl Stage for DomStage {
    type Element = Element;

    fn add_class(&self, target: &Element, class: &str) {
        if let Err(e) = target.class_list().add_1(class) {
            log::warn!("add class {class}: {e:?}");
        }
    }

    fn set_style(&self, target: &Element, property: &str, value: &str) {
        let Some(style) = inline_style(target) else {
            log::warn!("<{}> has no inline style", target.tag_name());
            return;
        };
        if let Err(e) = style.set_property(property, value) {
            log::warn!("set {property}: {e:?}");
        }
    }

    fn set_text(&self, target: &Element, text: &str) {
        target.set_text_content(Some(text));
    }

    fn remove(&self, target: &Element) {
        target.remove();
    }

    fn restore_scroll(&self) {
        if let Some(body) = self.document.body() {
            if let Err(e) = body.style().set_property("overflow", "auto") {
                log::warn!("restore scroll: {e:?}");
            }
        }
    }
}

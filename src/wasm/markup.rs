//! Reads the splash markup into a `PageModel`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList, SvgGeometryElement};

use crate::config::SplashConfig;
use crate::error::Result;
use crate::sequence::{Animated, CircuitLine, Head, MicroSpan, PageModel, Timing, TypewriterText};

pub const OVERLAY_ID: &str = "splashScreen";
pub const CANVAS_ID: &str = "particleCanvas";
const HEAD_ID: &str = "headSvg";
const OUTLINE_ID: &str = "headOutline";
const CIRCUIT_LINES: &str = "#circuitLines .svg-draw";
const ANIMATED: &str = ".animated-element";
const SUBTITLE_SPANS: &str = ".subtitle span";
const TYPEWRITER: &str = ".typewriter-text";
const MICRO: &str = ".micro-animated";
pub const PARALLAX_LAYERS: &str = ".parallax-layer";

pub fn overlay(document: &Document) -> Option<Element> {
    document.get_element_by_id(OVERLAY_ID)
}

/// `SplashConfig` from the overlay's `data-splash-config`, or defaults.
pub fn read_config(document: &Document) -> Result<SplashConfig> {
    match overlay(document).and_then(|o| o.get_attribute("data-splash-config")) {
        Some(json) => SplashConfig::from_json(&json),
        None => Ok(SplashConfig::default()),
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(document.query_selector_all(selector)?))
}

fn timing(el: &Element) -> Timing {
    Timing::new(
        el.get_attribute("data-delay").as_deref(),
        el.get_attribute("data-animation-type").as_deref(),
    )
}

pub fn scan(document: &Document) -> Result<PageModel<Element>> {
    let head = document.get_element_by_id(HEAD_ID);

    let circuit_lines = select_all(document, CIRCUIT_LINES)?
        .into_iter()
        .map(|element| CircuitLine {
            is_point: element.tag_name().eq_ignore_ascii_case("circle"),
            element,
        })
        .collect();

    let mut animated = Vec::new();
    for element in select_all(document, ANIMATED)? {
        if head.as_ref().is_some_and(|h| element.is_same_node(Some(&**h))) {
            continue;
        }
        let classes = element.class_list();
        let typewriters = elements(element.query_selector_all(TYPEWRITER)?)
            .into_iter()
            .map(|tw| TypewriterText {
                text: tw.get_attribute("data-text"),
                type_delay: tw.get_attribute("data-type-delay"),
                element: tw,
            })
            .collect();
        let micro_spans = elements(element.query_selector_all(MICRO)?)
            .into_iter()
            .map(|span| MicroSpan {
                micro_delay: span.get_attribute("data-micro-delay"),
                element: span,
            })
            .collect();
        animated.push(Animated {
            timing: timing(&element),
            is_main_title: classes.contains("main-title"),
            is_subtitle: classes.contains("subtitle"),
            typewriters,
            micro_spans,
            element,
        });
    }

    let page = PageModel {
        head: head.map(|element| Head {
            timing: timing(&element),
            element,
        }),
        outline: document.get_element_by_id(OUTLINE_ID),
        circuit_lines,
        animated,
        subtitle_spans: select_all(document, SUBTITLE_SPANS)?,
    };
    log::debug!(
        "scanned splash: head={} lines={} animated={}",
        page.head.is_some(),
        page.circuit_lines.len(),
        page.animated.len()
    );
    Ok(page)
}

/// Head outline and circuit lines with their stroke lengths. Elements that
/// aren't SVG geometry have nothing to draw and are left out.
pub fn draw_paths(document: &Document) -> Result<Vec<(Element, f64)>> {
    let mut paths: Vec<Element> = document.get_element_by_id(OUTLINE_ID).into_iter().collect();
    paths.extend(select_all(document, CIRCUIT_LINES)?);
    Ok(paths
        .into_iter()
        .filter_map(|el| {
            let length = el.dyn_ref::<SvgGeometryElement>()?.get_total_length();
            Some((el, length as f64))
        })
        .collect())
}

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document, DomMatrix, Element, MouseEvent};

use super::markup::{select_all, PARALLAX_LAYERS};
use super::stage::inline_style;
use crate::config::SplashConfig;
use crate::error::Result;
use crate::parallax::{center_offset, read_translation, Parallax};
use crate::particles::PointerTracker;

/// Translation part of a computed `transform`, as the browser's own matrix
/// parser sees it.
pub fn translation(transform: &str) -> (f64, f64) {
    match DomMatrix::new_with_transform_list(transform) {
        Ok(m) => (m.m41(), m.m42()),
        Err(_) => read_translation(transform),
    }
}

/// Feed document-wide pointer moves to the particle field.
pub fn track(document: &Document, tracker: Rc<Cell<PointerTracker>>) -> Result<()> {
    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        let mut t = tracker.get();
        t.moved(event.client_x() as f64, event.client_y() as f64);
        tracker.set(t);
    }) as Box<dyn FnMut(MouseEvent)>);
    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}

/// Tilt the `.parallax-layer`s while the pointer is over the overlay.
pub fn attach_parallax(overlay: &Element, config: &SplashConfig) -> Result<()> {
    let Some(document) = overlay.owner_document() else {
        return Ok(());
    };
    let layers = Rc::new(select_all(&document, PARALLAX_LAYERS)?);
    if layers.is_empty() {
        return Ok(());
    }
    let count = layers.len();
    let parallax = Parallax::new(config.parallax_factor, config.parallax_smoothing);

    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(win) = window() else {
            return;
        };
        let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let offset = center_offset(event.client_x() as f64, event.client_y() as f64, width, height);

        let layers = layers.clone();
        let frame = Closure::once_into_js(move || {
            let Some(win) = window() else {
                return;
            };
            for layer in layers.iter() {
                let Some(style) = inline_style(layer) else {
                    continue;
                };
                let factor = parallax.factor(layer.get_attribute("data-parallax-factor").as_deref());
                let current = win
                    .get_computed_style(layer)
                    .ok()
                    .flatten()
                    .and_then(|computed| computed.get_property_value("transform").ok())
                    .map_or((0.0, 0.0), |t| translation(&t));
                let next = parallax.step(offset, current, factor);
                if let Err(e) = style.set_property("transform", &next.to_css()) {
                    log::warn!("parallax transform: {e:?}");
                }
            }
        });
        if let Err(e) = win.request_animation_frame(frame.unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {e:?}");
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    overlay.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    log::debug!("parallax attached to {count} layers");
    Ok(())
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::markup::CANVAS_ID;
use super::pointer;
use super::timers::{seeded_rng, Timeout};
use crate::config::SplashConfig;
use crate::error::{Result, SplashError};
use crate::particles::{FrameClock, Glow, ParticleField, ParticleSurface, Point, PointerTracker};
use crate::scheduler::{Debounce, Scheduler};

struct CanvasSurface<'a>(&'a CanvasRenderingContext2d);

impl ParticleSurface for CanvasSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.0.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str, glow: Option<Glow>) {
        let ctx = self.0;
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        if ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .is_err()
        {
            return;
        }
        ctx.fill();
        if let Some(glow) = glow {
            ctx.save();
            ctx.set_shadow_blur(glow.blur);
            ctx.set_shadow_color(glow.color);
            ctx.fill();
            ctx.restore();
        }
    }
}

/// Size the canvas to the viewport and regenerate the particles.
fn fit(window: &Window, canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, field: &mut ParticleField) -> Result<()> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    let size = field.setup(w, h, window.device_pixel_ratio());
    canvas.set_width(size.pixel_width);
    canvas.set_height(size.pixel_height);
    let style = canvas.style();
    style.set_property("width", &format!("{}px", size.css_width))?;
    style.set_property("height", &format!("{}px", size.css_height))?;
    // resizing the backing store resets the transform, so set it outright
    ctx.set_transform(size.pixel_ratio, 0.0, 0.0, size.pixel_ratio, 0.0, 0.0)?;
    Ok(())
}

/// Start the particle loop on `#particleCanvas`.
pub fn start(window: &Window, document: &Document, config: &SplashConfig) -> Result<()> {
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(SplashError::Missing("#particleCanvas"))?
        .dyn_into()
        .map_err(|_| SplashError::Missing("canvas element"))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(SplashError::Missing("2d context"))?
        .dyn_into()
        .map_err(|_| SplashError::Missing("2d context"))?;

    let field = Rc::new(RefCell::new(ParticleField::new(
        config.particle_count,
        config.pointer_radius,
        seeded_rng(),
    )));
    fit(window, &canvas, &ctx, &mut field.borrow_mut())?;

    let tracker = Rc::new(Cell::new(PointerTracker::default()));
    pointer::track(document, tracker.clone())?;

    // Rebuild on resize, once the window has settled
    let resize_closure = {
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        let field = field.clone();
        let debounce = Debounce::new(Timeout, config.resize_debounce_ms);
        Closure::wrap(Box::new(move || {
            let canvas = canvas.clone();
            let ctx = ctx.clone();
            let field = field.clone();
            debounce.call(move || {
                let Some(win) = web_sys::window() else {
                    return;
                };
                if let Err(e) = fit(&win, &canvas, &ctx, &mut field.borrow_mut()) {
                    log::warn!("canvas resize failed: {e}");
                }
            });
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut clock = FrameClock::default();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let delta = clock.delta(timestamp);
        {
            let mut field = field.borrow_mut();
            field.tick(delta, tracker.get().position());
            field.render(&mut CanvasSurface(&ctx));
        }

        // schedule next
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));

    Timeout.schedule(config.particle_start_delay_ms, Box::new(move || request_frame(&g)));
    log::debug!("particle loop starts in {}ms", config.particle_start_delay_ms);
    Ok(())
}

fn request_frame(f: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(win) = web_sys::window() else {
        return;
    };
    if let Some(callback) = f.borrow().as_ref() {
        if let Err(e) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {e:?}");
        }
    }
}

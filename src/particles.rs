//! Drifting particle field behind the splash.
//!
//! Motion is scaled by the real frame delta normalised to 60 fps, so speed is
//! the same on a 144 Hz monitor as on a throttled background tab.

use fastrand::Rng;

/// Milliseconds in one 60 fps frame.
const FRAME_MS: f64 = 16.67;
/// Sizes pulse within this fraction of the base size.
const PULSE_BAND: f64 = 0.3;
/// Particles larger than this get a glow pass.
const GLOW_THRESHOLD: f64 = 1.5;
const GLOW_BLUR: f64 = 15.0;
const GLOW_COLOR: &str = "rgba(52, 152, 219, 0.3)";
const REPEL_STRENGTH: f64 = 0.2;
const DAMPING: f64 = 0.98;

/// A point in CSS pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub base_size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub alpha: f64,
    pub pulse_speed: f64,
    pub pulse_direction: f64,
}

impl Particle {
    fn random(rng: &mut Rng, width: f64, height: f64) -> Self {
        let size = rng.f64() * 2.0 + 0.7;
        Self {
            x: rng.f64() * width,
            y: rng.f64() * height,
            size,
            base_size: size,
            speed_x: rng.f64() * 0.6 - 0.3,
            speed_y: rng.f64() * 0.6 - 0.3,
            alpha: rng.f64() * 0.3 + 0.2,
            pulse_speed: rng.f64() * 0.01 + 0.005,
            pulse_direction: if rng.bool() { 1.0 } else { -1.0 },
        }
    }

    pub fn color(&self) -> String {
        format!("rgba(52, 152, 219, {})", self.alpha)
    }

    fn update(&mut self, time_scale: f64, pointer: Option<Point>, radius: f64) {
        // the push is gated on where the particle was when the frame began
        let distance = pointer.map(|p| (self.x - p.x).hypot(self.y - p.y));

        self.x += self.speed_x * time_scale;
        self.y += self.speed_y * time_scale;

        self.size += self.pulse_direction * self.pulse_speed * time_scale;
        let min = self.base_size * (1.0 - PULSE_BAND);
        let max = self.base_size * (1.0 + PULSE_BAND);
        if self.size < min || self.size > max {
            self.pulse_direction = -self.pulse_direction;
            self.size = self.size.clamp(min, max);
        }

        if let (Some(p), Some(distance)) = (pointer, distance) {
            if distance > 0.0 && distance < radius {
                let (dx, dy) = (self.x - p.x, self.y - p.y);
                let force = (1.0 - distance / radius) * REPEL_STRENGTH;
                self.speed_x += dx * force * time_scale * 0.01;
                self.speed_y += dy * force * time_scale * 0.01;
                self.speed_x *= DAMPING;
                self.speed_y *= DAMPING;
            }
        }
    }
}

/// Wrap `v` into `[0, max)`.
fn wrap(v: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    let w = v.rem_euclid(max);
    // rem_euclid can round a tiny negative up to `max` itself
    if w >= max {
        0.0
    } else {
        w
    }
}

/// Glow pass parameters for large particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f64,
    pub color: &'static str,
}

/// Where particles are drawn. The wasm build wraps a 2D canvas context.
pub trait ParticleSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str, glow: Option<Glow>);
}

/// Backing-store size for the canvas, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_ratio: f64,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    count: usize,
    pointer_radius: f64,
    width: f64,
    height: f64,
    rng: Rng,
}

impl ParticleField {
    pub fn new(count: usize, pointer_radius: f64, rng: Rng) -> Self {
        Self {
            particles: Vec::with_capacity(count),
            count,
            pointer_radius,
            width: 0.0,
            height: 0.0,
            rng,
        }
    }

    /// Size the field to the viewport and regenerate every particle.
    pub fn setup(&mut self, viewport_width: f64, viewport_height: f64, pixel_ratio: f64) -> CanvasSize {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        self.width = viewport_width.max(0.0);
        self.height = viewport_height.max(0.0);
        self.particles.clear();
        for _ in 0..self.count {
            let mut p = Particle::random(&mut self.rng, self.width, self.height);
            p.x = wrap(p.x, self.width);
            p.y = wrap(p.y, self.height);
            self.particles.push(p);
        }
        log::debug!(
            "particle field {}x{} @{}x, {} particles",
            self.width,
            self.height,
            ratio,
            self.particles.len()
        );
        CanvasSize {
            css_width: self.width,
            css_height: self.height,
            pixel_width: (self.width * ratio) as u32,
            pixel_height: (self.height * ratio) as u32,
            pixel_ratio: ratio,
        }
    }

    /// Advance every particle by `delta_ms` of wall time.
    pub fn tick(&mut self, delta_ms: f64, pointer: Option<Point>) {
        let time_scale = delta_ms.max(0.0) / FRAME_MS;
        for p in &mut self.particles {
            p.update(time_scale, pointer, self.pointer_radius);
            p.x = wrap(p.x, self.width);
            p.y = wrap(p.y, self.height);
        }
    }

    pub fn render(&self, surface: &mut impl ParticleSurface) {
        surface.clear(self.width, self.height);
        for p in &self.particles {
            let glow = (p.size > GLOW_THRESHOLD).then_some(Glow {
                blur: GLOW_BLUR,
                color: GLOW_COLOR,
            });
            surface.fill_circle(Point::new(p.x, p.y), p.size, &p.color(), glow);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// Turns animation-frame timestamps into deltas. The first frame has none.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn delta(&mut self, timestamp: f64) -> f64 {
        let delta = self.last.map_or(0.0, |last| timestamp - last);
        self.last = Some(timestamp);
        delta
    }
}

/// Last pointer position seen anywhere on the page.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerTracker {
    position: Option<Point>,
}

impl PointerTracker {
    pub fn moved(&mut self, x: f64, y: f64) {
        self.position = Some(Point::new(x, y));
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

//! Pointer-driven depth offset for `.parallax-layer` elements.
//!
//! Nothing is remembered between pointer events: each update reads the
//! layer's rendered translation back and moves a fixed fraction of the way to
//! the target. Convergence therefore follows event frequency, not wall time.

use crate::attrs;

/// Rotation in degrees per pixel of (offset × factor).
const TILT: f64 = 0.05;

/// Pointer position relative to the viewport center.
pub fn center_offset(client_x: f64, client_y: f64, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
    (client_x - viewport_width / 2.0, client_y - viewport_height / 2.0)
}

/// Translation part of a computed CSS `transform` value.
///
/// Understands `none`, `matrix(a, b, c, d, e, f)` and the 16-value
/// `matrix3d(...)`; anything else reads as no translation.
pub fn read_translation(transform: &str) -> (f64, f64) {
    let t = transform.trim();
    let (args, tx, ty) = if let Some(rest) = t.strip_prefix("matrix3d(") {
        (rest, 12, 13)
    } else if let Some(rest) = t.strip_prefix("matrix(") {
        (rest, 4, 5)
    } else {
        return (0.0, 0.0);
    };
    let values: Vec<f64> = args
        .trim_end_matches(')')
        .split(',')
        .map(|v| v.trim().parse().unwrap_or(0.0))
        .collect();
    match (values.get(tx), values.get(ty)) {
        (Some(&x), Some(&y)) => (x, y),
        _ => (0.0, 0.0),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl LayerTransform {
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) rotateX({}deg) rotateY({}deg)",
            self.translate_x, self.translate_y, self.rotate_x, self.rotate_y
        )
    }
}

/// Layer parameters read from markup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub default_factor: f64,
    pub smoothing: f64,
}

impl Parallax {
    pub fn new(default_factor: f64, smoothing: f64) -> Self {
        Self {
            default_factor,
            smoothing,
        }
    }

    /// `data-parallax-factor`, or the default when missing or zero.
    pub fn factor(&self, raw: Option<&str>) -> f64 {
        attrs::float_or(raw, self.default_factor)
    }

    /// Next transform for one layer, given the pointer's center offset and
    /// the layer's currently rendered translation.
    pub fn step(&self, offset: (f64, f64), current: (f64, f64), factor: f64) -> LayerTransform {
        let (mx, my) = offset;
        let target_x = -mx * factor;
        let target_y = -my * factor;
        LayerTransform {
            translate_x: current.0 + (target_x - current.0) * self.smoothing,
            translate_y: current.1 + (target_y - current.1) * self.smoothing,
            rotate_x: -my * factor * TILT,
            rotate_y: mx * factor * TILT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_2d_and_3d_matrices() {
        assert_eq!(read_translation("none"), (0.0, 0.0));
        assert_eq!(read_translation("matrix(1, 0, 0, 1, 12.5, -3)"), (12.5, -3.0));
        assert_eq!(
            read_translation("matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 7, 8, 0, 1)"),
            (7.0, 8.0)
        );
        assert_eq!(read_translation("matrix(1, 0)"), (0.0, 0.0));
        assert_eq!(read_translation("rotate(3deg)"), (0.0, 0.0));
    }

    #[test]
    fn moves_five_percent_toward_target() {
        let parallax = Parallax::new(0.01, 0.05);
        let offset = center_offset(600.0, 300.0, 1000.0, 800.0);
        assert_eq!(offset, (100.0, -100.0));
        let t = parallax.step(offset, (0.0, 0.0), 0.02);
        // target (-2, 2)
        assert!((t.translate_x + 0.1).abs() < 1e-12);
        assert!((t.translate_y - 0.1).abs() < 1e-12);
        assert!((t.rotate_x - 0.1).abs() < 1e-12);
        assert!((t.rotate_y - 0.1).abs() < 1e-12);
    }

    #[test]
    fn converges_with_repeated_events() {
        let parallax = Parallax::new(0.01, 0.05);
        let mut current = (0.0, 0.0);
        for _ in 0..400 {
            let t = parallax.step((200.0, 0.0), current, 0.05);
            current = (t.translate_x, t.translate_y);
        }
        assert!((current.0 + 10.0).abs() < 1e-6);
        assert_eq!(current.1, 0.0);
    }

    #[test]
    fn factor_falls_back() {
        let parallax = Parallax::new(0.01, 0.05);
        assert_eq!(parallax.factor(None), 0.01);
        assert_eq!(parallax.factor(Some("0.04")), 0.04);
        assert_eq!(parallax.factor(Some("deep")), 0.01);
    }

    #[test]
    fn css_string() {
        let t = LayerTransform {
            translate_x: 1.5,
            translate_y: -2.0,
            rotate_x: 0.25,
            rotate_y: 0.0,
        };
        assert_eq!(t.to_css(), "translate3d(1.5px, -2px, 0) rotateX(0.25deg) rotateY(0deg)");
    }
}

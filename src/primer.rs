//! Starting state for stroke draw-in animations.

use crate::effect::Effect;

/// Hide a path behind a dash as long as itself, so animating
/// `stroke-dashoffset` to zero draws it in. Absent paths are skipped.
pub fn prime_path<E>(path: Option<E>, total_length: f64) -> Vec<Effect<E>>
where
    E: Clone,
{
    let Some(path) = path else {
        return Vec::new();
    };
    let length = total_length.to_string();
    vec![
        Effect::set_style(path.clone(), "stroke-dasharray", length.clone()),
        Effect::set_style(path, "stroke-dashoffset", length),
    ]
}

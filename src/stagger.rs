//! Delay curves for revealing groups of elements.

/// Width of the eased stagger window in milliseconds.
pub const EASED_SPAN_MS: f64 = 1000.0;

/// Ease-in-out (quadratic) remap of `progress`.
pub fn ease_in_out(progress: f64) -> f64 {
    if progress < 0.5 {
        2.0 * progress * progress
    } else {
        1.0 - (-2.0 * progress + 2.0).powi(2) / 2.0
    }
}

/// Delay for item `index` of `total`, spread over a one-second ease-in-out
/// curve starting at `base_ms`: slow start, fast middle, slow end.
///
/// `index == total` lands exactly on `base_ms + 1000`. An empty group has no
/// curve and returns `base_ms`.
pub fn eased_delay(base_ms: f64, index: usize, total: usize) -> f64 {
    if total == 0 {
        return base_ms;
    }
    let progress = index as f64 / total as f64;
    base_ms + ease_in_out(progress) * EASED_SPAN_MS
}

/// Reveal delay for subtitle span `index` of `count`.
///
/// The first half accelerates quadratically (`i² × 20`); the second half
/// counts down linearly from the end (`(count − i) × 80`).
pub fn subtitle_delay(index: usize, count: usize) -> f64 {
    let i = index as f64;
    let n = count as f64;
    if i < n / 2.0 {
        i * i * 20.0
    } else {
        (n - i) * 80.0
    }
}

/// Fallback delay for micro-animated span `index` when it declares none.
pub fn micro_delay(index: usize) -> f64 {
    index as f64 * 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eased_delay_is_monotonic_and_bounded() {
        for total in 1..40 {
            let mut prev = eased_delay(250.0, 0, total);
            assert_eq!(prev, 250.0);
            for index in 1..=total {
                let delay = eased_delay(250.0, index, total);
                assert!(delay >= prev, "total={total} index={index}");
                prev = delay;
            }
            assert!((prev - 1250.0).abs() < 1e-9);
        }
    }

    #[test]
    fn eased_delay_midpoint() {
        assert!((eased_delay(0.0, 2, 4) - 500.0).abs() < 1e-9);
        assert!((eased_delay(0.0, 1, 4) - 125.0).abs() < 1e-9);
        assert!((eased_delay(0.0, 3, 4) - 875.0).abs() < 1e-9);
    }

    #[test]
    fn empty_group_has_no_curve() {
        assert_eq!(eased_delay(700.0, 0, 0), 700.0);
    }

    #[test]
    fn subtitle_curve() {
        let delays: Vec<f64> = (0..6).map(|i| subtitle_delay(i, 6)).collect();
        assert_eq!(delays, [0.0, 20.0, 80.0, 240.0, 160.0, 80.0]);
        // odd count: the middle span still counts as the first half
        assert_eq!(subtitle_delay(2, 5), 80.0);
        assert_eq!(subtitle_delay(3, 5), 160.0);
    }

    #[test]
    fn micro_fallback() {
        assert_eq!(micro_delay(0), 0.0);
        assert_eq!(micro_delay(3), 180.0);
    }
}

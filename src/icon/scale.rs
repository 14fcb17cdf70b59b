//! Footprint clamping.

/// Scale `(width, height)` down so neither side exceeds `max_size`.
///
/// The scale factor is `max_size / max(width, height)` and results are
/// truncated, never rounded. Sizes already within bounds pass through
/// untouched. A side that truncates to zero is kept at 1.
pub fn fit_within(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    if width <= max_size && height <= max_size {
        return (width, height);
    }

    let scale = f64::from(max_size) / f64::from(width.max(height));
    (scaled(width, scale), scaled(height, scale))
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled(side: u32, scale: f64) -> u32 {
    ((f64::from(side) * scale) as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_bounds_unchanged() {
        assert_eq!(fit_within(48, 48, 80), (48, 48));
        assert_eq!(fit_within(80, 80, 80), (80, 80));
        assert_eq!(fit_within(3, 2, 80), (3, 2));
    }

    #[test]
    fn test_scales_larger_side_to_max() {
        assert_eq!(fit_within(160, 80, 80), (80, 40));
        assert_eq!(fit_within(100, 300, 80), (26, 80));
        assert_eq!(fit_within(81, 81, 80), (80, 80));
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 99 * (80 / 100) = 79.2, 57 * 0.8 = 45.6
        assert_eq!(fit_within(100, 57, 80), (80, 45));
    }

    #[test]
    fn test_extreme_ratio_stays_positive() {
        assert_eq!(fit_within(10_000, 1, 80), (80, 1));
    }

    #[test]
    fn test_invariant_over_grid() {
        for max in [16u32, 48, 80, 128] {
            for w in (1..600).step_by(37) {
                for h in (1..600).step_by(41) {
                    let (sw, sh) = fit_within(w, h, max);
                    assert!(sw > 0 && sh > 0);
                    if w <= max && h <= max {
                        assert_eq!((sw, sh), (w, h));
                        continue;
                    }

                    assert!(sw.max(sh) <= max, "{w}x{h} -> {sw}x{sh}");
                    let scale = f64::from(max) / f64::from(w.max(h));
                    for (side, out) in [(w, sw), (h, sh)] {
                        let exact = f64::from(side) * scale;
                        assert!(
                            exact - f64::from(out) < 1.0 || out == 1,
                            "{w}x{h} -> {sw}x{sh}"
                        );
                    }
                }
            }
        }
    }
}

//! Dimension math for width-bounded downscaling.
//!
//! Heights are derived from the width ratio and rounded half away from zero
//! (`f64::round`), clamped to at least one pixel.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Construct from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Calculate target dimensions for a maximum width, preserving aspect ratio.
///
/// Images at or below `max_width` are returned unchanged; there is no
/// upscaling.
///
/// # Example
/// ```
/// use pixpress_core::scale::{fit_width, Dimensions};
///
/// let scaled = fit_width(Dimensions::new(2000, 1000), 1024);
/// assert_eq!(scaled, Dimensions::new(1024, 512));
///
/// let unchanged = fit_width(Dimensions::new(800, 600), 1024);
/// assert_eq!(unchanged, Dimensions::new(800, 600));
/// ```
pub fn fit_width(current: Dimensions, max_width: u32) -> Dimensions {
    if current.width <= max_width {
        return current;
    }

    let ratio = max_width as f64 / current.width as f64;
    let new_height = (current.height as f64 * ratio).round() as u32;

    Dimensions::new(max_width, new_height.max(1))
}

/// Map a normalized quality factor in `[0, 1]` to the JPEG encoder's
/// `1..=100` scale.
///
/// 0 is smallest/worst, 1 is largest/best. The caller validates the range;
/// out-of-range values are clamped here only as a numeric safety net, and
/// NaN maps to the lowest quality rather than slipping past the clamp.
pub fn jpeg_quality(quality: f32) -> u8 {
    if quality.is_nan() {
        return 1;
    }
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fit_width_downscale() {
        let scaled = fit_width(Dimensions::new(4000, 3000), 800);
        assert_eq!(scaled, Dimensions::new(800, 600));
    }

    #[test]
    fn test_fit_width_no_upscale() {
        let scaled = fit_width(Dimensions::new(500, 400), 800);
        assert_eq!(scaled, Dimensions::new(500, 400));
    }

    #[test]
    fn test_fit_width_exact_bound_unchanged() {
        let scaled = fit_width(Dimensions::new(1024, 768), 1024);
        assert_eq!(scaled, Dimensions::new(1024, 768));
    }

    #[test]
    fn test_fit_width_height_rounds_to_nearest() {
        // 1000x333 -> 100 wide: 333 * 0.1 = 33.3, rounds down to 33.
        assert_eq!(fit_width(Dimensions::new(1000, 333), 100).height, 33);
        // 1000x335 -> 100 wide: 33.5 rounds half away from zero to 34.
        assert_eq!(fit_width(Dimensions::new(1000, 335), 100).height, 34);
    }

    #[test]
    fn test_fit_width_never_zero_height() {
        // Extreme panorama: 10000x1 -> 100 wide would round to height 0.
        let scaled = fit_width(Dimensions::new(10_000, 1), 100);
        assert_eq!(scaled.height, 1);
    }

    #[test]
    fn test_jpeg_quality_mapping() {
        assert_eq!(jpeg_quality(0.0), 1);
        assert_eq!(jpeg_quality(0.6), 60);
        assert_eq!(jpeg_quality(1.0), 100);
    }

    #[test]
    fn test_jpeg_quality_non_finite_stays_in_range() {
        assert_eq!(jpeg_quality(f32::NAN), 1);
        assert_eq!(jpeg_quality(f32::INFINITY), 100);
        assert_eq!(jpeg_quality(f32::NEG_INFINITY), 1);
    }

    proptest! {
        #[test]
        fn prop_width_is_bounded(w in 1u32..10_000, h in 1u32..10_000, max in 1u32..5_000) {
            let scaled = fit_width(Dimensions::new(w, h), max);
            prop_assert!(scaled.width <= w);
            prop_assert!(scaled.width <= max);
        }

        #[test]
        fn prop_no_upscale(w in 1u32..5_000, h in 1u32..5_000) {
            let scaled = fit_width(Dimensions::new(w, h), w);
            prop_assert_eq!(scaled, Dimensions::new(w, h));
        }

        #[test]
        fn prop_aspect_ratio_preserved(w in 64u32..10_000, h in 64u32..10_000, max in 32u32..5_000) {
            // Skip degenerate panoramas where the scaled height clamps to 1.
            prop_assume!(h as f64 * max as f64 / w as f64 >= 1.0);
            let original = Dimensions::new(w, h);
            let scaled = fit_width(original, max);
            // Rounding to whole pixels can move the ratio by at most one
            // pixel's worth of height.
            let tolerance = 1.0 / scaled.height as f64 * scaled.aspect_ratio();
            prop_assert!((scaled.aspect_ratio() - original.aspect_ratio()).abs() <= tolerance);
        }
    }
}

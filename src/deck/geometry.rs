//! Slide geometry in English Metric Units.
//!
//! Everything placed on a slide is measured in EMU: 914400 per inch, 12700
//! per point. Placement math is done in `f64` and truncated to whole EMU.

/// EMU per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// EMU per typographic point.
pub const EMU_PER_POINT: i64 = 12_700;

/// Convert inches to EMU, truncating.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH as f64) as i64
}

/// Convert points to EMU, truncating.
#[inline]
pub fn points(value: f64) -> i64 {
    (value * EMU_PER_POINT as f64) as i64
}

/// Fixed drawable area of every slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    /// Width in EMU
    pub width: i64,
    /// Height in EMU
    pub height: i64,
}

impl Canvas {
    /// Create a canvas from EMU dimensions.
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Create a canvas from dimensions in inches.
    pub fn from_inches(width: f64, height: f64) -> Self {
        Self::new(inches(width), inches(height))
    }

    /// 10 x 7.5 inches.
    pub const STANDARD_4_3: Canvas = Canvas::new(9_144_000, 6_858_000);

    /// 16 x 9 inches.
    pub const WIDE_16_9: Canvas = Canvas::new(14_630_400, 8_229_600);

    /// Smallest slide side PowerPoint accepts, 1 inch.
    pub const MIN_SIDE: i64 = 914_400;

    /// Largest slide side PowerPoint accepts, 56 inches.
    pub const MAX_SIDE: i64 = 51_206_400;

    /// Whether both sides are within the slide size range PowerPoint accepts.
    pub fn is_valid_slide_size(&self) -> bool {
        let range = Self::MIN_SIDE..=Self::MAX_SIDE;
        range.contains(&self.width) && range.contains(&self.height)
    }

    fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Position and size of a picture on the canvas, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Distance from the canvas's left edge
    pub left: i64,
    /// Distance from the canvas's top edge
    pub top: i64,
    /// Scaled width, at most the canvas width
    pub width: i64,
    /// Scaled height, at most the canvas height
    pub height: i64,
}

/// Scale a `native_w` x `native_h` pixel image to the largest size that fits
/// `canvas` with its aspect ratio kept, centered on both axes.
///
/// Returns `None` for a zero-sized source, a degenerate canvas, or a result
/// that truncates to nothing on either axis.
pub fn fit_to_canvas(canvas: Canvas, native_w: u32, native_h: u32) -> Option<Placement> {
    if native_w == 0 || native_h == 0 || canvas.is_degenerate() {
        return None;
    }

    let aspect = f64::from(native_w) / f64::from(native_h);
    let canvas_w = canvas.width as f64;
    let canvas_h = canvas.height as f64;

    let (width, height) = if canvas_w / canvas_h > aspect {
        // Height-constrained
        (canvas_h * aspect, canvas_h)
    } else {
        // Width-constrained
        (canvas_w, canvas_w / aspect)
    };

    let width = (width as i64).min(canvas.width);
    let height = (height as i64).min(canvas.height);
    if width <= 0 || height <= 0 {
        return None;
    }

    Some(Placement {
        left: (canvas.width - width) / 2,
        top: (canvas.height - height) / 2,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unit_conversions() {
        assert_eq!(inches(1.0), EMU_PER_INCH);
        assert_eq!(inches(0.1), 91_440);
        assert_eq!(points(44.0), 558_800);
        assert_eq!(Canvas::from_inches(16.0, 9.0), Canvas::WIDE_16_9);
        assert_eq!(Canvas::from_inches(10.0, 7.5), Canvas::STANDARD_4_3);
    }

    #[test]
    fn test_wide_image_on_4_3_is_width_constrained() {
        let p = fit_to_canvas(Canvas::STANDARD_4_3, 1920, 1080).unwrap();
        assert_eq!(p.width, 9_144_000);
        assert_eq!(p.height, 5_143_500);
        assert_eq!(p.left, 0);
        assert_eq!(p.top, (6_858_000 - 5_143_500) / 2);
    }

    #[test]
    fn test_portrait_image_on_16_9_is_height_constrained() {
        let p = fit_to_canvas(Canvas::WIDE_16_9, 1000, 2000).unwrap();
        assert_eq!(p.height, 8_229_600);
        assert_eq!(p.width, 4_114_800);
        assert_eq!(p.top, 0);
        assert_eq!(p.left, (14_630_400 - 4_114_800) / 2);
    }

    #[test]
    fn test_same_aspect_fills_canvas() {
        let p = fit_to_canvas(Canvas::STANDARD_4_3, 800, 600).unwrap();
        assert_eq!(
            p,
            Placement {
                left: 0,
                top: 0,
                width: 9_144_000,
                height: 6_858_000
            }
        );
    }

    #[test]
    fn test_zero_dimensions_have_no_placement() {
        assert_eq!(fit_to_canvas(Canvas::STANDARD_4_3, 0, 600), None);
        assert_eq!(fit_to_canvas(Canvas::STANDARD_4_3, 800, 0), None);
        assert_eq!(fit_to_canvas(Canvas::new(0, 100), 800, 600), None);
    }

    #[test]
    fn test_extreme_aspect_truncating_to_zero() {
        // 1 EMU tall canvas; any landscape image rounds down to zero height
        assert_eq!(fit_to_canvas(Canvas::new(1, 1), 1000, 1), None);
    }

    proptest! {
        #[test]
        fn fit_stays_inside_canvas(
            w in 1u32..20_000,
            h in 1u32..20_000,
            cw in 1_000i64..20_000_000,
            ch in 1_000i64..20_000_000,
        ) {
            let canvas = Canvas::new(cw, ch);
            if let Some(p) = fit_to_canvas(canvas, w, h) {
                prop_assert!(p.left >= 0 && p.top >= 0);
                prop_assert!(p.left + p.width <= cw);
                prop_assert!(p.top + p.height <= ch);
                // One axis matches the canvas exactly
                prop_assert!(p.width == cw || p.height == ch);
            }
        }

        #[test]
        fn fit_keeps_aspect_ratio(
            w in 1u32..10_000,
            h in 1u32..10_000,
        ) {
            let canvas = Canvas::WIDE_16_9;
            let p = fit_to_canvas(canvas, w, h).unwrap();
            // Cross-multiplied aspect error bounded by truncation of one EMU
            let lhs = p.width as i128 * h as i128;
            let rhs = p.height as i128 * w as i128;
            prop_assert!((lhs - rhs).abs() <= 2 * w.max(h) as i128);
        }
    }
}

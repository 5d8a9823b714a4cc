use crate::geometry::rect::{PercentRect, PixelRect, SurfaceSize};

/// Scales a pixel-space rect to percentage-of-surface space. Returns
/// `None` when either surface dimension is zero so callers skip the
/// backend transmission instead of dividing by zero on a surface that
/// has not been laid out. Output is not clamped to [0, 100]; the
/// backend rejects out-of-range values.
pub fn to_percent(rect: PixelRect, surface: SurfaceSize) -> Option<PercentRect> {
    if !surface.is_sized() {
        return None;
    }
    Some(PercentRect {
        x: rect.x / surface.width * 100.0,
        y: rect.y / surface.height * 100.0,
        w: rect.width / surface.width * 100.0,
        h: rect.height / surface.height * 100.0,
    })
}

/// Inverse of [`to_percent`], for display against the current surface.
pub fn to_pixels(rect: PercentRect, surface: SurfaceSize) -> Option<PixelRect> {
    if !surface.is_sized() {
        return None;
    }
    Some(PixelRect {
        x: rect.x / 100.0 * surface.width,
        y: rect.y / 100.0 * surface.height,
        width: rect.w / 100.0 * surface.width,
        height: rect.h / 100.0 * surface.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect::PixelPoint;

    const TOLERANCE: f64 = 1e-9;

    fn assert_rect_close(a: PixelRect, b: PixelRect) {
        assert!((a.x - b.x).abs() < TOLERANCE, "{a:?} vs {b:?}");
        assert!((a.y - b.y).abs() < TOLERANCE, "{a:?} vs {b:?}");
        assert!((a.width - b.width).abs() < TOLERANCE, "{a:?} vs {b:?}");
        assert!((a.height - b.height).abs() < TOLERANCE, "{a:?} vs {b:?}");
    }

    #[test]
    fn quarter_rect_on_half_surface_scales_to_quarter_percentages() {
        // 400x200 surface, operator drags 100,50 -> 300,150.
        let rect = PixelRect::from_corners(PixelPoint::new(100.0, 50.0), PixelPoint::new(300.0, 150.0));
        let percent = to_percent(rect, SurfaceSize::new(400.0, 200.0)).unwrap();
        assert_eq!(percent, PercentRect::new(25.0, 25.0, 50.0, 50.0));
    }

    #[test]
    fn round_trip_recovers_pixel_rect() {
        let surface = SurfaceSize::new(1280.0, 720.0);
        for rect in [
            PixelRect::new(0.0, 0.0, 1280.0, 720.0),
            PixelRect::new(13.5, 27.25, 301.0, 99.75),
            PixelRect::new(640.0, 360.0, 1.0, 1.0),
        ] {
            let back = to_pixels(to_percent(rect, surface).unwrap(), surface).unwrap();
            assert_rect_close(rect, back);
        }
    }

    #[test]
    fn zero_surface_skips_normalization() {
        let rect = PixelRect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(to_percent(rect, SurfaceSize::new(0.0, 200.0)), None);
        assert_eq!(to_percent(rect, SurfaceSize::new(400.0, 0.0)), None);
        assert_eq!(to_pixels(PercentRect::new(1.0, 1.0, 1.0, 1.0), SurfaceSize::default()), None);
    }

    #[test]
    fn output_is_not_clamped() {
        let rect = PixelRect::new(500.0, 0.0, 100.0, 50.0);
        let percent = to_percent(rect, SurfaceSize::new(400.0, 200.0)).unwrap();
        assert_eq!(percent.x, 125.0);
    }
}

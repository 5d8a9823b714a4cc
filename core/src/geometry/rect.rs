use serde::{Deserialize, Serialize};

/// A pointer position in rendering-surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle in rendering-surface pixel space. Used only transiently
/// while the pointer is down; never persisted or transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the rect spanned by two pointer positions, normalizing a
    /// drag in any direction to non-negative extents.
    pub fn from_corners(anchor: PixelPoint, end: PixelPoint) -> Self {
        Self {
            x: anchor.x.min(end.x),
            y: anchor.y.min(end.y),
            width: (end.x - anchor.x).abs(),
            height: (end.y - anchor.y).abs(),
        }
    }

    /// A zero-width or zero-height rect is semantically "unset".
    pub fn is_unset(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Rectangle in percentage-of-source-frame space (0-100). The only
/// representation persisted or sent to the backend; field names match
/// the `set_roi` wire body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PercentRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl PercentRect {
    pub const ZERO: PercentRect = PercentRect {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };

    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_unset(&self) -> bool {
        self.w == 0.0 || self.h == 0.0
    }
}

/// Current size of the rendering surface backing a feed. Zero in either
/// dimension means the surface has not been laid out yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_sized(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes_reverse_drag() {
        let rect = PixelRect::from_corners(PixelPoint::new(300.0, 150.0), PixelPoint::new(100.0, 50.0));
        assert_eq!(rect, PixelRect::new(100.0, 50.0, 200.0, 100.0));
    }

    #[test]
    fn zero_extent_rect_is_unset() {
        assert!(PixelRect::new(10.0, 10.0, 0.0, 40.0).is_unset());
        assert!(PercentRect::ZERO.is_unset());
        assert!(!PercentRect::new(1.0, 1.0, 2.0, 2.0).is_unset());
    }

    #[test]
    fn unlaid_out_surface_is_not_sized() {
        assert!(!SurfaceSize::default().is_sized());
        assert!(SurfaceSize::new(640.0, 480.0).is_sized());
    }
}

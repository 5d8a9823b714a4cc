pub mod normalize;
pub mod rect;

pub use normalize::{to_percent, to_pixels};
pub use rect::{PercentRect, PixelPoint, PixelRect, SurfaceSize};

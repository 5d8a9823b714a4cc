//! Convenience re-exports for downstream consumers.

pub use crate::api::{
    AckResponse, HistoryEntry, HistoryResponse, StartProcessingRequest, StatsResponse,
    StopProcessingRequest, UploadResponse,
};
pub use crate::feed::{Feed, FeedLifecycle, FeedSource, RoiState, RoiSubmission};
pub use crate::geometry::{to_percent, to_pixels, PercentRect, PixelPoint, PixelRect, SurfaceSize};
pub use crate::history::{sort_descending, HistoryTable, TableRow};
pub use crate::stats::{AggregateSnapshot, AlertLevel, Reading, RoundTracker, StatsSnapshot};
pub use crate::{FeedError, FeedResult};

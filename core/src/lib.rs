//! Client-side coordination core for the multi-feed crowd-monitoring
//! dashboard.
//!
//! The modules cover the per-feed lifecycle, the pixel/percentage ROI
//! normalization, and the poll-round aggregation that the dashboard
//! runtime drives against the analysis backend. Everything here is pure
//! and IO-free; HTTP lives in the `dashboard` crate.

pub mod api;
pub mod feed;
pub mod geometry;
pub mod history;
pub mod prelude;
pub mod stats;

pub use feed::{Feed, FeedLifecycle, FeedSource, RoiState};

/// Common error type for feed-level preconditions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("feed {0} is not active; start the feed before drawing an ROI")]
    NotActive(usize),
    #[error("feed {0} is already starting or active")]
    AlreadyRunning(usize),
}

pub type FeedResult<T> = Result<T, FeedError>;

pub mod lifecycle;
pub mod machine;

pub use lifecycle::{FeedLifecycle, FeedSource};
pub use machine::{Feed, RoiState, RoiSubmission};

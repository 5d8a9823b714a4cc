//! Serde types for the backend HTTP contract.

pub mod request;
pub mod response;

pub use request::{StartProcessingRequest, StopProcessingRequest};
pub use response::{AckResponse, HistoryEntry, HistoryResponse, StatsResponse, UploadResponse};

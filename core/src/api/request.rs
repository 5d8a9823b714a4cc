use serde::{Deserialize, Serialize};

/// Body of `POST /start_processing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartProcessingRequest {
    pub source_type: String,
    pub source_path: String,
    pub feed: usize,
}

/// Body of `POST /stop_processing`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StopProcessingRequest {
    pub feed: usize,
}

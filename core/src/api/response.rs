use serde::{Deserialize, Serialize};

/// Generic command acknowledgement (`set_roi`, `start_processing`,
/// `stop_processing`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Response of `POST /upload_video`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of `GET /get_current_stats`. Densities are `null` when the
/// backend has nothing numeric to report for the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(default)]
    pub people_count: u32,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub pred_density: Option<f64>,
    #[serde(default)]
    pub alert_message: String,
}

/// One server-held head-count record; read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub time: String,
    pub people_count: u32,
}

/// Response of `GET /get_head_count_history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_response_tolerates_null_densities() {
        let parsed: StatsResponse = serde_json::from_str(
            r#"{"success":true,"people_count":7,"density":null,"pred_density":0.12,"alert_message":"Normal"}"#,
        )
        .unwrap();
        assert_eq!(parsed.people_count, 7);
        assert_eq!(parsed.density, None);
        assert_eq!(parsed.pred_density, Some(0.12));
    }

    #[test]
    fn history_response_defaults_to_empty() {
        let parsed: HistoryResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(parsed.history.is_empty());
    }
}

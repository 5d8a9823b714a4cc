use crate::api::StatsResponse;
use crate::stats::reading::Reading;

/// Display state produced by one successful poll of one feed. Each
/// snapshot supersedes the previous one; nothing is retained
/// client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub people_count: u32,
    pub density: Reading,
    pub predicted_density: Reading,
    pub alert_message: String,
}

impl StatsSnapshot {
    pub fn from_response(response: &StatsResponse) -> Self {
        Self {
            people_count: response.people_count,
            density: Reading::from_wire(response.density),
            predicted_density: Reading::from_wire(response.pred_density),
            alert_message: response.alert_message.clone(),
        }
    }

    /// The zero/placeholder values displayed after a feed is stopped.
    pub fn placeholder() -> Self {
        Self {
            people_count: 0,
            density: Reading::Value(0.0),
            predicted_density: Reading::NotApplicable,
            alert_message: "Normal".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_maps_null_density_to_not_applicable() {
        let response = StatsResponse {
            success: true,
            people_count: 12,
            density: None,
            pred_density: Some(0.25),
            alert_message: "WARNING: crowded".into(),
        };
        let snapshot = StatsSnapshot::from_response(&response);
        assert_eq!(snapshot.density, Reading::NotApplicable);
        assert_eq!(snapshot.predicted_density, Reading::Value(0.25));
    }

    #[test]
    fn placeholder_matches_stopped_display() {
        let snapshot = StatsSnapshot::placeholder();
        assert_eq!(snapshot.people_count, 0);
        assert_eq!(snapshot.density.to_string(), "0.0000");
        assert_eq!(snapshot.predicted_density.to_string(), "N/A");
        assert_eq!(snapshot.alert_message, "Normal");
    }
}

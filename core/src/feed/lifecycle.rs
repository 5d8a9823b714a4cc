use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of one feed. Transitions are caused only by operator
/// commands and their backend acknowledgements, never by the polling
/// path. `Starting` is the optimistic transient between the command
/// and its ack; `Stopped` is permission-equivalent to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedLifecycle {
    Idle,
    Starting,
    Active,
    Stopped,
}

impl FeedLifecycle {
    pub fn can_start(self) -> bool {
        matches!(self, FeedLifecycle::Idle | FeedLifecycle::Stopped)
    }

    /// ROI drawing is permitted only while the live stream is up.
    pub fn can_draw(self) -> bool {
        matches!(self, FeedLifecycle::Active)
    }
}

/// Video source driving a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// Webcam, identified by device index (sent as a string path).
    Webcam(String),
    /// Server-side path of an uploaded video file.
    File(String),
}

impl FeedSource {
    /// The `source_type` wire value.
    pub fn type_label(&self) -> &'static str {
        match self {
            FeedSource::Webcam(_) => "webcam",
            FeedSource::File(_) => "file",
        }
    }

    /// The `source_path` wire value.
    pub fn path(&self) -> &str {
        match self {
            FeedSource::Webcam(index) => index,
            FeedSource::File(path) => path,
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.type_label(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_behaves_like_idle_for_permissions() {
        assert!(FeedLifecycle::Idle.can_start());
        assert!(FeedLifecycle::Stopped.can_start());
        assert!(!FeedLifecycle::Starting.can_start());
        assert!(!FeedLifecycle::Active.can_start());
        assert!(FeedLifecycle::Active.can_draw());
        assert!(!FeedLifecycle::Stopped.can_draw());
    }

    #[test]
    fn source_maps_to_wire_fields() {
        let source = FeedSource::Webcam("0".into());
        assert_eq!(source.type_label(), "webcam");
        assert_eq!(source.path(), "0");
        let source = FeedSource::File("uploads/f1.mp4".into());
        assert_eq!(source.type_label(), "file");
        assert_eq!(source.path(), "uploads/f1.mp4");
    }
}

use std::fmt;

/// Severity derived from the alert message text. Case-sensitive
/// substring match; CRITICAL takes precedence over WARNING.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Normal,
    Warning,
    Critical,
}

impl AlertLevel {
    pub fn classify(message: &str) -> Self {
        if message.contains("CRITICAL") {
            AlertLevel::Critical
        } else if message.contains("WARNING") {
            AlertLevel::Warning
        } else {
            AlertLevel::Normal
        }
    }

    /// Styling hook consumed by the rendering layer.
    pub fn class_name(self) -> &'static str {
        match self {
            AlertLevel::Normal => "alert-normal",
            AlertLevel::Warning => "alert-warning",
            AlertLevel::Critical => "alert-critical",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertLevel::Normal => write!(f, "normal"),
            AlertLevel::Warning => write!(f, "warning"),
            AlertLevel::Critical => write!(f, "critical"),
        }
    }
}

use std::fmt;

/// A density-style reading that may be absent. Non-numeric backend
/// values display as "N/A" and never contaminate aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Reading {
    Value(f64),
    #[default]
    NotApplicable,
}

impl Reading {
    /// Maps an optional wire value; `null` and non-finite numbers both
    /// collapse to [`Reading::NotApplicable`].
    pub fn from_wire(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Reading::Value(v),
            _ => Reading::NotApplicable,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Reading::Value(v) => Some(v),
            Reading::NotApplicable => None,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Value(v) => write!(f, "{v:.4}"),
            Reading::NotApplicable => write!(f, "N/A"),
        }
    }
}

//! Status severity value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a status line shown on the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral progress information
    #[default]
    Info,
    /// A completed action
    Success,
    /// A failed or rejected action
    Error,
}

impl Severity {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn labels() {
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Success).expect("serialize");
        assert_eq!(json, r#""success""#);
    }
}

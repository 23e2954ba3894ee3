//! Status board
//!
//! Holds the latest one-line panel status. Reports are also mirrored to
//! the tracing log at a level matching their severity.

use application::ports::StatusPort;
use chrono::{DateTime, Utc};
use domain::value_objects::Severity;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{error, info};

/// In-process implementation of the status port
pub struct StatusBoard {
    current: RwLock<StatusSnapshot>,
}

/// The latest reported status
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    /// Status text
    pub message: String,
    /// Message severity
    pub severity: Severity,
    /// When the message was reported
    pub timestamp: DateTime<Utc>,
}

impl StatusBoard {
    /// Create a status board showing the given boot message
    #[must_use]
    pub fn new(initial_message: &str) -> Self {
        Self {
            current: RwLock::new(StatusSnapshot {
                message: initial_message.to_string(),
                severity: Severity::Info,
                timestamp: Utc::now(),
            }),
        }
    }

    /// The latest status
    #[must_use]
    pub fn snapshot(&self) -> StatusSnapshot {
        self.current.read().clone()
    }
}

impl StatusPort for StatusBoard {
    fn report(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => error!(status = %message, "Panel status"),
            Severity::Info | Severity::Success => info!(status = %message, "Panel status"),
        }

        *self.current.write() = StatusSnapshot {
            message: message.to_string(),
            severity,
            timestamp: Utc::now(),
        };
    }
}

//! Activity-log value types.
//!
//! The core never renders or stores log entries itself; it hands them to
//! the `ActivityLog` port defined in the `app` crate.

use serde::{Deserialize, Serialize};

use crate::time::{self, Timestamp};

/// How prominently an entry should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogImportance {
    Minor,
    Important,
}

/// One human-readable record of something that happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The component that produced the entry ("Map Settings", "Simulation", …).
    pub component: String,
    pub message: String,
    pub importance: LogImportance,
    pub timestamp: Timestamp,
}

impl LogEntry {
    /// Create an entry stamped with the current wall-clock time.
    #[must_use]
    pub fn new(
        component: impl Into<String>,
        message: impl Into<String>,
        importance: LogImportance,
    ) -> Self {
        Self {
            component: component.into(),
            message: message.into(),
            importance,
            timestamp: time::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_stamp_entry_with_current_time() {
        let before = time::now();
        let entry = LogEntry::new("Simulation", "Away mode enabled", LogImportance::Important);
        assert!(entry.timestamp >= before);
        assert_eq!(entry.component, "Simulation");
    }

    #[test]
    fn should_order_importance_levels() {
        assert!(LogImportance::Minor < LogImportance::Important);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let entry = LogEntry::new("Map Settings", "Room added: Kitchen", LogImportance::Minor);
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}

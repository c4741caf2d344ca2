//! Timestamped history of button clicks, capped at [`MAX_ENTRIES`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entries kept before the oldest are dropped.
pub const MAX_ENTRIES: usize = 500;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub details: String,
}

/// Timestamped record of what the user did in this and earlier sessions.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: impl Into<String>, details: impl Into<String>) {
        self.entries.push(ActivityEntry {
            timestamp: Utc::now(),
            action: action.into(),
            details: details.into(),
        });

        if self.entries.len() > MAX_ENTRIES {
            self.entries.drain(0..self.entries.len() - MAX_ENTRIES);
        }
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_clear() {
        let mut log = ActivityLog::new();
        assert!(log.is_empty());
        log.push("Load Data", "Loaded 15 customers");
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries().first().map(|e| e.action.as_str()), Some("Load Data"));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_is_capped() {
        let mut log = ActivityLog::new();
        for i in 0..MAX_ENTRIES + 20 {
            log.push("Generate Data", i.to_string());
        }
        assert_eq!(log.len(), MAX_ENTRIES);
        assert_eq!(log.entries().first().map(|e| e.details.as_str()), Some("20"));
    }
}

//! Log entry structure

use super::call_site::CallSite;
use super::log_level::LogLevel;
use super::timestamp::Clock;
use serde::Serialize;

/// One immutable log record.
///
/// The timestamp is taken when the entry is built, on the producer's thread,
/// so it reflects submission order rather than the moment it reaches the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    timestamp: String,
    source_name: String,
    caller_name: String,
    level: LogLevel,
    message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, site: &CallSite, message: String, clock: &dyn Clock) -> Self {
        Self::with_timestamp(clock.timestamp(), level, site, message)
    }

    pub fn with_timestamp(
        timestamp: String,
        level: LogLevel,
        site: &CallSite,
        message: String,
    ) -> Self {
        Self {
            timestamp,
            source_name: site.source_name().to_owned(),
            caller_name: site.caller_name().to_owned(),
            level,
            message,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn caller_name(&self) -> &str {
        &self.caller_name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timestamp::FixedClock;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_entry_captures_clock_and_site() {
        let clock = FixedClock::new(
            Local
                .with_ymd_and_hms(2025, 6, 1, 8, 0, 0)
                .single()
                .expect("valid datetime"),
        );
        let site = CallSite::new("orders", "submit");
        let entry = LogEntry::new(LogLevel::Warning, &site, "slow".to_string(), &clock);

        assert_eq!(entry.timestamp(), "01-06-2025 08:00:00:000 AM");
        assert_eq!(entry.source_name(), "orders");
        assert_eq!(entry.caller_name(), "submit");
        assert_eq!(entry.level(), LogLevel::Warning);
        assert_eq!(entry.message(), "slow");
    }

    #[test]
    fn test_message_is_kept_verbatim() {
        let site = CallSite::new("a", "b");
        let entry = LogEntry::with_timestamp(
            "t".to_string(),
            LogLevel::Info,
            &site,
            "line one\nline two".to_string(),
        );
        assert_eq!(entry.message(), "line one\nline two");
    }

    #[test]
    fn test_serializes_level_tag() {
        let site = CallSite::new("a", "b");
        let entry = LogEntry::with_timestamp("t".into(), LogLevel::Error, &site, "m".into());
        let json = serde_json::to_string(&entry).expect("serializable");
        assert!(json.contains("\"level\":\"ERROR\""));
    }
}

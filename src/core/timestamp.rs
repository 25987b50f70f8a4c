//! Entry timestamps
//!
//! Every entry carries a local-time stamp in the fixed layout
//! `dd-MM-yyyy hh:mm:ss:fff tt`, for example `08-01-2025 03:04:05:123 PM`.
//! Time is read through the [`Clock`] trait so tests can pin it.

use chrono::{DateTime, Local};
use std::sync::Arc;

/// strftime pattern for `dd-MM-yyyy hh:mm:ss:fff tt`
pub const ENTRY_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %I:%M:%S:%3f %p";

/// Format a local time with [`ENTRY_TIMESTAMP_FORMAT`].
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use rust_queue_logger::core::timestamp::format_timestamp;
///
/// let time = Local.with_ymd_and_hms(2025, 1, 8, 15, 4, 5).unwrap();
/// assert_eq!(format_timestamp(&time), "08-01-2025 03:04:05:000 PM");
/// ```
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Local>) -> String {
    datetime.format(ENTRY_TIMESTAMP_FORMAT).to_string()
}

/// Source of the current time for new entries.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// The current time, already formatted for an entry.
    fn timestamp(&self) -> String {
        format_timestamp(&self.now())
    }
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that always reports the same instant.
///
/// Useful for producing byte-identical log files.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Shared clock handle held by the logger.
pub type SharedClock = Arc<dyn Clock>;

//! Producer-side severity filtering
//!
//! The filter is consulted before an entry is built, so a rejected call costs
//! neither a timestamp nor a queue push.

use super::log_level::LogLevel;

/// Maps a configured minimum level to an accept/reject decision per call.
///
/// `EXCEPTION` is the highest rank, so exceptions pass whatever the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeverityFilter {
    min_level: LogLevel,
}

impl SeverityFilter {
    pub const fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    /// Apply a level name such as `"warning"`.
    ///
    /// Unrecognized names leave the current level untouched and return `false`.
    pub fn set_level_str(&mut self, level: &str) -> bool {
        match level.parse::<LogLevel>() {
            Ok(parsed) => {
                self.min_level = parsed;
                true
            }
            Err(_) => false,
        }
    }

    #[inline]
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether a call at `level` should produce an entry.
    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        self.min_level <= level
    }
}

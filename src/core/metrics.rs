//! Logger metrics for observability
//!
//! Write failures are swallowed by design, so these counters (and the
//! optional [`FailureCallback`]) are the only way to notice them.

use super::error::LoggerError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Called from the writer thread for every entry whose write failed.
pub type FailureCallback = Arc<dyn Fn(&LoggerError) + Send + Sync>;

/// Counters describing what happened to logging calls.
///
/// # Example
///
/// ```
/// use rust_queue_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_enqueued();
/// metrics.record_written();
///
/// assert_eq!(metrics.enqueued_count(), 1);
/// assert_eq!(metrics.written_count(), 1);
/// assert_eq!(metrics.failure_rate(), 0.0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries accepted by the filter and pushed to the queue
    enqueued: AtomicU64,

    /// Calls rejected by the severity filter
    filtered: AtomicU64,

    /// Entries appended to the sink
    written: AtomicU64,

    /// Entries lost because the sink failed or panicked
    write_failures: AtomicU64,

    /// Calls made once stopping had begun
    rejected_after_stop: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            rejected_after_stop: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn enqueued_count(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written_count(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failure_count(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rejected_after_stop_count(&self) -> u64 {
        self.rejected_after_stop.load(Ordering::Relaxed)
    }

    /// Record an enqueued entry, returning the previous count
    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rejected_after_stop(&self) -> u64 {
        self.rejected_after_stop.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of processed entries that failed, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been processed.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failure_count() as f64;
        let total = self.written_count() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            enqueued: AtomicU64::new(self.enqueued_count()),
            filtered: AtomicU64::new(self.filtered_count()),
            written: AtomicU64::new(self.written_count()),
            write_failures: AtomicU64::new(self.write_failure_count()),
            rejected_after_stop: AtomicU64::new(self.rejected_after_stop_count()),
        }
    }
}

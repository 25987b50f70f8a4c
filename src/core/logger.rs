//! Main logger implementation
//!
//! Producers call the leveled methods from any thread. Each call is filtered,
//! turned into a [`LogEntry`] stamped with the current time and pushed onto an
//! unbounded queue; nothing else happens on the caller's thread. A single
//! writer thread, started with [`Logger::start`], appends the entries to the
//! sink in queue order. [`Logger::stop`] blocks until every queued entry has
//! been written.

use super::{
    call_site::CallSite,
    config::LoggerConfig,
    error::{panic_message, LoggerError, Result},
    exception::describe_error,
    filter::SeverityFilter,
    lifecycle::LifecycleState,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::{FailureCallback, LoggerMetrics},
    queue::EntryQueue,
    sink::Sink,
    timestamp::{Clock, SharedClock, SystemClock},
    writer::{SharedSink, WriterLoop},
};
use crate::sinks::FileSink;
use crossbeam_channel::{bounded, Sender};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

/// Name given to every writer thread.
pub const WRITER_THREAD_NAME: &str = "rust-queue-logger";

pub struct Logger {
    filter: SeverityFilter,
    log_path: PathBuf,
    queue: EntryQueue,
    /// Producers hold a read guard while pushing, so once `stop` has written
    /// `Stopping` no further entry can reach the queue.
    state: RwLock<LifecycleState>,
    worker: Mutex<WorkerSlot>,
    sink: SharedSink,
    clock: SharedClock,
    /// Metrics for observability (enqueued, written, failed, etc.)
    metrics: Arc<LoggerMetrics>,
    on_failure: Option<FailureCallback>,
}

#[derive(Default)]
struct WorkerSlot {
    stop_signal: Option<Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```no_run
    /// use rust_queue_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level("WARNING")
    ///     .directory("/var/log/billing")
    ///     .app_name("billing")
    ///     .build();
    /// logger.start().unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Whether a call at `level` would produce an entry.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.filter.accepts(level)
    }

    pub fn log(&self, level: LogLevel, site: &CallSite, message: impl Into<String>) {
        if !self.filter.accepts(level) {
            self.metrics.record_filtered();
            return;
        }

        let entry = LogEntry::new(level, site, message.into(), self.clock.as_ref());
        self.enqueue(entry);
    }

    /// Like [`log`](Self::log), but formats `args` only if the level is enabled.
    pub fn log_args(&self, level: LogLevel, site: &CallSite, args: fmt::Arguments<'_>) {
        if !self.filter.accepts(level) {
            self.metrics.record_filtered();
            return;
        }

        let entry = LogEntry::new(level, site, fmt::format(args), self.clock.as_ref());
        self.enqueue(entry);
    }

    #[inline]
    pub fn debug(&self, site: &CallSite, message: impl Into<String>) {
        self.log(LogLevel::Debug, site, message);
    }

    #[inline]
    pub fn info(&self, site: &CallSite, message: impl Into<String>) {
        self.log(LogLevel::Info, site, message);
    }

    #[inline]
    pub fn warning(&self, site: &CallSite, message: impl Into<String>) {
        self.log(LogLevel::Warning, site, message);
    }

    #[inline]
    pub fn error(&self, site: &CallSite, message: impl Into<String>) {
        self.log(LogLevel::Error, site, message);
    }

    /// Log an error with its type, message, cause chain and backtrace.
    ///
    /// The entry is framed by the `EXCEPTION` banners in the log file.
    pub fn exception<E>(&self, site: &CallSite, error: &E)
    where
        E: std::error::Error + ?Sized,
    {
        if !self.filter.accepts(LogLevel::Exception) {
            self.metrics.record_filtered();
            return;
        }

        let entry = LogEntry::new(
            LogLevel::Exception,
            site,
            describe_error(error),
            self.clock.as_ref(),
        );
        self.enqueue(entry);
    }

    fn enqueue(&self, entry: LogEntry) {
        let state = self.state.read();
        if state.accepts_entries() {
            self.queue.push(entry);
            self.metrics.record_enqueued();
        } else {
            self.metrics.record_rejected_after_stop();
        }
    }

    /// Spawn the writer thread.
    ///
    /// Calling `start` on a running logger does nothing. A stopped logger
    /// cannot be restarted.
    pub fn start(&self) -> Result<()> {
        let mut worker = self.worker.lock();
        let state = *self.state.read();
        match state {
            LifecycleState::Running => return Ok(()),
            LifecycleState::Stopping | LifecycleState::Stopped => {
                return Err(LoggerError::LoggerStopped)
            }
            LifecycleState::NotStarted => {}
        }

        let (stop_signal, stop) = bounded::<()>(0);
        let writer = WriterLoop::new(
            self.queue.clone(),
            stop,
            Arc::clone(&self.sink),
            Arc::clone(&self.metrics),
            self.on_failure.clone(),
        );

        let handle = thread::Builder::new()
            .name(WRITER_THREAD_NAME.to_string())
            .spawn(move || writer.run())
            .map_err(|e| {
                LoggerError::io_operation(
                    "spawning log writer thread",
                    self.log_path.display().to_string(),
                    e,
                )
            })?;

        worker.stop_signal = Some(stop_signal);
        worker.handle = Some(handle);
        *self.state.write() = LifecycleState::Running;

        tracing::debug!(path = %self.log_path.display(), "log writer started");
        Ok(())
    }

    /// Stop accepting entries and block until every queued entry is written.
    ///
    /// If the logger was never started, the queue is drained on the calling
    /// thread. Calling `stop` again returns immediately.
    pub fn stop(&self) -> Result<()> {
        let mut worker = self.worker.lock();
        let previous = {
            let mut state = self.state.write();
            let previous = *state;
            if previous.accepts_entries() {
                *state = LifecycleState::Stopping;
            }
            previous
        };

        let outcome = match previous {
            LifecycleState::Stopping | LifecycleState::Stopped => return Ok(()),
            LifecycleState::NotStarted => Ok(()),
            LifecycleState::Running => {
                // Closing the signal channel wakes the writer, which drains and exits.
                drop(worker.stop_signal.take());
                match worker.handle.take() {
                    Some(handle) => handle
                        .join()
                        .map_err(|payload| LoggerError::WorkerPanicked(panic_message(payload.as_ref()))),
                    None => Ok(()),
                }
            }
        };

        // Leftovers exist only if the writer never ran or died early.
        let leftovers = self.inline_writer().drain();
        *self.state.write() = LifecycleState::Stopped;

        tracing::debug!(
            path = %self.log_path.display(),
            leftovers,
            written = self.metrics.written_count(),
            "log writer stopped"
        );
        outcome
    }

    /// A writer for use on the current thread while no writer thread runs.
    fn inline_writer(&self) -> WriterLoop {
        let (_stop_signal, stop) = bounded::<()>(0);
        WriterLoop::new(
            self.queue.clone(),
            stop,
            Arc::clone(&self.sink),
            Arc::clone(&self.metrics),
            self.on_failure.clone(),
        )
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn min_level(&self) -> LogLevel {
        self.filter.min_level()
    }

    pub fn state(&self) -> LifecycleState {
        *self.state.read()
    }

    /// Number of entries waiting for the writer.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use rust_queue_logger::prelude::*;
    /// use rust_queue_logger::call_site;
    ///
    /// let logger = Logger::builder().sink(MemorySink::new()).build();
    /// logger.info(&call_site!(), "hello");
    /// logger.debug(&call_site!(), "filtered out");
    /// logger.stop().unwrap();
    ///
    /// let metrics = logger.metrics();
    /// assert_eq!(metrics.written_count(), 1);
    /// assert_eq!(metrics.filtered_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::warn!(error = %e, "log writer did not shut down cleanly");
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_queue_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .directory(std::env::temp_dir())
///     .app_name("builder-doc")
///     .on_failure(Arc::new(|err: &LoggerError| {
///         eprintln!("ALERT: log entry lost: {}", err);
///     }))
///     .build();
/// assert!(logger.log_path().ends_with("builder-doc.log"));
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    source_path: String,
    sink: Option<Box<dyn Sink>>,
    clock: SharedClock,
    on_failure: Option<FailureCallback>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            source_path: String::new(),
            sink: None,
            clock: Arc::new(SystemClock),
            on_failure: None,
        }
    }

    /// Replace every configuration value at once
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the minimum level by name
    ///
    /// Unrecognized names are ignored when the logger is built and the level
    /// stays at `INFO`.
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.level = level.to_str().to_string();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.config.directory = directory.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.config.app_name = Some(app_name.into());
        self
    }

    /// Source file of the code creating the logger
    ///
    /// Its stem names the log file when no application name is set.
    /// [`logger_builder!`](crate::logger_builder) fills this with `file!()`.
    #[must_use = "builder methods return a new value"]
    pub fn source_path(mut self, source_path: impl Into<String>) -> Self {
        self.source_path = source_path.into();
        self
    }

    /// Write to `sink` instead of the log file
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Set a callback invoked for every entry lost to a failed write
    #[must_use = "builder methods return a new value"]
    pub fn on_failure(mut self, callback: FailureCallback) -> Self {
        self.on_failure = Some(callback);
        self
    }

    /// Build the Logger
    ///
    /// Invalid settings and a log directory that cannot be created are
    /// reported through `tracing` and otherwise ignored; writes will then
    /// fail and be counted.
    pub fn build(self) -> Logger {
        if let Err(e) = self.prepare() {
            tracing::warn!(error = %e, "log destination unavailable");
        }
        self.assemble()
    }

    /// Build the Logger, failing on invalid settings or if the log directory
    /// cannot be created
    pub fn try_build(self) -> Result<Logger> {
        self.prepare()?;
        Ok(self.assemble())
    }

    fn prepare(&self) -> Result<()> {
        self.config.validate()?;
        ensure_directory(&self.config.directory)
    }

    fn assemble(self) -> Logger {
        let filter = self.config.severity_filter();
        let log_path = self.config.log_path(&self.source_path);
        let sink: Box<dyn Sink> = match self.sink {
            Some(sink) => sink,
            None => Box::new(FileSink::new(log_path.clone())),
        };

        Logger {
            filter,
            log_path,
            queue: EntryQueue::new(),
            state: RwLock::new(LifecycleState::NotStarted),
            worker: Mutex::new(WorkerSlot::default()),
            sink: Arc::new(Mutex::new(sink)),
            clock: self.clock,
            metrics: Arc::new(LoggerMetrics::new()),
            on_failure: self.on_failure,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_directory(directory: &Path) -> Result<()> {
    fs::create_dir_all(directory).map_err(|e| {
        LoggerError::io_operation("creating log directory", directory.display().to_string(), e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call_site;
    use crate::core::timestamp::FixedClock;
    use crate::sinks::MemorySink;
    use chrono::{Local, TimeZone};
    use std::sync::atomic::{AtomicU64, Ordering};

    fn memory_logger(level: &str) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder().level(level).sink(sink.clone()).build();
        (logger, sink)
    }

    struct BrokenSink;

    impl Sink for BrokenSink {
        fn append(&mut self, _text: &str) -> Result<()> {
            Err(LoggerError::sink("broken", "read-only file system"))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().sink(MemorySink::new()).build();
        assert_eq!(logger.min_level(), LogLevel::Info);
        assert_eq!(logger.state(), LifecycleState::NotStarted);
        assert!(logger.log_path().ends_with("application.log"));
    }

    #[test]
    fn test_builder_derives_name_from_source() {
        let logger = Logger::builder()
            .source_path("src/bin/ingest.rs")
            .sink(MemorySink::new())
            .build();
        assert!(logger.log_path().ends_with("ingest.log"));
    }

    #[test]
    fn test_filtered_calls_are_not_queued() {
        let (logger, _sink) = memory_logger("ERROR");
        let site = call_site!();
        logger.debug(&site, "d");
        logger.info(&site, "i");
        logger.warning(&site, "w");
        assert_eq!(logger.pending(), 0);
        assert_eq!(logger.metrics().filtered_count(), 3);

        logger.error(&site, "e");
        assert_eq!(logger.pending(), 1);
    }

    #[test]
    fn test_entries_wait_for_start() {
        let (logger, sink) = memory_logger("DEBUG");
        logger.info(&call_site!(), "early");
        assert_eq!(logger.pending(), 1);
        assert!(sink.contents().is_empty());

        logger.start().unwrap();
        logger.stop().unwrap();
        assert!(sink.contents().ends_with("[INFO] : early"));
        assert_eq!(logger.pending(), 0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let (logger, _sink) = memory_logger("INFO");
        logger.start().unwrap();
        logger.start().unwrap();
        assert_eq!(logger.state(), LifecycleState::Running);
        logger.stop().unwrap();
        assert_eq!(logger.state(), LifecycleState::Stopped);
    }

    #[test]
    fn test_restart_after_stop_fails() {
        let (logger, _sink) = memory_logger("INFO");
        logger.start().unwrap();
        logger.stop().unwrap();
        assert!(matches!(logger.start(), Err(LoggerError::LoggerStopped)));
        logger.stop().unwrap();
    }

    #[test]
    fn test_stop_without_start_drains_inline() {
        let (logger, sink) = memory_logger("INFO");
        let site = call_site!();
        logger.info(&site, "one");
        logger.info(&site, "two");
        logger.stop().unwrap();

        let contents = sink.contents();
        assert!(contents.contains("[INFO] : one"));
        assert!(contents.ends_with("[INFO] : two"));
        assert_eq!(logger.metrics().written_count(), 2);
    }

    #[test]
    fn test_calls_after_stop_are_rejected() {
        let (logger, sink) = memory_logger("INFO");
        logger.start().unwrap();
        logger.stop().unwrap();

        let before = sink.contents();
        logger.error(&call_site!(), "too late");
        assert_eq!(logger.pending(), 0);
        assert_eq!(sink.contents(), before);
        assert_eq!(logger.metrics().rejected_after_stop_count(), 1);
    }

    #[test]
    fn test_exception_logged_at_highest_minimum() {
        let (logger, sink) = memory_logger("EXCEPTION");
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        logger.error(&call_site!(), "ignored");
        logger.exception(&call_site!(), &err);
        logger.stop().unwrap();

        let contents = sink.contents();
        assert!(!contents.contains("ignored"));
        assert!(contents.contains("[EXCEPTION] : \n"));
        assert!(contents.contains("disk on fire"));
    }

    #[test]
    fn test_unknown_level_names_keep_info() {
        for level in ["OFF", "WARN", " warning "] {
            let (logger, sink) = memory_logger(level);
            assert_eq!(logger.min_level(), LogLevel::Info, "{:?}", level);

            let site = call_site!();
            logger.debug(&site, "d");
            logger.info(&site, "i");
            logger.error(&site, "e");
            logger.stop().unwrap();

            let contents = sink.contents();
            assert!(!contents.contains("[DEBUG] : d"));
            assert!(contents.contains("[INFO] : i"), "{:?} dropped INFO", level);
            assert!(contents.ends_with("[ERROR] : e"));
        }
    }

    #[test]
    fn test_entry_uses_injected_clock() {
        let sink = MemorySink::new();
        let clock = FixedClock::new(
            Local
                .with_ymd_and_hms(2025, 1, 8, 15, 4, 5)
                .single()
                .expect("valid datetime"),
        );
        let logger = Logger::builder().clock(clock).sink(sink.clone()).build();
        logger.info(&CallSite::new("orders", "submit"), "accepted");
        logger.stop().unwrap();

        assert_eq!(
            sink.contents(),
            "\n[08-01-2025 03:04:05:000 PM] [orders] [submit] [INFO] : accepted"
        );
    }

    #[test]
    fn test_failure_callback_invoked() {
        let failures = Arc::new(AtomicU64::new(0));
        let failures_clone = Arc::clone(&failures);
        let logger = Logger::builder()
            .sink(BrokenSink)
            .on_failure(Arc::new(move |_err: &LoggerError| {
                failures_clone.fetch_add(1, Ordering::Relaxed);
            }))
            .build();

        logger.start().unwrap();
        for i in 0..5 {
            logger.info(&call_site!(), format!("lost {}", i));
        }
        logger.stop().unwrap();

        assert_eq!(failures.load(Ordering::Relaxed), 5);
        assert_eq!(logger.metrics().write_failure_count(), 5);
        assert_eq!(logger.metrics().written_count(), 0);
    }

    #[test]
    fn test_drop_drains_running_logger() {
        let sink = MemorySink::new();
        {
            let logger = Logger::builder().sink(sink.clone()).build();
            logger.start().unwrap();
            logger.warning(&call_site!(), "flushed on drop");
        }
        assert!(sink.contents().contains("[WARNING] : flushed on drop"));
    }

    #[test]
    fn test_try_build_reports_directory_failure() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = Logger::builder().directory(blocker.join("logs")).try_build();
        assert!(matches!(result, Err(LoggerError::IoOperation { .. })));

        // build() swallows the same failure
        let logger = Logger::builder().directory(blocker.join("logs")).build();
        assert_eq!(logger.state(), LifecycleState::NotStarted);
    }

    #[test]
    fn test_try_build_rejects_invalid_config() {
        let result = Logger::builder()
            .directory(std::env::temp_dir())
            .app_name("../escape")
            .sink(MemorySink::new())
            .try_build();
        assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
    }
}

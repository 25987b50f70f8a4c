//! Background writer loop
//!
//! A single thread owns the consumer side of the [`EntryQueue`]. It blocks on
//! a `select!` over the queue and a stop channel; once the stop channel is
//! closed it drains whatever is left, in order, and returns.
//!
//! Sink failures never escape the loop. Each failed entry is counted, handed
//! to the optional failure callback, and skipped.

use super::error::{panic_message, LoggerError};
use super::format::render_entry;
use super::log_entry::LogEntry;
use super::metrics::{FailureCallback, LoggerMetrics};
use super::queue::EntryQueue;
use super::sink::Sink;
use crossbeam_channel::{select, Receiver};
use parking_lot::Mutex;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Sink slot shared between the logger and its writer.
pub(crate) type SharedSink = Arc<Mutex<Box<dyn Sink>>>;

/// Emit a diagnostic for the first failure and every 1000th after it.
const FAILURE_REPORT_INTERVAL: u64 = 1000;

pub(crate) struct WriterLoop {
    queue: EntryQueue,
    stop: Receiver<()>,
    sink: SharedSink,
    metrics: Arc<LoggerMetrics>,
    on_failure: Option<FailureCallback>,
}

impl WriterLoop {
    pub(crate) fn new(
        queue: EntryQueue,
        stop: Receiver<()>,
        sink: SharedSink,
        metrics: Arc<LoggerMetrics>,
        on_failure: Option<FailureCallback>,
    ) -> Self {
        Self {
            queue,
            stop,
            sink,
            metrics,
            on_failure,
        }
    }

    /// Write entries as they arrive until the stop channel closes, then drain.
    pub(crate) fn run(self) {
        let entries = self.queue.receiver().clone();
        let stop = self.stop.clone();

        loop {
            select! {
                recv(entries) -> entry => match entry {
                    Ok(entry) => self.write(entry),
                    Err(_) => break,
                },
                recv(stop) -> _ => {
                    let drained = self.drain();
                    tracing::debug!(drained, "log writer drained queue");
                    break;
                }
            }
        }
    }

    /// Write every queued entry, returning how many were taken.
    pub(crate) fn drain(&self) -> usize {
        let mut taken = 0;
        while let Some(entry) = self.queue.try_take() {
            self.write(entry);
            taken += 1;
        }
        taken
    }

    fn write(&self, entry: LogEntry) {
        let text = render_entry(&entry);
        let mut sink = self.sink.lock();

        let failure = match catch_unwind(AssertUnwindSafe(|| sink.append(&text))) {
            Ok(Ok(())) => {
                self.metrics.record_written();
                return;
            }
            Ok(Err(e)) => e,
            Err(payload) => LoggerError::sink_panicked(sink.name(), panic_message(payload.as_ref())),
        };
        let sink_name = sink.name().to_string();
        drop(sink);

        self.report_failure(&sink_name, &failure);
    }

    fn report_failure(&self, sink_name: &str, failure: &LoggerError) {
        let previous = self.metrics.record_write_failure();
        if previous % FAILURE_REPORT_INTERVAL == 0 {
            tracing::warn!(
                sink = sink_name,
                failures = previous + 1,
                error = %failure,
                "log entry dropped after failed write"
            );
        }

        if let Some(ref callback) = self.on_failure {
            if let Err(payload) = catch_unwind(AssertUnwindSafe(|| callback(failure))) {
                tracing::warn!(
                    panic = %panic_message(payload.as_ref()),
                    "log failure callback panicked"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::call_site::CallSite;
    use crate::core::error::Result;
    use crate::core::log_level::LogLevel;
    use crate::sinks::MemorySink;
    use crossbeam_channel::bounded;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    struct FlakySink {
        calls: usize,
    }

    impl Sink for FlakySink {
        fn append(&mut self, _text: &str) -> Result<()> {
            self.calls += 1;
            match self.calls {
                1 => Err(LoggerError::sink("flaky", "disk full")),
                2 => panic!("sink exploded"),
                _ => Ok(()),
            }
        }

        fn name(&self) -> &str {
            "flaky"
        }
    }

    fn entry(message: &str) -> LogEntry {
        LogEntry::with_timestamp(
            "t".to_string(),
            LogLevel::Info,
            &CallSite::new("writer", "test"),
            message.to_string(),
        )
    }

    fn shared(sink: impl Sink + 'static) -> SharedSink {
        let boxed: Box<dyn Sink> = Box::new(sink);
        Arc::new(Mutex::new(boxed))
    }

    #[test]
    fn test_drain_writes_in_order() {
        let queue = EntryQueue::new();
        let memory = MemorySink::new();
        let (_stop_tx, stop_rx) = bounded::<()>(0);
        let metrics = Arc::new(LoggerMetrics::new());
        let writer = WriterLoop::new(
            queue.clone(),
            stop_rx,
            shared(memory.clone()),
            Arc::clone(&metrics),
            None,
        );

        queue.push(entry("a"));
        queue.push(entry("b"));
        assert_eq!(writer.drain(), 2);

        assert_eq!(
            memory.contents(),
            "\n[t] [writer] [test] [INFO] : a\n[t] [writer] [test] [INFO] : b"
        );
        assert_eq!(metrics.written_count(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_failures_are_swallowed_and_reported() {
        let queue = EntryQueue::new();
        let (_stop_tx, stop_rx) = bounded::<()>(0);
        let metrics = Arc::new(LoggerMetrics::new());
        let reported = Arc::new(AtomicUsize::new(0));
        let reported_clone = Arc::clone(&reported);
        let writer = WriterLoop::new(
            queue.clone(),
            stop_rx,
            shared(FlakySink { calls: 0 }),
            Arc::clone(&metrics),
            Some(Arc::new(move |_err: &LoggerError| {
                reported_clone.fetch_add(1, Ordering::Relaxed);
            })),
        );

        for message in ["one", "two", "three"] {
            queue.push(entry(message));
        }
        assert_eq!(writer.drain(), 3);

        assert_eq!(metrics.write_failure_count(), 2);
        assert_eq!(metrics.written_count(), 1);
        assert_eq!(reported.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_run_exits_after_stop_and_drains() {
        let queue = EntryQueue::new();
        let memory = MemorySink::new();
        let (stop_tx, stop_rx) = bounded::<()>(0);
        let metrics = Arc::new(LoggerMetrics::new());
        let writer = WriterLoop::new(
            queue.clone(),
            stop_rx,
            shared(memory.clone()),
            Arc::clone(&metrics),
            None,
        );

        for i in 0..100 {
            queue.push(entry(&i.to_string()));
        }
        let handle = thread::spawn(move || writer.run());
        drop(stop_tx);
        handle.join().unwrap();

        assert!(queue.is_empty());
        assert_eq!(metrics.written_count(), 100);
        let contents = memory.contents();
        let messages: Vec<&str> = contents
            .lines()
            .filter(|line| !line.is_empty())
            .filter_map(|line| line.rsplit(" : ").next())
            .collect();
        let expected: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        assert_eq!(messages, expected);
    }
}

//! # Rust Queue Logger
//!
//! An in-process asynchronous file logger. Logging calls only filter, stamp
//! and enqueue an entry; a single background writer appends entries to one
//! log file in the order they were queued.
//!
//! ## Features
//!
//! - **Non-blocking producers**: leveled calls never wait on I/O
//! - **Lossless shutdown**: `stop` drains every queued entry before returning
//! - **Best-effort delivery**: write failures are counted, never propagated
//! - **Caller identity**: `call_site!` records source file and function
//!
//! ## Example
//!
//! ```no_run
//! use rust_queue_logger::prelude::*;
//! use rust_queue_logger::{info, exception, logger_builder};
//!
//! let logger = logger_builder!()
//!     .level("DEBUG")
//!     .directory("/var/log/orders")
//!     .app_name("orders")
//!     .build();
//! logger.start()?;
//!
//! info!(logger, "accepted order {}", 42);
//! let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "payment gateway");
//! exception!(logger, &err);
//!
//! logger.stop()?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, Clock, FailureCallback, FixedClock, LifecycleState, LogEntry,
        LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, Sink,
        SystemClock,
    };
    pub use crate::sinks::{FileSink, MemorySink};
}

pub use crate::core::{
    CallSite, Clock, FailureCallback, FixedClock, LifecycleState, LogEntry,
    LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, Sink,
    SystemClock,
};
pub use crate::sinks::{FileSink, MemorySink};

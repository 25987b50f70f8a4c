//! Core logger types and traits

pub mod call_site;
pub mod config;
pub mod error;
pub mod exception;
pub mod filter;
pub mod format;
pub mod lifecycle;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod queue;
pub mod sink;
pub mod timestamp;
mod writer;

pub use call_site::CallSite;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use filter::SeverityFilter;
pub use lifecycle::LifecycleState;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::{FailureCallback, LoggerMetrics};
pub use queue::EntryQueue;
pub use sink::Sink;
pub use timestamp::{Clock, FixedClock, SystemClock};

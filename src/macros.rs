//! Logging macros for ergonomic log message formatting.
//!
//! The leveled macros capture the call site automatically and only format
//! their arguments when the level is enabled.
//!
//! # Examples
//!
//! ```
//! use rust_queue_logger::prelude::*;
//! use rust_queue_logger::{info, warning};
//!
//! let logger = Logger::builder().sink(MemorySink::new()).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! warning!(logger, "Port {} is already taken, retrying", port);
//! ```

/// Capture the current source file stem and enclosing function name.
///
/// # Examples
///
/// ```
/// fn handle_request() -> rust_queue_logger::CallSite {
///     rust_queue_logger::call_site!()
/// }
///
/// assert_eq!(handle_request().caller_name(), "handle_request");
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::from_raw(file!(), {
            fn __here() {}
            fn __type_name_of<T>(_: T) -> &'static str {
                ::std::any::type_name::<T>()
            }
            __type_name_of(__here)
        })
    };
}

/// Start a [`LoggerBuilder`](crate::LoggerBuilder) that knows the calling source file.
///
/// Without an application name, the log file is named after that file.
///
/// # Examples
///
/// ```
/// use rust_queue_logger::logger_builder;
///
/// let logger = logger_builder!().directory(std::env::temp_dir()).build();
/// assert!(logger.log_path().file_name().is_some());
/// ```
#[macro_export]
macro_rules! logger_builder {
    () => {
        $crate::Logger::builder().source_path(file!())
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_queue_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_queue_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_args($level, &$crate::call_site!(), format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_queue_logger::prelude::*;
/// # let logger = Logger::builder().min_level(LogLevel::Debug).sink(MemorySink::new()).build();
/// use rust_queue_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_queue_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_queue_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_queue_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_queue_logger::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_queue_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_queue_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log an error value with the `EXCEPTION` banner.
///
/// # Examples
///
/// ```
/// # use rust_queue_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_queue_logger::exception;
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
/// exception!(logger, &err);
/// ```
#[macro_export]
macro_rules! exception {
    ($logger:expr, $error:expr) => {
        $logger.exception(&$crate::call_site!(), $error)
    };
}

//! Basic logger usage example
//!
//! Demonstrates the leveled macros, the minimum level and the log file layout.
//!
//! Run with: cargo run --example basic_usage

use rust_queue_logger::prelude::*;
use rust_queue_logger::{debug, error, info, logger_builder, warning};
use std::fs;

fn main() -> Result<()> {
    println!("=== Rust Queue Logger - Basic Usage Example ===\n");

    let directory = std::env::temp_dir().join("rust-queue-logger-demo");

    // No app name: the log file is named after this source file.
    let logger = logger_builder!()
        .level("DEBUG")
        .directory(&directory)
        .try_build()?;
    logger.start()?;

    println!("1. Logging at every level to {}", logger.log_path().display());
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warning!(logger, "This is a warning message");
    error!(logger, "This is an error message");
    logger.stop()?;

    println!("\n2. A second logger with minimum level WARNING:");
    let quiet = logger_builder!()
        .level("WARNING")
        .directory(&directory)
        .app_name("basic_usage_quiet")
        .try_build()?;
    quiet.start()?;
    debug!(quiet, "Debug message (hidden)");
    info!(quiet, "Info message (hidden)");
    warning!(quiet, "Warning message (visible)");
    error!(quiet, "Error message (visible)");
    quiet.stop()?;

    for path in [logger.log_path(), quiet.log_path()] {
        println!("\n--- {} ---", path.display());
        print!("{}", fs::read_to_string(path)?);
        println!();
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}

//! File logging example
//!
//! Demonstrates loading the logger configuration from JSON and logging an
//! error chain with the EXCEPTION banner.
//!
//! Run with: cargo run --example file_logging

use rust_queue_logger::prelude::*;
use rust_queue_logger::{exception, info, warning};
use std::error::Error;
use std::fmt;
use std::fs;

#[derive(Debug)]
struct PluginError {
    plugin: &'static str,
    source: std::io::Error,
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load plugin '{}'", self.plugin)
    }
}

impl Error for PluginError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

fn main() -> Result<()> {
    println!("=== Rust Queue Logger - File Logging Example ===\n");

    let directory = std::env::temp_dir().join("rust-queue-logger-demo");
    let config = LoggerConfig::from_json(&format!(
        r#"{{ "level": "info", "directory": {}, "app_name": "file_logging" }}"#,
        serde_json::to_string(&directory)?
    ))?;
    println!("1. Loaded configuration: {:?}", config);

    let logger = Logger::builder().config(config).try_build()?;
    logger.start()?;

    info!(logger, "Application started");
    info!(logger, "Configuration loaded successfully");
    warning!(logger, "Using default settings for some options");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        info!(logger, "Processing item {}/5", i);
        if i == 3 {
            warning!(logger, "Item 3 took longer than expected");
        }
    }

    let err = PluginError {
        plugin: "thumbnails",
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "libthumbs.so"),
    };
    exception!(logger, &err);

    // Blocks until everything above is in the file.
    logger.stop()?;

    println!("\n=== Example completed successfully! ===");
    println!("--- {} ---", logger.log_path().display());
    print!("{}", fs::read_to_string(logger.log_path())?);

    Ok(())
}

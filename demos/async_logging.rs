//! Async logging example
//!
//! Demonstrates many producer threads sharing one logger and the metrics
//! reported after a draining stop.
//!
//! Run with: cargo run --example async_logging

use rust_queue_logger::prelude::*;
use rust_queue_logger::info;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    println!("=== Rust Queue Logger - Async Logging Example ===\n");

    let lost = Arc::new(AtomicU64::new(0));
    let lost_clone = Arc::clone(&lost);

    let logger = Arc::new(
        Logger::builder()
            .directory(std::env::temp_dir().join("rust-queue-logger-demo"))
            .app_name("async_logging")
            .on_failure(Arc::new(move |err: &LoggerError| {
                lost_clone.fetch_add(1, Ordering::Relaxed);
                eprintln!("ALERT: log entry lost: {}", err);
            }))
            .try_build()?,
    );
    logger.start()?;

    println!("1. Producers never wait on the file:");
    let started = Instant::now();
    for i in 0..10_000 {
        info!(logger, "Message #{}", i);
    }
    println!("   Queued 10000 entries in {:?}", started.elapsed());

    println!("\n2. Multi-threaded logging:");
    let handles: Vec<_> = (0..5)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..20 {
                    info!(logger, "Thread {} - Message {}", thread_id, i);
                    thread::sleep(Duration::from_millis(10));
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("producer thread panicked");
        }
    }
    println!("   5 threads logged 20 messages each");

    println!("\n3. Draining on stop:");
    println!("   pending before stop: {}", logger.pending());
    logger.stop()?;

    let metrics = logger.metrics();
    println!("   enqueued: {}", metrics.enqueued_count());
    println!("   written:  {}", metrics.written_count());
    println!("   failed:   {}", lost.load(Ordering::Relaxed));

    println!("\n=== Example completed successfully! ===");
    println!("Check '{}' for file output", logger.log_path().display());

    Ok(())
}

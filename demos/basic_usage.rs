//! Basic logger usage example
//!
//! Demonstrates tagged, leveled logging on the console, label
//! customization, timers, and delivery to a native bridge.
//!
//! Run with: cargo run --example basic_usage

use std::sync::Arc;
use std::time::Duration;
use tagged_logger::prelude::*;
use tagged_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Tagged Logger - Basic Usage Example ===\n");

    // A logger on a browser-like platform prints to the console
    let mut logger = Logger::builder("Demo")
        .platform(StaticPlatform::web())
        .build();

    println!("1. Logging at different levels (threshold: {}):", logger.level_name());
    logger.error("This is an error message");
    logger.warn("This is a warning message");
    logger.info("This is an info message");
    logger.debug("This debug message is hidden");

    println!("\n2. Raising the threshold by name:");
    logger.set_level("debug");
    logger.debug("Now debug messages show");
    info!(logger, "Formatted: {} + {} = {}", 2, 2, 4);

    println!("\n3. Custom labels:");
    logger.set_labels([("warn", "WARN"), ("error", "ERR")]);
    logger.warn("ASCII labels follow the tag");
    logger.error("so do these");
    logger.info("emoji labels lead");

    println!("\n4. One-off tags:");
    logger.log_with_tag_at_level("info", "Network", "connected");
    warn!(logger, "{} retries left", 2);

    println!("\n5. Structured values:");
    logger.dir(&serde_json::json!({"user": "ann", "roles": ["admin"]}));
    logger.table(
        &serde_json::json!([{"name": "ann", "age": 31}, {"name": "bo", "age": 4}]),
        None,
    );

    println!("\n6. Timers:");
    logger.time(Some("work"));
    std::thread::sleep(Duration::from_millis(20));
    logger.time_log(Some("work"));
    logger.time_end(Some("work"));
    logger.time_end(Some("work"));

    println!("\n7. Native bridge delivery:");
    let bridge = Arc::new(MemoryBridge::new());
    let mut native = Logger::builder("Native")
        .platform(StaticPlatform::ios())
        .bridge(bridge.clone())
        .use_syslog(false)
        .build();
    native.set_use_syslog(true);
    native.info("delivered on a background thread");
    native.flush(Duration::from_secs(1));
    for record in bridge.records() {
        println!("   record: {}", serde_json::to_string(&record)?);
    }
    println!("   syslog calls: {:?}", bridge.syslog_calls());

    println!("\n=== Example completed successfully ===");
    Ok(())
}

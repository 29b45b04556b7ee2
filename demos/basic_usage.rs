//! Basic usage example
//!
//! Demonstrates levels, prefixes, fields and the global logger.
//!
//! Run with: cargo run --example basic_usage

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{fields, global, info, warning};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Basic Usage Example ===\n");

    println!("1. Default logger (info and above):");
    let logger = Logger::new();
    logger.debug("This debug message is filtered");
    logger.info("Application started");
    logger.warning("Low disk space");
    logger.error("Request failed");

    println!("\n2. Lowering the level:");
    let verbose = logger.with_level("debug");
    verbose.debug("Now debug messages are visible");
    verbose.set_level("warning")?;
    verbose.info("And now info is filtered again");

    println!("\n3. Prefixes and fields:");
    let api = logger.with_prefix("api").with_prefix("v1");
    let request = api.with_fields(fields! { "method" => "GET", "status" => 200 });
    request.info("Request served");
    info!(request, "Took {} ms", 12);

    println!("\n4. Custom time format:");
    let short = logger.with_time_format("%H:%M:%S");
    warning!(short, "Retrying in {} seconds", 5);

    println!("\n5. Global logger:");
    global::set_global_logger(Some(Arc::new(logger.with_prefix("global"))));
    global::info("Logged through the global slot");
    global::with_fields(fields! { "worker" => 1 }).info("Worker ready");

    println!("\nHistory of the root logger:");
    for line in logger.messages() {
        println!("  {}", line);
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}

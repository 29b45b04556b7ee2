//! File logging example
//!
//! Demonstrates a main log file and a separate error file configured from JSON.
//!
//! Run with: cargo run --example file_logging

use rust_leveled_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - File Logging Example ===\n");

    let config = Config::from_json(
        r#"{
            "level": "debug",
            "files": { "main": "logs/application.log", "error": "logs/error.log" }
        }"#,
    )?;
    config.validate()?;

    let logger = Logger::from_config(&config);

    println!("1. Logging to console and files:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warning("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");
    let worker = logger.with_prefix("worker");
    for i in 1..=5 {
        worker.infof(format_args!("Processing item {}/5", i));
        if i == 3 {
            worker.warning("Item 3 took longer than expected");
        }
    }

    println!("\n3. Writing a separate audit file:");
    let audit = logger.with_file("logs/audit.log");
    audit.info("Audit trail opened");

    logger.sync()?;
    audit.close()?;
    logger.close()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'logs/application.log' and 'logs/error.log' for the output");

    Ok(())
}

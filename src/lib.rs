//! # Rust Leveled Logger
//!
//! A leveled logging library producing one human-readable line per event.
//!
//! ## Features
//!
//! - **Levels**: DEBUG < INFO < WARNING < ERROR < FATAL, filtered per logger
//! - **Derived loggers**: `with_prefix`, `with_fields`, `with_file`, `with_level`, ...
//!   return new loggers and never modify the original
//! - **Dual sinks**: stdout plus an optional file, and an error-only file for ERROR/FATAL
//! - **Global logger**: free functions in [`global`] delegating to a process-wide instance
//! - **Test double**: [`MockLogger`] records lines in memory with a replaceable exit handler
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//!
//! let logger = Logger::new().with_prefix("app");
//! logger.info("started");
//! assert!(logger.messages()[0].ends_with("[INFO] [app] started"));
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod mock;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::core::{
        Config, ExitHook, FieldValue, Fields, LogLevel, Logger, LoggerError, Logging, Result,
        SharedLogger, TimestampFormat,
    };
    pub use crate::mock::MockLogger;
}

pub use core::{
    Config, ExitHook, FieldValue, Fields, LogLevel, Logger, LoggerError, Logging, Result,
    SharedLogger, TimestampFormat, DEFAULT_TIME_FORMAT, ERROR_FILE_KEY, MAIN_FILE_KEY,
};
pub use global::{global_logger, set_global_logger};
pub use mock::MockLogger;

//! Core logger types and traits

pub mod api;
pub mod config;
pub mod error;
pub mod fields;
pub mod format;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod timestamp;

pub use api::{ExitHook, Logging, SharedLogger};
pub use config::{Config, ERROR_FILE_KEY, MAIN_FILE_KEY};
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use format::format_line;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use timestamp::{TimestampFormat, DEFAULT_TIME_FORMAT};

//! Process-wide logger
//!
//! One optional [`SharedLogger`] lives in a global slot guarded by its own
//! lock. While the slot is empty, [`global_logger`] hands out a brand-new
//! default [`Logger`] on every call without storing it.
//!
//! The free functions below resolve the global logger again on each call, so
//! a swap through [`set_global_logger`] is seen by the next call but not by
//! one already in progress.
//!
//! # Example
//!
//! ```
//! use rust_leveled_logger::{global, MockLogger};
//! use std::sync::Arc;
//!
//! let mock = MockLogger::new();
//! global::set_global_logger(Some(Arc::new(mock.clone())));
//! global::info("ready");
//! global::set_global_logger(None);
//!
//! assert_eq!(mock.messages(), vec!["[INFO] ready".to_string()]);
//! ```

use crate::core::{Fields, Logger, SharedLogger};
use parking_lot::{const_rwlock, RwLock};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

static GLOBAL_LOGGER: RwLock<Option<SharedLogger>> = const_rwlock(None);

/// Install `logger` as the global logger; `None` empties the slot
pub fn set_global_logger(logger: Option<SharedLogger>) {
    *GLOBAL_LOGGER.write() = logger;
}

/// The installed global logger, or a fresh default [`Logger`] when none is set
pub fn global_logger() -> SharedLogger {
    match GLOBAL_LOGGER.read().as_ref() {
        Some(logger) => Arc::clone(logger),
        None => Arc::new(Logger::new()),
    }
}

/// Whether a global logger is installed
pub fn has_global_logger() -> bool {
    GLOBAL_LOGGER.read().is_some()
}

pub fn debug(message: &str) {
    global_logger().debug(message);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    global_logger().debugf(args);
}

pub fn info(message: &str) {
    global_logger().info(message);
}

pub fn infof(args: fmt::Arguments<'_>) {
    global_logger().infof(args);
}

pub fn warning(message: &str) {
    global_logger().warning(message);
}

pub fn warningf(args: fmt::Arguments<'_>) {
    global_logger().warningf(args);
}

pub fn error(message: &str) {
    global_logger().error(message);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    global_logger().errorf(args);
}

/// Log at FATAL through the global logger and terminate via its exit hook
pub fn fatal(message: &str) {
    global_logger().fatal(message);
}

pub fn fatalf(args: fmt::Arguments<'_>) {
    global_logger().fatalf(args);
}

pub fn with_prefix(prefix: &str) -> SharedLogger {
    global_logger().with_prefix(prefix)
}

pub fn with_fields(fields: Fields) -> SharedLogger {
    global_logger().with_fields(fields)
}

pub fn with_file(path: impl AsRef<Path>) -> SharedLogger {
    global_logger().with_file(path.as_ref())
}

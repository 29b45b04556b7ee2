//! File-backed logger implementation
//!
//! A [`Logger`] is a cheap handle to one logging node. Derivation methods
//! (`with_prefix`, `with_fields`, ...) build a new node that:
//!
//! - shares the write-ordering lock and the file handle cells with its parent,
//! - copies the field map and a snapshot of the parent's history.
//!
//! `with_file` is the exception: the derived node owns a fresh primary file
//! handle and its own write-ordering lock.

use super::{
    api::{ExitHook, Logging, SharedLogger},
    config::Config,
    error::{LoggerError, Result},
    fields::{merge_fields, FieldValue, Fields},
    format::format_line,
    log_level::LogLevel,
    sink::{open_log_file, report_warning, report_write_error, write_stdout, FileCell},
    timestamp::TimestampFormat,
};
use parking_lot::RwLock;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Leveled logger writing to stdout and optional file sinks
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let logger = Logger::new().with_level("debug").with_prefix("api");
/// let request = logger.with_fields([("request_id", "abc-123")]);
///
/// request.info("handled");
/// assert_eq!(request.messages().len(), 1);
/// assert!(request.messages()[0].contains("[INFO] [api] handled [request_id=abc-123]"));
/// ```
#[derive(Clone)]
pub struct Logger {
    node: Arc<LoggerNode>,
}

struct LoggerNode {
    min_level: RwLock<LogLevel>,
    prefix: String,
    fields: Fields,
    time_format: TimestampFormat,
    history: RwLock<Vec<String>>,
    /// Held for writing across the whole emit path; shared by the derivation tree
    write_order: Arc<RwLock<()>>,
    main_file: FileCell,
    error_file: FileCell,
    exit_hook: ExitHook,
}

impl LoggerNode {
    fn detached(min_level: LogLevel) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            prefix: String::new(),
            fields: Fields::new(),
            time_format: TimestampFormat::default(),
            history: RwLock::new(Vec::new()),
            write_order: Arc::new(RwLock::new(())),
            main_file: FileCell::empty(),
            error_file: FileCell::empty(),
            exit_hook: Arc::new(|code| std::process::exit(code)),
        }
    }
}

impl Logger {
    /// Create a logger from the default configuration (`info`, console only)
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create a logger from `config`
    ///
    /// Never fails: an unknown level falls back to `info`, and a file sink that
    /// cannot be established is reported once through this logger's error path
    /// while logging continues on the console.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        // Sink diagnostics are emitted before the configured level takes effect
        let logger = Self::from_node(LoggerNode::detached(LogLevel::Debug));

        let main_path = config.main_file().map(Path::new);
        if let Some(path) = main_path {
            logger.attach(&logger.node.main_file, path, "main");
        }
        // An error sink naming the main file would receive every error line twice
        if let Some(path) = config.error_file().map(Path::new) {
            if main_path == Some(path) {
                report_warning(&format!(
                    "error log file {} is the main log file; not opened twice",
                    path.display()
                ));
            } else {
                logger.attach(&logger.node.error_file, path, "error");
            }
        }

        logger.apply_level_or_info(&config.level);
        logger
    }

    fn from_node(node: LoggerNode) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    fn attach(&self, cell: &FileCell, path: &Path, sink: &str) {
        match open_log_file(path) {
            Ok(file) => cell.install(file),
            Err(e) => self.log(
                LogLevel::Error,
                &format!("{} log file not established, logging to console only: {}", sink, e),
            ),
        }
    }

    /// New node inheriting everything from this one
    fn derive(&self) -> LoggerNode {
        let node = &self.node;
        LoggerNode {
            min_level: RwLock::new(*node.min_level.read()),
            prefix: node.prefix.clone(),
            fields: node.fields.clone(),
            time_format: node.time_format.clone(),
            history: RwLock::new(node.history.read().clone()),
            write_order: Arc::clone(&node.write_order),
            main_file: node.main_file.clone(),
            error_file: node.error_file.clone(),
            exit_hook: Arc::clone(&node.exit_hook),
        }
    }

    fn apply_level_or_info(&self, level: &str) {
        if let Err(e) = self.set_level(level) {
            *self.node.min_level.write() = LogLevel::Info;
            report_warning(&format!("{}; falling back to info", e));
        }
    }

    /// Set the minimum level by name (case-insensitive)
    ///
    /// On an unknown name the current level is kept and
    /// [`LoggerError::InvalidLevel`] is returned.
    pub fn set_level(&self, level: &str) -> Result<()> {
        let parsed: LogLevel = level.parse()?;
        *self.node.min_level.write() = parsed;
        Ok(())
    }

    pub fn level(&self) -> LogLevel {
        *self.node.min_level.read()
    }

    /// Dot-joined prefix, empty when none was set
    pub fn prefix(&self) -> &str {
        &self.node.prefix
    }

    pub fn fields(&self) -> &Fields {
        &self.node.fields
    }

    pub fn time_format(&self) -> &TimestampFormat {
        &self.node.time_format
    }

    /// Whether a primary file sink is currently open
    pub fn has_file(&self) -> bool {
        self.node.main_file.is_open()
    }

    /// Whether an error-only file sink is currently open
    pub fn has_error_file(&self) -> bool {
        self.node.error_file.is_open()
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Derive a logger whose prefix gains the segment `prefix`
    ///
    /// Segments are joined with `.`; an empty segment leaves the prefix as is.
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Logger {
        let mut node = self.derive();
        if !prefix.is_empty() {
            node.prefix = if node.prefix.is_empty() {
                prefix.to_string()
            } else {
                format!("{}.{}", node.prefix, prefix)
            };
        }
        Self::from_node(node)
    }

    /// Derive a logger with `fields` merged over the inherited ones
    #[must_use]
    pub fn with_fields<I, K, V>(&self, fields: I) -> Logger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut node = self.derive();
        merge_fields(&mut node.fields, fields);
        Self::from_node(node)
    }

    /// Derive a logger writing to `path` instead of the inherited primary file
    ///
    /// If the directory or the file cannot be created, the failure is logged
    /// through this logger (or on stderr when this logger filters out errors)
    /// and a handle to this same logger is returned.
    #[must_use]
    pub fn with_file(&self, path: impl AsRef<Path>) -> Logger {
        match open_log_file(path.as_ref()) {
            Ok(file) => {
                let mut node = self.derive();
                node.main_file = FileCell::with_file(file);
                node.write_order = Arc::new(RwLock::new(()));
                Self::from_node(node)
            }
            Err(e) => {
                if self.is_enabled(LogLevel::Error) {
                    self.log(LogLevel::Error, &format!("failed to open log file: {}", e));
                } else {
                    report_write_error(&e);
                }
                self.clone()
            }
        }
    }

    /// Derive a logger with the named minimum level, falling back to `info`
    #[must_use]
    pub fn with_level(&self, level: &str) -> Logger {
        let logger = Self::from_node(self.derive());
        logger.apply_level_or_info(level);
        logger
    }

    /// Derive a logger configured from `config`
    ///
    /// Only the level is applied; the file entries of `config` are not opened.
    /// Use [`Logger::from_config`] to build a logger with file sinks.
    #[must_use]
    pub fn with_config(&self, config: &Config) -> Logger {
        self.with_level(&config.level)
    }

    /// Derive a logger with a strftime timestamp pattern; `""` restores the default
    #[must_use]
    pub fn with_time_format(&self, pattern: &str) -> Logger {
        self.with_timestamp_format(TimestampFormat::from_pattern(pattern))
    }

    #[must_use]
    pub fn with_timestamp_format(&self, format: TimestampFormat) -> Logger {
        let mut node = self.derive();
        node.time_format = format;
        Self::from_node(node)
    }

    /// Derive a logger whose `fatal` calls `hook` instead of exiting the process
    ///
    /// Loggers derived from the result inherit the hook.
    #[must_use]
    pub fn with_exit_hook<F>(&self, hook: F) -> Logger
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        let mut node = self.derive();
        node.exit_hook = Arc::new(hook);
        Self::from_node(node)
    }

    /// Emit `message` at `level`
    ///
    /// Sink failures are reported on stderr and never reach the caller.
    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.is_enabled(level) {
            return;
        }

        let timestamp = self.node.time_format.now();
        let line = format_line(
            level,
            &self.node.prefix,
            &self.node.fields,
            message,
            &timestamp,
        );

        let _order = self.node.write_order.write();

        self.node.history.write().push(line.clone());

        if let Err(e) = write_stdout(&line) {
            report_write_error(&e);
        }

        if let Err(e) = self.node.main_file.write_line(&line) {
            report_write_error(&e);
        }

        if level.is_error_class() {
            if let Err(e) = self.node.error_file.write_line(&line) {
                report_write_error(&e);
            }
            if let Err(e) = self.node.error_file.sync_data() {
                report_write_error(&e);
            }
        }
    }

    /// Emit at FATAL, close the sinks and invoke the exit hook with status `1`
    pub fn fatal(&self, message: &str) {
        self.log(LogLevel::Fatal, message);
        if let Err(e) = self.close() {
            self.log(LogLevel::Error, &format!("failed to close logger: {}", e));
        }
        (self.node.exit_hook)(1);
    }

    /// Flush and release the primary and error file handles
    ///
    /// Every node sharing the handles sees them as absent afterwards. Flush
    /// failures are only reported on stderr; the first failure to persist a
    /// file is returned. Closing an already closed logger returns `Ok(())`.
    pub fn close(&self) -> Result<()> {
        let _order = self.node.write_order.write();
        let mut first_error = None;

        for cell in [&self.node.main_file, &self.node.error_file] {
            if let Some(mut file) = cell.take() {
                if let Err(e) = file.flush() {
                    report_write_error(&LoggerError::write("flushing log file", e));
                }
                if let Err(e) = file.sync_all() {
                    first_error.get_or_insert(LoggerError::io_operation(
                        "closing log file",
                        "failed to persist file contents",
                        e,
                    ));
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// Flush the primary file to disk; no-op without one
    pub fn sync(&self) -> Result<()> {
        self.node.main_file.sync_all()
    }

    /// Snapshot of the lines this node has emitted (plus those inherited at derivation)
    pub fn messages(&self) -> Vec<String> {
        self.node.history.read().clone()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logging for Logger {
    fn log(&self, level: LogLevel, message: &str) {
        Logger::log(self, level, message);
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        Logger::is_enabled(self, level)
    }

    fn fatal(&self, message: &str) {
        Logger::fatal(self, message);
    }

    fn with_prefix(&self, prefix: &str) -> SharedLogger {
        Arc::new(Logger::with_prefix(self, prefix))
    }

    fn with_fields(&self, fields: Fields) -> SharedLogger {
        Arc::new(Logger::with_fields(self, fields))
    }

    fn with_file(&self, path: &Path) -> SharedLogger {
        Arc::new(Logger::with_file(self, path))
    }

    fn with_level(&self, level: &str) -> SharedLogger {
        Arc::new(Logger::with_level(self, level))
    }

    fn with_config(&self, config: &Config) -> SharedLogger {
        Arc::new(Logger::with_config(self, config))
    }

    fn with_time_format(&self, pattern: &str) -> SharedLogger {
        Arc::new(Logger::with_time_format(self, pattern))
    }

    fn set_level(&self, level: &str) -> Result<()> {
        Logger::set_level(self, level)
    }

    fn close(&self) -> Result<()> {
        Logger::close(self)
    }

    fn sync(&self) -> Result<()> {
        Logger::sync(self)
    }

    fn messages(&self) -> Vec<String> {
        Logger::messages(self)
    }
}

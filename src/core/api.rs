//! Logging capability shared by every logger implementation

use super::config::Config;
use super::error::Result;
use super::fields::Fields;
use super::log_level::LogLevel;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A logger behind the capability trait, as returned by derivations
pub type SharedLogger = Arc<dyn Logging>;

/// Process-termination collaborator invoked by `fatal` with the exit status
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

/// The capability set common to [`Logger`](crate::Logger) and
/// [`MockLogger`](crate::MockLogger).
///
/// Code that logs should depend on this trait (usually as a [`SharedLogger`])
/// rather than on a concrete implementation.
///
/// Derivation methods never modify `self`; they return a new logger that
/// inherits this one's context.
pub trait Logging: Send + Sync {
    /// Emit `message` at `level` if the level passes the filter
    fn log(&self, level: LogLevel, message: &str);

    /// Whether a record at `level` would be emitted
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Emit a formatted message; arguments are only rendered when enabled
    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.log(level, &fmt::format(args));
        }
    }

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Debug, args);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Info, args);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn warningf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Warning, args);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Error, args);
    }

    /// Emit at FATAL, release sinks, then terminate through the exit hook with status `1`.
    ///
    /// Does not panic. Returns only if the installed exit hook returns.
    fn fatal(&self, message: &str);

    fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.fatal(&fmt::format(args));
    }

    /// Derive a logger whose prefix is `parent.prefix` joined with `prefix` by a dot
    fn with_prefix(&self, prefix: &str) -> SharedLogger;

    /// Derive a logger with `fields` merged over the inherited ones
    fn with_fields(&self, fields: Fields) -> SharedLogger;

    /// Derive a logger that writes to `path` in addition to stdout
    fn with_file(&self, path: &Path) -> SharedLogger;

    /// Derive a logger with the named minimum level, falling back to `info`
    fn with_level(&self, level: &str) -> SharedLogger;

    /// Derive a logger configured from `config`
    fn with_config(&self, config: &Config) -> SharedLogger;

    /// Derive a logger with a strftime timestamp pattern; empty restores the default
    fn with_time_format(&self, pattern: &str) -> SharedLogger;

    /// Set the minimum level by name; an unknown name is an error and changes nothing
    fn set_level(&self, level: &str) -> Result<()>;

    /// Release open sinks; calling it again is harmless
    fn close(&self) -> Result<()>;

    /// Flush the primary sink to disk
    fn sync(&self) -> Result<()>;

    /// Snapshot of the recorded lines
    fn messages(&self) -> Vec<String>;
}

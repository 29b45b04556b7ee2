//! File sink plumbing
//!
//! Opening log files (creating parent directories first) and the shared,
//! closable handle cell that derived loggers hand to each other.

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::error::Error as _;
use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

#[cfg(unix)]
const DIR_MODE: u32 = 0o750;
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// An optional open file shared between a logger and its derivations.
///
/// Closing takes the handle out of the cell, so every node sharing it observes
/// the sink as absent afterwards.
#[derive(Debug, Clone, Default)]
pub struct FileCell {
    inner: Arc<Mutex<Option<File>>>,
}

impl FileCell {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_file(file: File) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(file))),
        }
    }

    /// Install `file`, replacing (and dropping) any handle already present.
    pub fn install(&self, file: File) {
        *self.inner.lock() = Some(file);
    }

    pub fn is_open(&self) -> bool {
        self.inner.lock().is_some()
    }

    /// Write `line` followed by a newline in a single call. No-op when closed.
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut guard = self.inner.lock();
        if let Some(file) = guard.as_mut() {
            let mut record = String::with_capacity(line.len() + 1);
            record.push_str(line);
            record.push('\n');
            file.write_all(record.as_bytes())
                .map_err(|e| LoggerError::write("writing record to log file", e))?;
        }
        Ok(())
    }

    /// Flush file data to disk. No-op when closed.
    pub fn sync_data(&self) -> Result<()> {
        if let Some(file) = self.inner.lock().as_ref() {
            file.sync_data()
                .map_err(|e| LoggerError::write("syncing log file data", e))?;
        }
        Ok(())
    }

    /// Flush file data and metadata to disk. No-op when closed.
    pub fn sync_all(&self) -> Result<()> {
        if let Some(file) = self.inner.lock().as_ref() {
            file.sync_all()
                .map_err(|e| LoggerError::io_operation("syncing log file", "sync_all failed", e))?;
        }
        Ok(())
    }

    /// Take the handle out of the cell, leaving it absent for every sharer.
    pub fn take(&self) -> Option<File> {
        self.inner.lock().take()
    }

}

/// Open `path` for appending, creating it and its parent directories if needed.
///
/// On unix the directory tree is created `0750` and the file `0600`.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        builder.mode(DIR_MODE);
        builder.create(dir).map_err(|e| {
            LoggerError::io_operation(
                "creating log directory",
                dir.display().to_string(),
                e,
            )
        })?;
    }

    let mut options = OpenOptions::new();
    options.read(true).create(true).append(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);
    options.open(path).map_err(|e| {
        LoggerError::io_operation("opening log file", path.display().to_string(), e)
    })
}

/// Write one line to stdout.
pub fn write_stdout(line: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", line).map_err(|e| LoggerError::write("writing record to stdout", e))
}

/// Diagnostic handler for failures inside the emit path. Never propagates.
pub fn report_write_error(err: &LoggerError) {
    eprintln!("{}", error_diagnostic(err));
}

/// `[LOGGER ERROR]` line for `err` followed by its chain of causes
fn error_diagnostic(err: &LoggerError) -> String {
    let mut line = format!("[LOGGER ERROR] {}", err);
    let mut cause = err.source();
    while let Some(source) = cause {
        line.push_str(": ");
        line.push_str(&source.to_string());
        cause = source.source();
    }
    line
}

/// Diagnostic for recoverable misuse, such as a level fallback.
pub fn report_warning(message: &str) {
    eprintln!("[LOGGER WARNING] {}", message);
}

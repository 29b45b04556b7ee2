//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON (configuration document) error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Unrecognized level name
    #[error("Unknown log level: '{level}'")]
    InvalidLevel { level: String },

    /// Failure writing a record to a sink
    #[error("Log write failed: {message}")]
    Write {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a level-parse error carrying the offending name
    pub fn invalid_level(level: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            level: level.into(),
        }
    }

    /// Create a sink write error
    pub fn write(message: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Write {
            message: message.into(),
            source,
        }
    }
}

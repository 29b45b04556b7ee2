//! Logging macros for ergonomic log message formatting.
//!
//! These macros render their arguments with `format_args!` and hand them to
//! [`Logging::logf`](crate::Logging::logf), so nothing is formatted when the
//! level is filtered out. They accept anything implementing
//! [`Logging`](crate::Logging), including a [`SharedLogger`](crate::SharedLogger).
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::{fields, info};
//!
//! let logger = Logger::new().with_fields(fields! { "service" => "api", "port" => 8080 });
//!
//! info!(logger, "Server started");
//! info!(logger, "Listening on port {}", 8080);
//! assert_eq!(logger.messages().len(), 2);
//! ```

/// Log a formatted message at the given level.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_leveled_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Logging as _;
        $logger.logf($level, format_args!($($arg)+))
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_leveled_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message and terminate through the logger's exit hook.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// use rust_leveled_logger::fatal;
/// let mock = MockLogger::new();
/// fatal!(mock, "Unable to recover from error: {}", "disk full");
/// assert_eq!(mock.exit_code(), 1);
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logging as _;
        $logger.fatalf(format_args!($($arg)+))
    }};
}

/// Build a [`Fields`](crate::Fields) map from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::{fields, FieldValue};
/// let fields = fields! { "user" => "bob", "attempt" => 3, "admin" => false };
/// assert_eq!(fields["attempt"], FieldValue::Int(3));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert(::std::string::String::from($key), $crate::FieldValue::from($value));
        )+
        fields
    }};
}

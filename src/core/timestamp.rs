//! Timestamp formatting utilities
//!
//! Every rendered line starts with a timestamp. The default layout is
//! `YYYY-MM-DD HH:MM:SS` in local wall-clock time; loggers may switch to a
//! preset or to any strftime-compatible pattern.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::{self, Write as _};

/// strftime pattern of [`TimestampFormat::Standard`].
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp layout used when rendering a line
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Standard.format(&at), "2025-01-08 10:30:45");
/// assert_eq!(TimestampFormat::from_pattern("%d/%m/%Y").format(&at), "08/01/2025");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45`
    #[default]
    Standard,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123`
    Iso8601,

    /// RFC 3339 with offset: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime pattern
    ///
    /// A pattern chrono cannot render falls back to [`TimestampFormat::Standard`].
    Custom(String),
}

impl TimestampFormat {
    /// Build a format from a user-supplied pattern; the empty pattern selects the default.
    #[must_use]
    pub fn from_pattern(pattern: &str) -> Self {
        if pattern.is_empty() {
            TimestampFormat::Standard
        } else {
            TimestampFormat::Custom(pattern.to_string())
        }
    }

    /// Format a point in time according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Standard => datetime.format(DEFAULT_TIME_FORMAT).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                // DelayedFormat reports bad specifiers as fmt::Error instead of panicking here
                if write!(out, "{}", datetime.format(pattern)).is_err() {
                    out.clear();
                    out.push_str(&datetime.format(DEFAULT_TIME_FORMAT).to_string());
                }
                out
            }
        }
    }

    /// Format the current local time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}

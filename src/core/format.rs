//! Line rendering for the file-backed logger
//!
//! A record becomes one line:
//! `<timestamp> [<LEVEL>] [<prefix>] <message> [<k=v> <k=v> ...]`.
//! The prefix is folded into the message text first, then the field list is
//! appended, then timestamp and level tag are put in front.

use super::fields::{join_fields, Fields};
use super::log_level::LogLevel;

/// Render one record. The timestamp is read by the caller so this stays pure.
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::core::format::format_line;
/// use rust_leveled_logger::{Fields, LogLevel};
///
/// let line = format_line(LogLevel::Warning, "api.v1", &Fields::new(), "slow", "2025-01-08 10:30:45");
/// assert_eq!(line, "2025-01-08 10:30:45 [WARNING] [api.v1] slow");
/// ```
pub fn format_line(
    level: LogLevel,
    prefix: &str,
    fields: &Fields,
    message: &str,
    timestamp: &str,
) -> String {
    render(level.tag(), prefix, fields, message, timestamp)
}

/// Same as [`format_line`] for a raw numeric level; unknown values get an `[UNKNOWN]` tag.
pub fn format_line_raw(
    raw_level: u8,
    prefix: &str,
    fields: &Fields,
    message: &str,
    timestamp: &str,
) -> String {
    render(LogLevel::tag_for(raw_level), prefix, fields, message, timestamp)
}

fn render(tag: &str, prefix: &str, fields: &Fields, message: &str, timestamp: &str) -> String {
    let mut body = if prefix.is_empty() {
        message.to_string()
    } else {
        format!("[{}] {}", prefix, message)
    };

    if !fields.is_empty() {
        body.push_str(" [");
        body.push_str(&join_fields(fields));
        body.push(']');
    }

    format!("{} {} {}", timestamp, tag, body)
}

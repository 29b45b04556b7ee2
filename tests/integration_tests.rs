//! Integration tests for logger system
//!
//! These tests verify:
//! - Console-only logging and history
//! - File and error-file sinks
//! - Derivation semantics (prefix, fields, level, time format)
//! - Fatal handling with an injected exit hook
//! - Close/sync lifecycle

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{fields, info};
use std::fs;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Checks `YYYY-MM-DD HH:MM:SS ` at the start of a line and returns the rest
fn strip_timestamp(line: &str) -> &str {
    let (timestamp, rest) = line.split_at(19);
    chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|e| panic!("bad timestamp in {:?}: {}", line, e));
    rest.strip_prefix(' ').expect("space after timestamp")
}

#[test]
fn test_console_only_info() {
    let logger = Logger::new();
    logger.info("hello");

    let messages = logger.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(strip_timestamp(&messages[0]), "[INFO] hello");
}

#[test]
fn test_level_threshold_matrix() {
    for (min_index, min) in LogLevel::ALL.iter().enumerate() {
        let logger = Logger::new().with_level(min.to_str());
        for level in LogLevel::ALL.iter().filter(|l| **l != LogLevel::Fatal) {
            logger.log(*level, "probe");
        }

        let recorded = logger.messages();
        let expected = LogLevel::ALL[..4].iter().filter(|l| *l >= min).count();
        assert_eq!(recorded.len(), expected, "minimum level {}", min);
        for line in &recorded {
            let tag_ok = LogLevel::ALL[min_index..]
                .iter()
                .any(|l| strip_timestamp(line).starts_with(l.tag()));
            assert!(tag_ok, "{} should have been filtered at {}", line, min);
        }
    }
}

#[test]
fn test_with_level_error_keeps_only_error() {
    let logger = Logger::new().with_level("error");
    logger.debug("x");
    logger.info("y");
    logger.error("z");

    let messages = logger.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("[ERROR] z"));
}

#[test]
fn test_nested_prefix_appears_once() {
    let logger = Logger::new().with_prefix("a").with_prefix("b");
    logger.warning("deep");

    let line = &logger.messages()[0];
    assert_eq!(strip_timestamp(line), "[WARNING] [a.b] deep");
    assert_eq!(line.matches("[a.b]").count(), 1);
    assert!(!line.contains("[b.a]"));
}

#[test]
fn test_overlapping_fields_later_wins() {
    let logger = Logger::new()
        .with_fields(fields! { "k" => "f1", "only1" => 1 })
        .with_fields(fields! { "k" => "f2" });
    logger.info("merged");

    let line = &logger.messages()[0];
    assert!(line.contains("k=f2"));
    assert!(!line.contains("k=f1"));
    assert!(line.contains("only1=1"));
}

#[test]
fn test_prefix_and_fields_layout() {
    let logger = Logger::new()
        .with_level("debug")
        .with_prefix("PREFIX")
        .with_fields(fields! { "id" => 1 });
    logger.debug("test prefix debug");

    assert_eq!(
        strip_timestamp(&logger.messages()[0]),
        "[DEBUG] [PREFIX] test prefix debug [id=1]"
    );
}

#[test]
fn test_parent_and_child_histories_are_independent() {
    let parent = Logger::new();
    let child = parent.with_prefix("child");

    parent.info("from parent");
    child.info("from child");

    assert_eq!(parent.messages().len(), 1);
    assert!(parent.messages()[0].contains("from parent"));
    assert_eq!(child.messages().len(), 1);
    assert!(child.messages()[0].contains("from child"));
}

#[test]
fn test_write_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("test.log");

    let logger = Logger::new().with_file(&log_file);
    logger.info("test message");
    logger.with_fields(fields! { "key" => "value" }).warning("with fields");
    logger.close().expect("Failed to close logger");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(strip_timestamp(lines[0]), "[INFO] test message");
    assert_eq!(strip_timestamp(lines[1]), "[WARNING] with fields [key=value]");
}

#[test]
fn test_with_file_appends_to_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("append.log");
    fs::write(&log_file, "existing line\n").unwrap();

    let logger = Logger::new().with_file(&log_file);
    logger.info("appended");
    logger.close().unwrap();

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.starts_with("existing line\n"));
    assert!(content.trim_end().ends_with("[INFO] appended"));
}

#[test]
fn test_with_file_replaces_parent_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first.log");
    let second = temp_dir.path().join("second.log");

    let parent = Logger::new().with_file(&first);
    let child = parent.with_file(&second);
    child.info("only in second");
    parent.info("only in first");
    parent.close().unwrap();

    // The child's handle is its own and survives the parent's close
    assert!(child.has_file());
    child.close().unwrap();

    let first_content = fs::read_to_string(&first).unwrap();
    let second_content = fs::read_to_string(&second).unwrap();
    assert!(first_content.contains("only in first"));
    assert!(!first_content.contains("only in second"));
    assert!(second_content.contains("only in second"));
    assert!(!second_content.contains("only in first"));
}

#[test]
fn test_config_file_sinks() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let main_log = temp_dir.path().join("logs").join("main.log");
    let error_log = temp_dir.path().join("logs").join("error.log");

    let config = Config::default()
        .with_level("debug")
        .with_file(rust_leveled_logger::MAIN_FILE_KEY, main_log.to_string_lossy())
        .with_file("error", error_log.to_string_lossy());
    let logger = Logger::from_config(&config);
    assert!(logger.has_file());
    assert!(logger.has_error_file());

    logger.debug("debug line");
    logger.warning("warning line");
    logger.error("error line");
    logger.close().unwrap();

    let main_content = fs::read_to_string(&main_log).unwrap();
    assert_eq!(main_content.lines().count(), 3);

    let error_content = fs::read_to_string(&error_log).unwrap();
    let error_lines: Vec<&str> = error_content.lines().collect();
    assert_eq!(error_lines.len(), 1);
    assert_eq!(strip_timestamp(error_lines[0]), "[ERROR] error line");
}

#[test]
fn test_fatal_with_exit_hook() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let error_log = temp_dir.path().join("error.log");
    let config = Config::default().with_file("error", error_log.to_string_lossy());

    let exit_code = Arc::new(AtomicI32::new(0));
    let calls = Arc::new(AtomicUsize::new(0));
    let (code, count) = (Arc::clone(&exit_code), Arc::clone(&calls));
    let logger = Logger::from_config(&config).with_exit_hook(move |c| {
        code.store(c, Ordering::SeqCst);
        count.fetch_add(1, Ordering::SeqCst);
    });

    logger.fatal("boom");

    assert_eq!(exit_code.load(Ordering::SeqCst), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let fatal_lines: Vec<String> = logger
        .messages()
        .into_iter()
        .filter(|m| m.contains("[FATAL] boom"))
        .collect();
    assert_eq!(fatal_lines.len(), 1);

    // Sinks were released before the hook ran
    assert!(!logger.has_error_file());
    let content = fs::read_to_string(&error_log).unwrap();
    assert!(content.contains("[FATAL] boom"));
}

#[test]
fn test_fatalf_formats_message() {
    let exit_code = Arc::new(AtomicI32::new(0));
    let code = Arc::clone(&exit_code);
    let logger = Logger::new().with_exit_hook(move |c| code.store(c, Ordering::SeqCst));

    logger.fatalf(format_args!("fatal {} occurred", 7));

    assert_eq!(exit_code.load(Ordering::SeqCst), 1);
    assert!(logger.messages()[0].ends_with("[FATAL] fatal 7 occurred"));
}

#[test]
fn test_close_twice() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new().with_file(temp_dir.path().join("twice.log"));

    assert!(logger.close().is_ok());
    assert!(logger.close().is_ok());
}

#[test]
fn test_write_after_close_keeps_console_and_history() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("closed.log");
    let logger = Logger::new().with_file(&log_file);
    let sibling = logger.with_prefix("sibling");

    logger.close().unwrap();
    sibling.info("after close");

    assert_eq!(sibling.messages().len(), 1);
    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_errors_stay_inside_logger() {
    let full = std::path::Path::new("/dev/full");
    if !full.exists() {
        return;
    }

    let logger = Logger::new().with_file(full);
    assert!(logger.has_file());

    // Every write fails with ENOSPC; the failure only reaches stderr
    logger.info("dropped by the device");
    logger.error("also dropped");
    assert_eq!(logger.messages().len(), 2);

    assert!(logger.sync().is_err());
    let err = logger.close().expect_err("persisting /dev/full fails");
    assert!(matches!(err, LoggerError::IoOperation { .. }));
    assert!(!logger.has_file());
}

#[test]
fn test_custom_time_format() {
    let logger = Logger::new().with_time_format("%H:%M:%S");
    logger.info("timed");

    let line = &logger.messages()[0];
    let (time, rest) = line.split_at(8);
    assert!(chrono::NaiveTime::parse_from_str(time, "%H:%M:%S").is_ok());
    assert_eq!(rest, " [INFO] timed");

    let reset = logger.with_time_format("");
    reset.info("default again");
    assert_eq!(
        strip_timestamp(reset.messages().last().unwrap()),
        "[INFO] default again"
    );
}

#[test]
fn test_timestamp_presets() {
    let logger = Logger::new().with_timestamp_format(TimestampFormat::Unix);
    info!(logger, "unix {}", "time");

    let line = &logger.messages()[0];
    let (seconds, rest) = line.split_once(' ').unwrap();
    assert!(seconds.parse::<i64>().unwrap() > 0);
    assert_eq!(rest, "[INFO] unix time");
}

#[test]
fn test_config_loaded_from_json_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let main_log = temp_dir.path().join("from_json.log");
    let config_path = temp_dir.path().join("logger.json");
    let document = serde_json::json!({
        "level": "warning",
        "files": { "main": main_log.to_string_lossy() }
    });
    fs::write(&config_path, document.to_string()).unwrap();

    let config = Config::load(&config_path).expect("load config");
    config.validate().expect("valid config");
    let logger = Logger::from_config(&config);

    logger.info("filtered");
    logger.warning("kept");
    logger.close().unwrap();

    let content = fs::read_to_string(&main_log).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("[WARNING] kept"));
}

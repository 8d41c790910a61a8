//! Integration tests for the default log file.
//!
//! These tests verify file naming, creation, and the date/time header that
//! the file sink writes before each severity-tagged line.

use std::fs;
use std::sync::Arc;

use logging::{Log, Severity, SeverityLogger, log_debug, log_info};
use logging_sink::{DefaultSink, TimestampMode};
use tempfile::tempdir;
use time::macros::datetime;

/// Returns true when `header` looks like `YYYY/MM/DD HH:MM:SS.uuuuuu `.
fn is_micro_header(header: &str) -> bool {
    let bytes = header.as_bytes();
    bytes.len() == 27
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'/',
            10 | 26 => *byte == b' ',
            13 | 16 => *byte == b':',
            19 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        })
}

// ============================================================================
// Naming Tests
// ============================================================================

/// Verifies the file is created with the literal prefix, stamp, and pid.
#[test]
fn file_is_created_with_expected_name() {
    let dir = tempdir().expect("tempdir");
    let builder = DefaultSink::new("App")
        .directory(dir.path())
        .timestamp(datetime!(2016-10-10 18:09:42.44439598 UTC))
        .pid(32859);

    let sink = builder.open().expect("log file opens");
    drop(sink);

    let expected = dir.path().join("App_2016-10-10--18-09-42.44439598_32859.log");
    assert_eq!(builder.path(), expected);
    assert!(expected.is_file());
}

/// Verifies distinct pids yield distinct files for the same instant.
#[test]
fn different_processes_get_different_files() {
    let dir = tempdir().expect("tempdir");
    let at = datetime!(2016-10-10 18:09:42 UTC);

    let first = DefaultSink::new("App").directory(dir.path()).timestamp(at).pid(1);
    let second = DefaultSink::new("App").directory(dir.path()).timestamp(at).pid(2);
    first.open().expect("first opens");
    second.open().expect("second opens");

    assert_ne!(first.path(), second.path());
    assert_eq!(fs::read_dir(dir.path()).expect("read dir").count(), 2);
}

// ============================================================================
// Content Tests
// ============================================================================

/// Verifies lines written through the facade carry a date/time header.
#[test]
fn lines_are_prefixed_with_date_and_time() {
    let dir = tempdir().expect("tempdir");
    let builder = DefaultSink::new("SimpleMath").directory(dir.path());
    let logger = SeverityLogger::new(Severity::Info, builder.open().expect("opens"));

    log_info!(logger, "{} + {} is equal to {}", 3, 5, 3 + 5);
    log_debug!(logger, "{}", "Addition is complete");
    drop(logger);

    let contents = fs::read_to_string(builder.path()).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);

    let (header, message) = lines[0].split_at(27);
    assert!(is_micro_header(header), "unexpected header {header:?}");
    assert_eq!(message, "INFO 3 + 5 is equal to 8");
}

/// Verifies the line header can be switched off.
#[test]
fn line_timestamps_can_be_disabled() {
    let dir = tempdir().expect("tempdir");
    let builder = DefaultSink::new("Plain")
        .directory(dir.path())
        .line_timestamps(TimestampMode::Off);
    let logger = SeverityLogger::new(Severity::Debug, builder.open().expect("opens"));

    logger.warning(format_args!("{}", "W"));
    drop(logger);

    assert_eq!(fs::read_to_string(builder.path()).unwrap(), "WARNING W\n");
}

/// Verifies several loggers can share one file sink.
#[test]
fn loggers_share_one_file() {
    let dir = tempdir().expect("tempdir");
    let builder = DefaultSink::new("Shared")
        .directory(dir.path())
        .line_timestamps(TimestampMode::Off);
    let sink = Arc::new(builder.open().expect("opens"));

    let network = SeverityLogger::new(Severity::Warning, Arc::clone(&sink));
    let storage = SeverityLogger::new(Severity::Debug, Arc::clone(&sink));
    network.info(format_args!("dropped"));
    network.error(format_args!("peer reset"));
    storage.debug(format_args!("flushed"));
    drop((network, storage, sink));

    assert_eq!(
        fs::read_to_string(builder.path()).unwrap(),
        "ERROR peer reset\nDEBUG flushed\n"
    );
}

/// Verifies an existing file is reopened from the start without truncation.
#[test]
fn existing_file_is_overwritten_from_the_start() {
    let dir = tempdir().expect("tempdir");
    let builder = DefaultSink::new("Reuse")
        .directory(dir.path())
        .line_timestamps(TimestampMode::Off);
    fs::write(builder.path(), "0123456789abcdef\n").expect("seed file");

    let logger = SeverityLogger::new(Severity::Info, builder.open().expect("opens"));
    logger.info(format_args!("x"));
    drop(logger);

    assert_eq!(
        fs::read_to_string(builder.path()).unwrap(),
        "INFO x\n789abcdef\n"
    );
}

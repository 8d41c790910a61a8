//! End-to-end scenarios combining the severity facade with the bundled sinks.
//!
//! | Threshold | Calls                         | Expected output                 |
//! |-----------|-------------------------------|---------------------------------|
//! | Info      | info(3 + 5), debug            | `INFO 3 + 5 is equal to 8`      |
//! | Warning   | error, warning, debug         | `ERROR E`, `WARNING W`          |
//! | Debug     | is_debug_enabled              | true                            |
//! | Fatal     | is_debug / is_fatal_enabled   | false / true                    |

use std::cell::Cell;
use std::fs;

use sevlog::{
    DefaultSink, Log, LoggerConfig, NullLogger, Severity, SeverityLogger, TextLogger,
    TimestampMode, default_sink, log_debug, log_error, log_info, log_warning,
};
use tempfile::tempdir;

fn captured(sink: TextLogger<Vec<u8>>) -> String {
    String::from_utf8(sink.into_inner()).expect("utf-8")
}

// ============================================================================
// Facade Scenarios
// ============================================================================

/// Verifies the Info threshold addition scenario.
#[test]
fn info_threshold_addition_scenario() {
    let sink = TextLogger::plain(Vec::new());
    let logger = SeverityLogger::new(Severity::Info, &sink);

    log_info!(logger, "{} + {} is equal to {}", 3, 5, 8);
    log_debug!(logger, "{}", "x");

    assert_eq!(captured(sink), "INFO 3 + 5 is equal to 8\n");
}

/// Verifies the Warning threshold scenario.
#[test]
fn warning_threshold_scenario() {
    let sink = TextLogger::plain(Vec::new());
    let logger = SeverityLogger::new(Severity::Warning, &sink);

    log_error!(logger, "{}", "E");
    log_warning!(logger, "{}", "W");
    log_debug!(logger, "{}", "D");

    assert_eq!(captured(sink), "ERROR E\nWARNING W\n");
}

/// Verifies the threshold query scenarios.
#[test]
fn query_scenarios() {
    let sink = TextLogger::plain(Vec::new());
    assert!(SeverityLogger::new(Severity::Debug, &sink).is_debug_enabled());

    let fatal = SeverityLogger::new(Severity::Fatal, &sink);
    assert!(!fatal.is_debug_enabled());
    assert!(fatal.is_fatal_enabled());
}

/// Verifies the caller-side guard skips expensive argument construction.
#[test]
fn guarded_expensive_parameter_is_skipped() {
    let built = Cell::new(0);
    let debug_dump = || {
        built.set(built.get() + 1);
        "Hard to generate string"
    };

    let sink = TextLogger::plain(Vec::new());
    let quiet = SeverityLogger::new(Severity::Info, &sink);
    if quiet.is_debug_enabled() {
        quiet.debug(format_args!("The state of the process is: {}", debug_dump()));
    }
    let verbose = SeverityLogger::new(Severity::Debug, &sink);
    if verbose.is_debug_enabled() {
        verbose.debug(format_args!("The state of the process is: {}", debug_dump()));
    }

    assert_eq!(built.get(), 1);
    assert_eq!(
        captured(sink),
        "DEBUG The state of the process is: Hard to generate string\n"
    );
}

/// Verifies unconfigured loggers are silent for every severity.
#[test]
fn unconfigured_loggers_are_silent() {
    let none: Option<SeverityLogger<TextLogger<Vec<u8>>>> = None;
    for severity in Severity::ALL {
        none.log(severity, format_args!("dropped"));
        NullLogger.log(severity, format_args!("dropped"));
        assert!(!none.is_enabled(severity));
        assert!(!NullLogger.is_enabled(severity));
    }
}

/// Verifies a configuration parsed from text drives the threshold.
#[test]
fn configured_threshold_from_token() {
    let config = LoggerConfig::from_value(Some("warn")).expect("valid token");
    let sink = TextLogger::plain(Vec::new());
    let logger = config.build(&sink);

    log_info!(logger, "hidden");
    log_warning!(logger, "shown");

    assert_eq!(captured(sink), "WARNING shown\n");
}

// ============================================================================
// Default Sink Scenarios
// ============================================================================

/// Verifies the default sink lands in the working directory with its name.
#[test]
fn default_sink_creates_file_in_working_directory() {
    let prefix = format!("sevlog-scenario-{}", std::process::id());
    let sink = default_sink(&prefix).expect("log file opens");
    let logger = SeverityLogger::new(Severity::Info, sink);
    log_info!(logger, "started");
    drop(logger);

    let cwd = std::env::current_dir().expect("cwd");
    let suffix = format!("_{}.log", std::process::id());
    let created: Vec<_> = fs::read_dir(&cwd)
        .expect("read cwd")
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&format!("{prefix}_")) && name.ends_with(&suffix))
        })
        .collect();

    assert_eq!(created.len(), 1, "found {created:?}");
    let contents = fs::read_to_string(&created[0]).expect("read log");
    for path in &created {
        fs::remove_file(path).expect("cleanup");
    }
    assert!(contents.ends_with(" INFO started\n"), "{contents:?}");
}

/// Verifies a fixed timestamp and pid produce the literal file name.
#[test]
fn default_sink_with_known_timestamp_and_pid() {
    let dir = tempdir().expect("tempdir");
    let at = time::macros::datetime!(2016-10-10 18:09:42.444 UTC);
    let builder = DefaultSink::new("App")
        .directory(dir.path())
        .timestamp(at)
        .pid(4242)
        .line_timestamps(TimestampMode::DateTime);

    let logger = SeverityLogger::new(Severity::Error, builder.open().expect("opens"));
    log_error!(logger, "{}", "E");
    drop(logger);

    let path = dir.path().join("App_2016-10-10--18-09-42.444_4242.log");
    let contents = fs::read_to_string(path).expect("log exists");
    assert_eq!(contents.len(), "YYYY/MM/DD HH:MM:SS ERROR E\n".len());
    assert!(contents.ends_with(" ERROR E\n"));
}

//! crates/logging/src/macros.rs
//! Guarded emission macros.
//!
//! Each macro consults [`Log::is_enabled`](crate::Log::is_enabled) before
//! building its `format_args!`, so argument expressions are not evaluated
//! for suppressed severities.

/// Emit a line at an explicit severity.
///
/// # Example
/// ```
/// use logging::{log_at, MemorySink, Severity, SeverityLogger};
///
/// let sink = MemorySink::new();
/// let logger = SeverityLogger::new(Severity::Warning, &sink);
/// log_at!(logger, Severity::Error, "code {}", 23);
/// assert_eq!(sink.lines(), ["ERROR code 23"]);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let severity: $crate::Severity = $severity;
        if $crate::Log::is_enabled(logger, severity) {
            $crate::Log::log(logger, severity, ::std::format_args!($($arg)+));
        }
    }};
}

/// Emit a `DEBUG` line.
///
/// # Example
/// ```
/// use logging::{log_debug, MemorySink, Severity, SeverityLogger};
///
/// fn dump_state() -> String {
///     unreachable!("not evaluated while debug output is disabled")
/// }
///
/// let sink = MemorySink::new();
/// let logger = SeverityLogger::new(Severity::Info, &sink);
/// log_debug!(logger, "state: {}", dump_state());
/// assert!(sink.is_empty());
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Emit an `INFO` line.
///
/// # Example
/// ```ignore
/// log_info!(logger, "{} + {} is equal to {}", a, b, a + b);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Emit a `WARNING` line.
///
/// # Example
/// ```ignore
/// log_warning!(logger, "retrying in {}s", delay);
/// ```
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Emit an `ERROR` line.
///
/// # Example
/// ```ignore
/// log_error!(logger, "failed to read {}: {}", path.display(), err);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Emit a `FATAL` line. Does not terminate the process.
///
/// # Example
/// ```ignore
/// log_fatal!(logger, "cannot continue: {}", reason);
/// ```
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}

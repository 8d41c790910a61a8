//! crates/logging/src/logger.rs
//! Threshold filtering in front of a [`TextSink`].

use std::fmt;
use std::sync::Arc;

use crate::severity::Severity;
use crate::sink::TextSink;

/// Severity-aware logging operations.
///
/// Implemented by [`SeverityLogger`], by the [`NullLogger`] null object, and by
/// `Option<L>` so that a component may hold an optional logger and call it
/// unconditionally: `None` never emits and answers `false` to every query.
///
/// The emission methods receive already-built [`fmt::Arguments`]; the
/// expressions feeding them have been evaluated by the time the call is made.
/// Use the `is_*_enabled` queries, or the `log_*!` macros which consult them,
/// to skip expensive argument construction.
pub trait Log {
    /// Reports whether calls at `severity` produce output.
    fn is_enabled(&self, severity: Severity) -> bool;

    /// Emits one line at `severity` if that severity is enabled.
    fn log(&self, severity: Severity, args: fmt::Arguments<'_>);

    /// Returns `true` if [`Severity::Debug`] lines are emitted.
    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Severity::Debug)
    }

    /// Returns `true` if [`Severity::Info`] lines are emitted.
    fn is_info_enabled(&self) -> bool {
        self.is_enabled(Severity::Info)
    }

    /// Returns `true` if [`Severity::Warning`] lines are emitted.
    fn is_warning_enabled(&self) -> bool {
        self.is_enabled(Severity::Warning)
    }

    /// Returns `true` if [`Severity::Error`] lines are emitted.
    fn is_error_enabled(&self) -> bool {
        self.is_enabled(Severity::Error)
    }

    /// Returns `true` if [`Severity::Fatal`] lines are emitted.
    fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(Severity::Fatal)
    }

    /// Emits a `DEBUG` line.
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    /// Emits an `INFO` line.
    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    /// Emits a `WARNING` line.
    fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args);
    }

    /// Emits an `ERROR` line.
    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    /// Emits a `FATAL` line. The process keeps running.
    fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Fatal, args);
    }
}

/// Filters log calls by a fixed threshold and labels the survivors.
///
/// A call at severity `s` reaches the sink if and only if `s >= threshold`.
/// Each enabled call produces exactly one synchronous
/// [`TextSink::write_record`] call; nothing is buffered. The threshold cannot
/// change after construction, so instances can be shared freely between
/// threads whenever the sink allows it.
///
/// The sink may be owned, borrowed, boxed, or shared through [`Arc`](std::sync::Arc);
/// several loggers with different thresholds can write to one sink.
///
/// # Examples
///
/// ```
/// use logging::{Log, MemorySink, Severity, SeverityLogger};
///
/// let sink = MemorySink::new();
/// let logger = SeverityLogger::new(Severity::Info, &sink);
///
/// logger.info(format_args!("{} + {} is equal to {}", 3, 5, 8));
/// logger.debug(format_args!("{}", "suppressed"));
///
/// assert_eq!(sink.lines(), ["INFO 3 + 5 is equal to 8"]);
/// ```
#[derive(Clone, Debug)]
pub struct SeverityLogger<S> {
    threshold: Severity,
    sink: S,
}

impl<S> SeverityLogger<S> {
    /// Creates a logger emitting `threshold` and everything more serious.
    #[must_use]
    pub const fn new(threshold: Severity, sink: S) -> Self {
        Self { threshold, sink }
    }

    /// Returns the least serious severity that is emitted.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Borrows the sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the logger and returns the sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Reports whether calls at `severity` produce output.
    #[must_use]
    pub const fn is_enabled(&self, severity: Severity) -> bool {
        severity.is_at_least(self.threshold)
    }
}

impl<S: TextSink> Log for SeverityLogger<S> {
    fn is_enabled(&self, severity: Severity) -> bool {
        Self::is_enabled(self, severity)
    }

    fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if Self::is_enabled(self, severity) {
            self.sink.write_record(severity, args);
        }
    }
}

/// Logger that never emits and reports every severity as disabled.
///
/// Stands in for "no logger configured" where a concrete type is more
/// convenient than `Option<SeverityLogger<_>>`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullLogger;

impl Log for NullLogger {
    fn is_enabled(&self, _severity: Severity) -> bool {
        false
    }

    fn log(&self, _severity: Severity, _args: fmt::Arguments<'_>) {}
}

impl<L: Log> Log for Option<L> {
    fn is_enabled(&self, severity: Severity) -> bool {
        self.as_ref().is_some_and(|logger| logger.is_enabled(severity))
    }

    fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if let Some(logger) = self {
            logger.log(severity, args);
        }
    }
}

impl<L: Log + ?Sized> Log for &L {
    fn is_enabled(&self, severity: Severity) -> bool {
        (**self).is_enabled(severity)
    }

    fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        (**self).log(severity, args);
    }
}

impl<L: Log + ?Sized> Log for Box<L> {
    fn is_enabled(&self, severity: Severity) -> bool {
        (**self).is_enabled(severity)
    }

    fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        (**self).log(severity, args);
    }
}

impl<L: Log + ?Sized> Log for Arc<L> {
    fn is_enabled(&self, severity: Severity) -> bool {
        (**self).is_enabled(severity)
    }

    fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        (**self).log(severity, args);
    }
}

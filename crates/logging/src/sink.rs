//! crates/logging/src/sink.rs
//! The line-writing capability a [`SeverityLogger`](crate::SeverityLogger) delegates to.

use std::fmt::{self, Write as _};
use std::rc::Rc;
use std::sync::{Arc, Mutex, PoisonError};

use crate::severity::Severity;

/// Destination that formats and writes whole lines.
///
/// Implementations own their synchronisation: when a sink is shared between
/// threads, concurrent [`write_line`](Self::write_line) calls must not
/// interleave within a line. Write failures are part of the sink's own
/// contract and are never reported back through this trait.
///
/// # Examples
///
/// ```
/// use std::fmt;
/// use std::sync::Mutex;
/// use logging::TextSink;
///
/// struct Stderr(Mutex<()>);
///
/// impl TextSink for Stderr {
///     fn write_line(&self, args: fmt::Arguments<'_>) {
///         let _guard = self.0.lock();
///         eprintln!("{args}");
///     }
/// }
///
/// Stderr(Mutex::new(())).write_line(format_args!("{} + {}", 1, 2));
/// ```
pub trait TextSink {
    /// Writes one newline-terminated line rendered from `args`.
    fn write_line(&self, args: fmt::Arguments<'_>);

    /// Writes a line produced at `severity`.
    ///
    /// The default renders `"<SEVERITY> <message>"` and hands it to
    /// [`write_line`](Self::write_line). Overrides may route on the severity
    /// but must keep that leading token.
    fn write_record(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.write_line(format_args!("{} {}", severity.as_str(), args));
    }
}

impl<S: TextSink + ?Sized> TextSink for &S {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        (**self).write_line(args);
    }

    fn write_record(&self, severity: Severity, args: fmt::Arguments<'_>) {
        (**self).write_record(severity, args);
    }
}

impl<S: TextSink + ?Sized> TextSink for Box<S> {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        (**self).write_line(args);
    }

    fn write_record(&self, severity: Severity, args: fmt::Arguments<'_>) {
        (**self).write_record(severity, args);
    }
}

impl<S: TextSink + ?Sized> TextSink for Rc<S> {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        (**self).write_line(args);
    }

    fn write_record(&self, severity: Severity, args: fmt::Arguments<'_>) {
        (**self).write_record(severity, args);
    }
}

impl<S: TextSink + ?Sized> TextSink for Arc<S> {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        (**self).write_line(args);
    }

    fn write_record(&self, severity: Severity, args: fmt::Arguments<'_>) {
        (**self).write_record(severity, args);
    }
}

/// In-memory sink that keeps every written line.
///
/// Lines are stored without their trailing newline. Useful for asserting on
/// output in tests and for components that want to inspect what they logged.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns all captured lines.
    pub fn drain(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    /// Returns `true` when nothing has been written since the last drain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl TextSink for MemorySink {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        let mut line = String::new();
        // A failing `Display` impl ends the line early; the rendered part is kept.
        let _ = line.write_fmt(args);
        if line.ends_with('\n') {
            line.pop();
        }
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}

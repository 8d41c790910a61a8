//! crates/logging-sink/src/text_logger.rs
//! Mutex-guarded line writer implementing [`TextSink`].

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use logging::TextSink;
use time::OffsetDateTime;

use crate::timestamp::{TimestampMode, local_now};

/// Line-oriented logger over an [`io::Write`] target.
///
/// Each line is rendered as `<prefix><timestamp header><message>` and
/// terminated by a newline unless the message already ends with one. If an
/// argument's `Display` impl fails, the message is cut at that point and the
/// partial line is still written. The complete line is handed to the writer
/// in a single `write_all` while an internal lock is held, so concurrent
/// callers never interleave within a line.
///
/// As a [`TextSink`], write failures are dropped; use
/// [`try_write_line`](Self::try_write_line) to observe them.
///
/// # Examples
///
/// ```
/// use logging::{Log, Severity, SeverityLogger};
/// use logging_sink::TextLogger;
///
/// let sink = TextLogger::plain(Vec::new());
/// let logger = SeverityLogger::new(Severity::Warning, &sink);
///
/// logger.error(format_args!("{}", "This is an error log"));
/// logger.warning(format_args!("{}", "This is a warning log"));
/// logger.debug(format_args!("{}", "This is a debug log"));
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "ERROR This is an error log\nWARNING This is a warning log\n");
/// ```
pub struct TextLogger<W> {
    writer: Mutex<W>,
    prefix: String,
    timestamps: TimestampMode,
}

impl<W> TextLogger<W> {
    /// Creates a logger writing headers according to `timestamps`.
    #[must_use]
    pub fn new(writer: W, timestamps: TimestampMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            prefix: String::new(),
            timestamps,
        }
    }

    /// Creates a logger that writes bare lines with no prefix or header.
    #[must_use]
    pub fn plain(writer: W) -> Self {
        Self::new(writer, TimestampMode::Off)
    }

    /// Sets a fixed text written at the very start of every line.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Returns the line prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the configured [`TimestampMode`].
    #[must_use]
    pub const fn timestamp_mode(&self) -> TimestampMode {
        self.timestamps
    }

    /// Runs `f` with exclusive access to the writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut writer)
    }

    /// Consumes the logger and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> TextLogger<W> {
    /// Writes one line, stamping it with the current local time when
    /// timestamps are enabled.
    pub fn try_write_line(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let now = if self.timestamps.is_enabled() {
            local_now()
        } else {
            OffsetDateTime::UNIX_EPOCH
        };
        self.write_line_at(now, args)
    }

    /// Writes one line using `now` for the timestamp header.
    pub fn write_line_at(&self, now: OffsetDateTime, args: fmt::Arguments<'_>) -> io::Result<()> {
        let line = self.render(now, args)?;
        self.with_writer(|writer| {
            writer.write_all(&line)?;
            writer.flush()
        })
    }

    fn render(&self, now: OffsetDateTime, args: fmt::Arguments<'_>) -> io::Result<Vec<u8>> {
        let mut line = Vec::with_capacity(self.prefix.len() + 64);
        line.extend_from_slice(self.prefix.as_bytes());
        self.timestamps.write_header(now, &mut line)?;
        // A failing `Display` impl ends the message early; the rendered part is kept.
        let _ = line.write_fmt(args);
        if line.last() != Some(&b'\n') {
            line.push(b'\n');
        }
        Ok(line)
    }
}

impl TextLogger<io::Stdout> {
    /// Logger writing bare lines to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::plain(io::stdout())
    }
}

impl TextLogger<io::Stderr> {
    /// Logger writing bare lines to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::plain(io::stderr())
    }
}

impl<W: Write> TextSink for TextLogger<W> {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        // Failures stay with the writer; callers wanting them use try_write_line.
        let _ = self.try_write_line(args);
    }
}

impl<W> fmt::Debug for TextLogger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextLogger")
            .field("prefix", &self.prefix)
            .field("timestamps", &self.timestamps)
            .finish_non_exhaustive()
    }
}

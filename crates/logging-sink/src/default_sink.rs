//! crates/logging-sink/src/default_sink.rs
//! Timestamped log file named after the program, the clock, and the process.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use time::OffsetDateTime;

use crate::text_logger::TextLogger;
use crate::timestamp::{TimestampMode, file_stamp, local_now};

/// Error returned when the log file cannot be opened.
#[derive(Debug, Error)]
#[error("failed to open log file {}: {source}", .path.display())]
pub struct OpenLogFileError {
    path: PathBuf,
    source: io::Error,
}

impl OpenLogFileError {
    /// Returns the path that could not be opened.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the underlying I/O error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }
}

/// Builds `<prefix>_<stamp>_<pid>.log`; see [`file_stamp`](crate::file_stamp)
/// for the stamp layout.
///
/// # Examples
///
/// ```
/// use logging_sink::log_file_name;
/// use time::macros::datetime;
///
/// let name = log_file_name("SimpleMath", datetime!(2016-10-10 18:09:42.44439598 UTC), 32859);
/// assert_eq!(name, "SimpleMath_2016-10-10--18-09-42.44439598_32859.log");
/// ```
#[must_use]
pub fn log_file_name(prefix: &str, timestamp: OffsetDateTime, pid: u32) -> String {
    format!("{prefix}_{}_{pid}.log", file_stamp(timestamp))
}

/// Configures and opens the default log file.
///
/// The timestamp and process id are captured when the builder is created,
/// so [`file_name`](Self::file_name) and [`open`](Self::open) agree. By
/// default the file lands in the current working directory and each line is
/// headed by a date and a microsecond time.
#[derive(Clone, Debug)]
pub struct DefaultSink {
    prefix: String,
    directory: PathBuf,
    timestamp: OffsetDateTime,
    pid: u32,
    line_timestamps: TimestampMode,
}

impl DefaultSink {
    /// Starts a builder for a file named after `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            directory: PathBuf::new(),
            timestamp: local_now(),
            pid: std::process::id(),
            line_timestamps: TimestampMode::DateTimeMicros,
        }
    }

    /// Places the file in `directory` instead of the working directory.
    #[must_use]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Overrides the timestamp used in the file name.
    #[must_use]
    pub fn timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Overrides the process id used in the file name.
    #[must_use]
    pub fn pid(mut self, pid: u32) -> Self {
        self.pid = pid;
        self
    }

    /// Selects the header written in front of each line.
    #[must_use]
    pub fn line_timestamps(mut self, mode: TimestampMode) -> Self {
        self.line_timestamps = mode;
        self
    }

    /// Returns the file name without its directory.
    #[must_use]
    pub fn file_name(&self) -> String {
        log_file_name(&self.prefix, self.timestamp, self.pid)
    }

    /// Returns the full path the file is opened at.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(self.file_name())
    }

    /// Creates the file if needed and opens it for writing from the start.
    pub fn open(&self) -> Result<TextLogger<File>, OpenLogFileError> {
        let path = self.path();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| OpenLogFileError {
                path: path.clone(),
                source,
            })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), "opened log file");

        Ok(TextLogger::new(file, self.line_timestamps))
    }
}

/// Opens `<prefix>_<stamp>_<pid>.log` in the current working directory.
///
/// Lines written to the returned sink are headed by
/// `YYYY/MM/DD HH:MM:SS.uuuuuu `.
pub fn default_sink(prefix: &str) -> Result<TextLogger<File>, OpenLogFileError> {
    DefaultSink::new(prefix).open()
}

/// Like [`default_sink`], but prints the error to standard error and exits
/// the process with status 1 when the file cannot be opened.
pub fn default_sink_or_exit(prefix: &str) -> TextLogger<File> {
    match default_sink(prefix) {
        Ok(sink) => sink,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

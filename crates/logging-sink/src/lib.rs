#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides [`TextSink`](logging::TextSink) implementations
//! for the `logging` facade. [`TextLogger`] writes newline-terminated lines to
//! any [`std::io::Write`] target, optionally headed by a prefix and a
//! date/time stamp. [`default_sink`] opens a uniquely named file in the
//! working directory and returns a [`TextLogger`] for it.
//!
//! # Design
//!
//! - A [`TextLogger`] guards its writer with a mutex and writes each fully
//!   rendered line with one call, so lines from concurrent callers never mix.
//! - Timestamps are taken from the local clock, falling back to UTC when the
//!   local offset is unavailable.
//! - Opening the default file returns [`OpenLogFileError`] on failure;
//!   [`default_sink_or_exit`] turns that into a diagnostic and process exit
//!   for programs that cannot run without a log.
//!
//! # Errors
//!
//! [`OpenLogFileError`] names the file and carries the underlying
//! [`std::io::Error`]. Runtime write failures are reported only through
//! [`TextLogger::try_write_line`].
//!
//! # Examples
//!
//! ```no_run
//! use logging::{log_info, Severity, SeverityLogger};
//! use logging_sink::default_sink;
//!
//! // Creates e.g. SimpleMath_2016-10-10--18-09-42.44439598_32859.log
//! let sink = default_sink("SimpleMath")?;
//! let logger = SeverityLogger::new(Severity::Info, sink);
//!
//! // 2016/10/10 18:09:42.444874 INFO 3 + 5 is equal to 8
//! log_info!(logger, "{} + {} is equal to {}", 3, 5, 3 + 5);
//! # Ok::<(), logging_sink::OpenLogFileError>(())
//! ```

mod default_sink;
mod text_logger;
mod timestamp;

pub use default_sink::{
    DefaultSink, OpenLogFileError, default_sink, default_sink_or_exit, log_file_name,
};
pub use text_logger::TextLogger;
pub use timestamp::{TimestampMode, file_stamp, local_now};

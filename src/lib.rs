#![deny(unsafe_code)]
#![deny(missing_docs)]

//! src/lib.rs
//!
//! Umbrella crate re-exporting the severity facade from `logging` and the
//! file and stream sinks from `logging-sink`.
//!
//! ```
//! use sevlog::{log_error, log_warning, Severity, SeverityLogger, TextLogger};
//!
//! let sink = TextLogger::plain(Vec::new());
//! let logger = SeverityLogger::new(Severity::Warning, &sink);
//! log_error!(logger, "{}", "This is an error log");
//! log_warning!(logger, "{}", "This is a warning log");
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "ERROR This is an error log\nWARNING This is a warning log\n");
//! ```

pub use logging::*;
pub use logging_sink::*;

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a small severity-filtering facade. Log calls are classified
//! into five ordered [`Severity`] levels, calls below a fixed threshold are
//! dropped, and surviving calls are written as one line starting with the
//! upper-case severity name. Formatting and writing are delegated to a
//! [`TextSink`] supplied by the caller; the `logging-sink` crate provides a
//! file and stream implementation.
//!
//! # Design
//!
//! - [`SeverityLogger`] pairs an immutable threshold with a sink handle. The
//!   sink may be owned, borrowed, boxed, or shared through an `Arc`, so several
//!   loggers with different thresholds can write to one destination.
//! - The [`Log`] trait carries the emission and query operations. Besides
//!   [`SeverityLogger`] it is implemented by `Option<L>` and [`NullLogger`],
//!   which never emit and report every severity as disabled. Components can
//!   therefore hold "no logger" without checking before each call.
//! - Messages are passed as [`std::fmt::Arguments`]. The `log_*!` macros
//!   check the threshold before building them, keeping expensive argument
//!   expressions unevaluated when the line would be suppressed.
//!
//! # Invariants
//!
//! - A call at severity `s` reaches the sink if and only if `s >= threshold`.
//! - Every enabled call results in exactly one synchronous sink write.
//! - Emitted lines begin with `DEBUG`, `INFO`, `WARNING`, `ERROR`, or `FATAL`
//!   followed by a single space.
//!
//! # Errors
//!
//! Emission never reports errors; write failures belong to the sink.
//! [`ParseSeverityError`] is returned when a severity name cannot be parsed.
//!
//! # Examples
//!
//! ```
//! use logging::{log_debug, log_info, Log, MemorySink, Severity, SeverityLogger};
//!
//! let sink = MemorySink::new();
//! let logger = SeverityLogger::new(Severity::Info, &sink);
//!
//! log_info!(logger, "{} + {} is equal to {}", 3, 5, 3 + 5);
//! log_debug!(logger, "{}", "Addition is complete");
//! assert!(!logger.is_debug_enabled());
//!
//! assert_eq!(sink.lines(), ["INFO 3 + 5 is equal to 8"]);
//! ```
//!
//! # See also
//!
//! - `logging-sink` for [`TextSink`] implementations backed by files and
//!   standard streams, including the default timestamped log file.

mod config;
mod logger;
mod macros;
mod severity;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use logger::{Log, NullLogger, SeverityLogger};
pub use severity::{ParseSeverityError, Severity};
pub use sink::{MemorySink, TextSink};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TRACING_TARGET, TracingSink};

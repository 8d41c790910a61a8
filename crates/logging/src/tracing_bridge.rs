//! crates/logging/src/tracing_bridge.rs
//! Bridge from severity-tagged lines to the tracing crate.
//!
//! [`TracingSink`] lets a [`SeverityLogger`](crate::SeverityLogger) feed an
//! application that already installed a tracing subscriber. Each record is
//! dispatched at the tracing level matching its severity; the message keeps
//! the leading severity token so the rendered text is identical to what a
//! file sink would receive.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{Log, Severity, SeverityLogger, TracingSink};
//!
//! tracing_subscriber::fmt::init();
//! let logger = SeverityLogger::new(Severity::Info, TracingSink::new());
//! logger.warning(format_args!("cache miss for {}", key));
//! ```

use std::fmt;

use tracing::Level;

use crate::severity::Severity;
use crate::sink::TextSink;

/// Target attached to every event emitted by [`TracingSink`].
pub const TRACING_TARGET: &str = "sevlog";

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => Self::DEBUG,
            Severity::Info => Self::INFO,
            Severity::Warning => Self::WARN,
            Severity::Error | Severity::Fatal => Self::ERROR,
        }
    }
}

/// [`TextSink`] that emits each line as a tracing event.
///
/// Plain [`write_line`](TextSink::write_line) calls carry no severity and are
/// emitted at `INFO`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TextSink for TracingSink {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        tracing::info!(target: TRACING_TARGET, "{}", args);
    }

    fn write_record(&self, severity: Severity, args: fmt::Arguments<'_>) {
        let token = severity.as_str();
        match severity {
            Severity::Debug => tracing::debug!(target: TRACING_TARGET, "{} {}", token, args),
            Severity::Info => tracing::info!(target: TRACING_TARGET, "{} {}", token, args),
            Severity::Warning => tracing::warn!(target: TRACING_TARGET, "{} {}", token, args),
            Severity::Error | Severity::Fatal => {
                tracing::error!(target: TRACING_TARGET, "{} {}", token, args);
            }
        }
    }
}

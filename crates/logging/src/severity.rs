//! crates/logging/src/severity.rs
//! Ordered severity levels and their textual names.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Importance of a log call, ordered from least to most serious.
///
/// The derived ordering is the only basis for filtering:
/// `Debug < Info < Warning < Error < Fatal`.
///
/// # Examples
///
/// ```
/// use logging::Severity;
///
/// assert!(Severity::Debug < Severity::Info);
/// assert!(Severity::Error.is_at_least(Severity::Warning));
/// assert_eq!(Severity::Warning.as_str(), "WARNING");
/// assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Severity {
    /// Diagnostic detail useful while developing.
    Debug,
    /// Normal operational messages.
    #[default]
    Info,
    /// Something unexpected that does not stop the current operation.
    Warning,
    /// An operation failed.
    Error,
    /// The component cannot continue. Logging at this level never exits.
    Fatal,
}

impl Severity {
    /// Every severity, least serious first.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    /// Upper-case token written in front of every emitted line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Reports whether `self` passes a logger configured with `threshold`.
    #[must_use]
    pub const fn is_at_least(self, threshold: Self) -> bool {
        self as u8 >= threshold as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown severity: {token}")]
pub struct ParseSeverityError {
    token: String,
}

impl ParseSeverityError {
    /// Returns the rejected token, trimmed of surrounding whitespace.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a severity name case-insensitively. `warn` is accepted as an
    /// alias for [`Severity::Warning`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseSeverityError {
                token: token.to_owned(),
            }),
        }
    }
}

//! crates/logging/src/config.rs
//! Threshold configuration resolved from tokens or the environment.

use crate::logger::SeverityLogger;
use crate::severity::{ParseSeverityError, Severity};

/// Settings used to build a [`SeverityLogger`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    /// Least serious severity that is emitted.
    pub threshold: Severity,
}

impl LoggerConfig {
    /// Creates a configuration with the given threshold.
    #[must_use]
    pub const fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    /// Replaces the threshold with the severity named by `token`
    /// (e.g. `"debug"`, `"WARN"`). The configuration is left unchanged on error.
    pub fn apply_threshold_token(&mut self, token: &str) -> Result<(), ParseSeverityError> {
        self.threshold = token.parse()?;
        Ok(())
    }

    /// Reads the threshold from the environment variable `var`.
    ///
    /// An unset or empty variable yields the default configuration.
    pub fn from_env(var: &str) -> Result<Self, ParseSeverityError> {
        Self::from_value(std::env::var(var).ok().as_deref())
    }

    /// Resolves a configuration from an optional threshold name.
    pub fn from_value(value: Option<&str>) -> Result<Self, ParseSeverityError> {
        let mut config = Self::default();
        if let Some(token) = value.filter(|token| !token.trim().is_empty()) {
            config.apply_threshold_token(token)?;
        }
        Ok(config)
    }

    /// Builds a logger writing to `sink` with this configuration.
    #[must_use]
    pub const fn build<S>(self, sink: S) -> SeverityLogger<S> {
        SeverityLogger::new(self.threshold, sink)
    }
}

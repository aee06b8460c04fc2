//! Logging configuration
//!
//! Logging is disabled by default. It can be enabled in code with
//! [`Logger::install`](crate::observability::Logger::install) or from the
//! environment:
//!
//! ```bash
//! ZHUZI_LOG=warn cargo test
//! ```
//!
//! `ZHUZI_LOG` accepts `off` or a minimum severity (`trace`, `info`, `warn`,
//! `error`, `fatal`). Unrecognized values leave logging disabled.

use crate::observability::Severity;

/// Environment variable read by [`LogConfig::from_env`]
pub const LOG_ENV_VAR: &str = "ZHUZI_LOG";

/// Configuration for structured logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether log lines are emitted at all.
    pub enabled: bool,
    /// Lowest severity that is emitted.
    pub min_severity: Severity,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_severity: Severity::Info,
        }
    }
}

impl LogConfig {
    /// Create config with logging enabled at INFO.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Create config with logging disabled.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Returns a copy with the given minimum severity.
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Parses a `ZHUZI_LOG` value.
    pub fn parse(value: &str) -> Self {
        match Severity::parse(value) {
            Some(severity) => Self::enabled().with_min_severity(severity),
            None => Self::disabled(),
        }
    }

    /// Reads the configuration from `ZHUZI_LOG`.
    pub fn from_env() -> Self {
        std::env::var(LOG_ENV_VAR)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    /// Check whether a line at `severity` is emitted.
    pub fn allows(&self, severity: Severity) -> bool {
        self.enabled && severity >= self.min_severity
    }
}

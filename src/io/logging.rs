//! Process-wide log subscriber for the command-line binary
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary so embedding applications keep control of their own output.

use crate::io::configuration::DEFAULT_LOG_LEVEL;
use tracing_subscriber::EnvFilter;

/// Logger configuration
///
/// `filter` follows the `EnvFilter` directive syntax (e.g. "info",
/// "alpona=debug"). `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit ANSI colors
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_LEVEL.to_string(),
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Resolve the effective filter
    ///
    /// Falls back to [`DEFAULT_LOG_LEVEL`] when the configured directive does
    /// not parse.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }
}

/// Install the global stderr subscriber
///
/// Returns `false` if a global subscriber was already installed, in which case
/// the existing one stays in place.
pub fn init_logging(config: &LoggingConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(false)
        .try_init()
        .is_ok()
}

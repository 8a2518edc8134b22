//! Tracing subscriber setup for the `staff-cost` binary.

use std::env::VarError;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "STAFF_COST_LOG";

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The log level or filter directive could not be parsed.
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        /// The rejected directive.
        value: String,
        /// The underlying parse error.
        #[source]
        source: ParseError,
    },

    /// The log filter environment variable is set but not valid unicode.
    #[error("{var} is not valid unicode")]
    NonUnicodeEnv {
        /// The variable name.
        var: &'static str,
    },

    /// A global subscriber was already installed.
    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the log filter from `STAFF_COST_LOG`, falling back to `log_level`
/// when the variable is unset.
///
/// A directive set in the environment that does not parse is an error.
pub fn env_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    match std::env::var(LOG_ENV_VAR) {
        Ok(directive) => filter_from(Some(&directive), log_level),
        Err(VarError::NotPresent) => filter_from(None, log_level),
        Err(VarError::NotUnicode(_)) => Err(TelemetryError::NonUnicodeEnv { var: LOG_ENV_VAR }),
    }
}

fn filter_from(env_directive: Option<&str>, log_level: &str) -> Result<EnvFilter, TelemetryError> {
    let directive = env_directive.unwrap_or(log_level);
    EnvFilter::try_new(directive).map_err(|source| TelemetryError::EnvFilter {
        value: directive.to_string(),
        source,
    })
}

/// Installs a compact fmt subscriber writing to stderr.
///
/// Logs go to stderr so report output on stdout stays clean.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let filter = env_filter(log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

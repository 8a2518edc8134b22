//! Error types for the staff cost engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Ingestion errors (bad pension flags, bad date ranges, malformed records)
//! are raised before any calculation runs; the calculation core itself only
//! fails on misuse, such as comparing misaligned scenarios.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the staff cost engine.
///
/// # Example
///
/// ```
/// use staff_cost_engine::error::EngineError;
///
/// let error = EngineError::InvalidPensionFlag {
///     employee: "Alice".to_string(),
///     value: "Maybe".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid pension flag 'Maybe' for employee 'Alice'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The pensionable field was neither affirmative, negative nor empty.
    #[error("Invalid pension flag '{value}' for employee '{employee}'")]
    InvalidPensionFlag {
        /// The employee the flag belongs to.
        employee: String,
        /// The raw value that could not be interpreted.
        value: String,
    },

    /// A role's stop date is not strictly after its start date.
    #[error("Invalid date range for '{record}': stop date {stop_date} is not after start date {start_date}")]
    InvalidDateRange {
        /// Identifies the record holding the role.
        record: String,
        /// The role start date.
        start_date: NaiveDate,
        /// The offending stop date.
        stop_date: NaiveDate,
    },

    /// Role or employee data was structurally incomplete or unparseable.
    #[error("Malformed record '{record}': {message}")]
    MalformedRecord {
        /// Identifies the record (employee name or row number).
        record: String,
        /// A description of what was wrong.
        message: String,
    },

    /// Two scenarios could not be compared position by position.
    #[error("Scenarios are not aligned: {message}")]
    ScenarioAlignment {
        /// A description of the mismatch.
        message: String,
    },

    /// A scenario was read before `evaluate()` was called on it.
    #[error("Scenario '{scenario}' has not been evaluated")]
    ScenarioNotEvaluated {
        /// The scenario name.
        scenario: String,
    },

    /// Role hours were accumulated for a category that was never seeded.
    #[error("Role category '{category}' was not seeded before evaluation")]
    UnseededCategory {
        /// The unknown category label.
        category: String,
    },

    /// Policy rates failed validation.
    #[error("Invalid policy: {message}")]
    InvalidPolicy {
        /// A description of the invalid setting.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An input file could not be read.
    #[error("Failed to read '{path}': {message}")]
    Io {
        /// The path being read.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },
}

impl EngineError {
    /// Re-labels a record-level error with the record it was found in.
    ///
    /// Roles are validated before the ingestion layer knows which employee
    /// they belong to; this attaches the employee name afterwards.
    pub fn in_record(self, record: impl Into<String>) -> Self {
        match self {
            EngineError::InvalidDateRange {
                start_date,
                stop_date,
                ..
            } => EngineError::InvalidDateRange {
                record: record.into(),
                start_date,
                stop_date,
            },
            EngineError::MalformedRecord { message, .. } => EngineError::MalformedRecord {
                record: record.into(),
                message,
            },
            other => other,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Response types for the staff cost API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, code) = match &error {
            EngineError::InvalidPensionFlag { .. } => (StatusCode::BAD_REQUEST, "INVALID_PENSION_FLAG"),
            EngineError::InvalidDateRange { .. } => (StatusCode::BAD_REQUEST, "INVALID_DATE_RANGE"),
            EngineError::MalformedRecord { .. } => (StatusCode::BAD_REQUEST, "MALFORMED_RECORD"),
            EngineError::ScenarioAlignment { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "SCENARIO_ALIGNMENT")
            }
            EngineError::ScenarioNotEvaluated { .. } | EngineError::UnseededCategory { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CALCULATION_ERROR")
            }
            EngineError::InvalidPolicy { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::Io { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
        };

        // The record, scenario or category the error concerns
        let subject = match error {
            EngineError::InvalidPensionFlag { employee, .. } => Some(employee),
            EngineError::InvalidDateRange { record, .. }
            | EngineError::MalformedRecord { record, .. } => Some(record),
            EngineError::ScenarioNotEvaluated { scenario } => Some(scenario),
            EngineError::UnseededCategory { category } => Some(category),
            _ => None,
        };

        let error = match subject {
            Some(subject) => ApiError::with_details(code, message, subject),
            None => ApiError::new(code, message),
        };

        ApiErrorResponse { status, error }
    }
}

//! Response types for the eligibility API.
//!
//! This module defines the success envelope and the error response structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AuditTrace, EligibilityResult};

/// Successful response for an eligibility check.
///
/// The result fields are inlined at the top level; the remaining fields
/// identify the evaluation and explain it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    /// Unique identifier of this evaluation.
    pub evaluation_id: Uuid,
    /// When the evaluation ran.
    pub evaluated_at: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// Version of the threshold tables used.
    pub program_version: String,
    /// The classification outcome.
    #[serde(flatten)]
    pub result: EligibilityResult,
    /// Applicant-facing name of the group.
    pub group_label: String,
    /// Applicant-facing explanation of the reason code.
    pub reason: String,
    /// The rules applied, in order.
    pub audit_trace: AuditTrace,
}

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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let error = match error {
            EngineError::ConfigNotFound { path } => ApiError::with_details(
                "CONFIG_ERROR",
                "Configuration error",
                format!("Configuration file not found: {}", path),
            ),
            EngineError::ConfigParseError { path, message } => ApiError::with_details(
                "CONFIG_ERROR",
                "Configuration parse error",
                format!("Failed to parse {}: {}", path, message),
            ),
            EngineError::ConfigInvalid { path, message } => ApiError::with_details(
                "CONFIG_ERROR",
                "Invalid configuration",
                format!("{}: {}", path, message),
            ),
            err @ EngineError::InvalidHouseholdShape { .. } => {
                ApiError::with_details("EVALUATION_ERROR", "Evaluation failed", err.to_string())
            }
        };

        // Configuration errors are never the caller's fault.
        ApiErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

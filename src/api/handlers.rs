//! HTTP request handlers for the eligibility API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{Evaluation, evaluate};
use crate::models::HouseholdProfile;

use super::presentation::{group_label, localized_reason};
use super::request::EligibilityRequest;
use super::response::{ApiError, ApiErrorResponse, EligibilityResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/check-eligibility", post(check_eligibility_handler))
        .with_state(state)
}

/// Handler for GET / endpoint.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": "Eligibility Check API is running",
        "program": state.config().program().code,
        "programVersion": state.config().program().version,
    }))
}

/// Handler for POST /api/check-eligibility endpoint.
///
/// Decodes the household, runs the engine, and returns the classification.
/// An ineligible household is a 200; only configuration failures are 500.
async fn check_eligibility_handler(
    State(state): State<AppState>,
    payload: Result<Json<EligibilityRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing eligibility request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let profile: HouseholdProfile = request.into();
    let config = state.config();

    let start_time = Instant::now();
    match evaluate(&profile, config.config()) {
        Ok(Evaluation {
            result,
            audit_trace,
        }) => {
            info!(
                correlation_id = %correlation_id,
                adult_count = profile.adult_count,
                child_count = profile.child_count,
                group = ?result.group,
                reason_code = %result.reason_code,
                duration_us = start_time.elapsed().as_micros(),
                "Eligibility evaluated"
            );
            let response = EligibilityResponse {
                evaluation_id: correlation_id,
                evaluated_at: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                program_version: config.program().version.clone(),
                group_label: group_label(result.group).to_string(),
                reason: localized_reason(result.reason_code).to_string(),
                result,
                audit_trace,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Eligibility evaluation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

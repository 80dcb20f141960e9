//! HTTP API module for the eligibility engine.
//!
//! This module decodes eligibility requests, runs the engine, and encodes the
//! result. Every classification outcome, including `Ineligible`, is a 200.

mod handlers;
mod presentation;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use presentation::{group_label, localized_reason};
pub use request::EligibilityRequest;
pub use response::{ApiError, ApiErrorResponse, EligibilityResponse};
pub use state::AppState;

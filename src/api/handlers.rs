//! HTTP request handlers for the experience mod audit engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Claim, ClassCodeExposure, PolicyInfo};
use crate::rating::run_full_audit;

use super::request::AuditRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/audit", post(audit_handler))
        .with_state(state)
}

/// Handler for POST /audit endpoint.
///
/// Accepts a full audit request and returns the audit report.
async fn audit_handler(
    State(state): State<AppState>,
    payload: Result<Json<AuditRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking.
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing audit request");

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
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let policy: PolicyInfo = request.policy.into();
    let exposures: Vec<ClassCodeExposure> =
        request.exposures.into_iter().map(Into::into).collect();
    let claims: Vec<Claim> = request.claims.into_iter().map(Into::into).collect();

    match run_full_audit(
        &policy,
        &exposures,
        &claims,
        request.valuation_date,
        state.registry(),
    ) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                policy_number = %report.policy_number,
                current_mod = %report.current_mod,
                corrected_mod = %report.corrected_mod,
                leaks_found = report.total_leaks_found,
                "Audit completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Audit failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

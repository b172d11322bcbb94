//! Response types for the experience mod audit engine API.
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
        match error {
            EngineError::StateNotSupported { state, supported } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "STATE_NOT_SUPPORTED",
                    format!("State {} is not supported", state),
                    format!("Supported states: {}", supported.join(", ")),
                ),
            },
            EngineError::BureauNotImplemented { state, bureau } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "BUREAU_NOT_IMPLEMENTED",
                    format!("W/B calculation not implemented for {}", state),
                    format!(
                        "{} uses the {} formula set, which this engine does not rate",
                        state, bureau
                    ),
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Skipped when None.
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_state_not_supported_maps_to_bad_request() {
        let engine_error = EngineError::StateNotSupported {
            state: "TX".to_string(),
            supported: vec!["CA".to_string(), "GA".to_string()],
        };
        let api_error: ApiErrorResponse = engine_error.into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "STATE_NOT_SUPPORTED");
        assert!(
            api_error
                .error
                .details
                .as_deref()
                .unwrap()
                .contains("CA, GA")
        );
    }

    #[test]
    fn test_bureau_not_implemented_maps_to_bad_request() {
        let engine_error = EngineError::BureauNotImplemented {
            state: "CA".to_string(),
            bureau: "WCIRB".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "BUREAU_NOT_IMPLEMENTED");
    }

    #[test]
    fn test_config_errors_map_to_internal_server_error() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}

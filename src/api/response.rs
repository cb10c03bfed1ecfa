//! Response types for the compensation estimation API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{BreakdownLine, Estimate};

/// The response body for a successful `/estimate` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The estimated monthly payment, 2 decimal places.
    pub final_amount: Decimal,
    /// Ordered breakdown line items, rendered verbatim by consumers.
    pub breakdown: Vec<BreakdownLine>,
    /// Ordered advisory notes.
    pub notes: Vec<String>,
}

impl EstimateResponse {
    /// Wraps a calculated estimate with per-call metadata.
    pub fn from_estimate(estimate: Estimate) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            final_amount: estimate.final_amount,
            breakdown: estimate.breakdown,
            notes: estimate.notes,
        }
    }
}

/// The response body for a `/tool-call` invocation.
///
/// Carries the complete, already-formatted chat reply. Calculation errors
/// also arrive here (with the error message as the entire text), because
/// to the conversational driver they are a reply, not a transport failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResponse {
    /// The full text the driver displays.
    pub text: String,
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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown-tool error response.
    pub fn unknown_tool(name: &str) -> Self {
        Self::with_details(
            "UNKNOWN_TOOL",
            format!("Unknown tool: {}", name),
            "The only supported tool is 'calculateDisabilityCompensation'",
        )
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
            ref err @ EngineError::InvalidRating { rating } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RATING",
                    err.to_string(),
                    format!("Rating {} is not a multiple of 10 between 10 and 100", rating),
                ),
            },
            ref err @ EngineError::RateDataMissing { rating } => ApiErrorResponse {
                // Not user-correctable: the table is incomplete.
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RATE_DATA_MISSING",
                    err.to_string(),
                    format!("No rate table entry exists for the {}% tier", rating),
                ),
            },
            EngineError::SlotOutOfOrder { expected, got } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "PROTOCOL_ERROR",
                    format!("Slot '{}' provided out of order", got),
                    format!("The session is awaiting '{}'", expected),
                ),
            },
            EngineError::SessionNotReady { state } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "PROTOCOL_ERROR",
                    "Session is not ready to invoke the calculator",
                    format!("Current session state: {}", state),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_rating_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidRating { rating: 45 }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_RATING");
        assert!(api_error.error.message.contains("between 10% and 100%"));
    }

    #[test]
    fn test_rate_data_missing_maps_to_internal_error() {
        let api_error: ApiErrorResponse = EngineError::RateDataMissing { rating: 70 }.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "RATE_DATA_MISSING");
    }

    #[test]
    fn test_unknown_tool_error() {
        let error = ApiError::unknown_tool("summonDragon");
        assert_eq!(error.code, "UNKNOWN_TOOL");
        assert!(error.message.contains("summonDragon"));
    }

    #[test]
    fn test_estimate_response_wraps_estimate() {
        let estimate = Estimate {
            final_amount: Decimal::from_str("171.23").unwrap(),
            breakdown: vec![],
            notes: vec![],
        };
        let response = EstimateResponse::from_estimate(estimate);
        assert_eq!(response.final_amount, Decimal::from_str("171.23").unwrap());
        assert_eq!(response.engine_version, env!("CARGO_PKG_VERSION"));
    }
}

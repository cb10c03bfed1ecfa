//! HTTP request handlers for the compensation estimation API.
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

use crate::calculation::calculate;
use crate::models::CompensationRequest;
use crate::protocol::{coerce::coerce_request, format_estimate};

use super::request::{CALCULATE_TOOL_NAME, ToolCallRequest};
use super::response::{ApiError, ApiErrorResponse, EstimateResponse, ToolCallResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate_handler))
        .route("/tool-call", post(tool_call_handler))
        .with_state(state)
}

/// Handler for POST /estimate.
///
/// Accepts a typed compensation request and returns the calculated
/// estimate, or a typed error for invalid input.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompensationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match calculate(&request, state.table()) {
        Ok(estimate) => {
            info!(
                correlation_id = %correlation_id,
                rating = request.rating,
                final_amount = %estimate.final_amount,
                "Estimate calculated"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(EstimateResponse::from_estimate(estimate)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                rating = request.rating,
                error = %err,
                "Estimate failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /tool-call.
///
/// Accepts a function call with loosely-typed arguments, coerces them with
/// the documented rules, and returns the complete formatted chat reply.
/// Calculation errors are a reply too: HTTP 200 with the user-facing error
/// string as the entire text, so the driver surfaces it verbatim.
async fn tool_call_handler(
    State(state): State<AppState>,
    payload: Result<Json<ToolCallRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tool call");

    let tool_call = match parse_payload(payload, correlation_id) {
        Ok(tool_call) => tool_call,
        Err(response) => return response,
    };

    if tool_call.name != CALCULATE_TOOL_NAME {
        warn!(
            correlation_id = %correlation_id,
            tool = %tool_call.name,
            "Unknown tool requested"
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::unknown_tool(&tool_call.name)),
        )
            .into_response();
    }

    let request = coerce_request(&tool_call.args);
    let text = match calculate(&request, state.table()) {
        Ok(estimate) => {
            info!(
                correlation_id = %correlation_id,
                rating = request.rating,
                final_amount = %estimate.final_amount,
                "Tool call calculated"
            );
            format_estimate(&estimate)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                rating = request.rating,
                error = %err,
                "Tool call returned a calculation error"
            );
            err.to_string()
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ToolCallResponse { text }),
    )
        .into_response()
}

/// Turns a JSON extraction rejection into a structured 400 response.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, axum::response::Response> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed serde error.
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
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

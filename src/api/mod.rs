//! HTTP API module for the compensation estimation engine.
//!
//! This module provides the REST endpoints: a typed `/estimate` endpoint
//! and the loosely-typed `/tool-call` endpoint that accepts
//! function-calling arguments from a conversational driver.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CALCULATE_TOOL_NAME, ToolCallRequest};
pub use response::{ApiError, EstimateResponse, ToolCallResponse};
pub use state::AppState;

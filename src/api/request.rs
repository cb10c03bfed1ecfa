//! Request types for the compensation estimation API.
//!
//! The typed `/estimate` endpoint deserializes straight into
//! [`crate::models::CompensationRequest`]; only the loosely-typed tool-call
//! boundary needs its own wire shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The name of the compensation calculation tool exposed to the model.
pub const CALCULATE_TOOL_NAME: &str = "calculateDisabilityCompensation";

/// A function-call request as produced by the hosted model.
///
/// The `args` object is free-form JSON; its fields are coerced with the
/// rules in [`crate::protocol::coerce`] rather than deserialized strictly,
/// so a model emitting `"rating": "70%"` still produces a calculation
/// instead of a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// The tool being invoked.
    pub name: String,
    /// The loosely-typed tool arguments.
    #[serde(default)]
    pub args: Value,
}

//! Coercion of loosely-typed tool-call arguments.
//!
//! Large-language-model function calls deliver arguments as free-form JSON:
//! a rating may arrive as `70`, `"70"`, or `"70%"`, a boolean as `true`,
//! `"Yes"`, or be missing entirely. The rules here are fully enumerated so
//! the behavior is deterministic and testable independent of any model's
//! output quirks. Getting this wrong silently corrupts the calculation, so
//! nothing in this module guesses: every fallback lands on a value that
//! either fails validation deterministically (rating 0) or is the documented
//! default (false, 0).

use serde_json::Value;

use crate::models::CompensationRequest;

/// Coerces a complete tool-call argument object into a request.
///
/// Absent fields take their documented defaults: booleans `false`, counts
/// `0`, rating `0` (which then fails validation rather than guessing).
///
/// # Example
///
/// ```
/// use comp_engine::protocol::coerce::coerce_request;
/// use serde_json::json;
///
/// let args = json!({"rating": "70%", "hasSpouse": "Yes"});
/// let request = coerce_request(&args);
/// assert_eq!(request.rating, 70);
/// assert!(request.has_spouse);
/// assert_eq!(request.parents_count, 0);
/// ```
pub fn coerce_request(args: &Value) -> CompensationRequest {
    CompensationRequest {
        rating: coerce_rating(args.get("rating")),
        has_spouse: coerce_bool(args.get("hasSpouse")),
        children_count: coerce_count(args.get("childrenCount")),
        parents_count: coerce_count(args.get("parentsCount")),
        spouse_needs_aid: coerce_bool(args.get("spouseNeedsAid")),
    }
}

/// Coerces a rating argument to an integer.
///
/// The value is stringified, all non-digit characters are stripped, and the
/// remainder is parsed. An empty or unparseable remainder coerces to 0,
/// which fails rating validation deterministically instead of panicking.
pub fn coerce_rating(value: Option<&Value>) -> i64 {
    let digits: String = value
        .map(stringify)
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    digits.parse().unwrap_or(0)
}

/// Coerces a boolean-like argument.
///
/// The lower-cased string form must be `"true"` or `"yes"`; anything else,
/// including `"false"`, `"no"`, empty, and absent, coerces to false.
pub fn coerce_bool(value: Option<&Value>) -> bool {
    let text = value.map(stringify).unwrap_or_default().to_lowercase();
    matches!(text.as_str(), "true" | "yes")
}

/// Coerces a count argument to a non-negative integer.
///
/// Numbers truncate toward zero, numeric strings parse, and anything else
/// (including absent values and negatives) coerces to 0.
pub fn coerce_count(value: Option<&Value>) -> u32 {
    let count = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(|f| f.trunc() as i64)
            .unwrap_or(0),
        Some(Value::Bool(true)) => 1,
        _ => 0,
    };

    count.max(0) as u32
}

/// The string form used for rating and boolean coercion.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

//! Rating validation.

use crate::error::{EngineError, EngineResult};

/// Validates a disability rating and narrows it for table lookup.
///
/// A valid rating is a multiple of 10 within [10, 100]. Anything else is an
/// [`EngineError::InvalidRating`]; out-of-range values are never clamped.
///
/// # Example
///
/// ```
/// use comp_engine::calculation::validate_rating;
///
/// assert_eq!(validate_rating(70).unwrap(), 70);
/// assert!(validate_rating(45).is_err());
/// assert!(validate_rating(105).is_err());
/// ```
pub fn validate_rating(rating: i64) -> EngineResult<u32> {
    if !(10..=100).contains(&rating) || rating % 10 != 0 {
        return Err(EngineError::InvalidRating { rating });
    }
    Ok(rating as u32)
}

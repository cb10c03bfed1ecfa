//! Input models for a compensation estimate.

use serde::{Deserialize, Serialize};

/// The validated parameter set for one compensation calculation.
///
/// A request is created per calculation call; the calculator holds no state
/// between invocations. `rating` is kept wide (`i64`) so out-of-range values
/// reach validation instead of failing deserialization; validation rejects
/// anything outside 10–100 or off the 10-step grid.
///
/// # Example
///
/// ```
/// use comp_engine::models::CompensationRequest;
///
/// let request = CompensationRequest {
///     rating: 70,
///     has_spouse: true,
///     children_count: 2,
///     parents_count: 0,
///     spouse_needs_aid: false,
/// };
/// assert!(request.has_dependents());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationRequest {
    /// The disability rating as a whole percentage (e.g., 70 for 70%).
    pub rating: i64,
    /// Whether the veteran has a dependent spouse.
    pub has_spouse: bool,
    /// The number of dependent children.
    #[serde(default)]
    pub children_count: u32,
    /// The number of dependent parents (behavior saturates at 2).
    #[serde(default)]
    pub parents_count: u32,
    /// Whether the dependent spouse qualifies for Aid and Attendance.
    /// Meaningful only when `has_spouse` is true; defaults to false.
    #[serde(default)]
    pub spouse_needs_aid: bool,
}

impl CompensationRequest {
    /// Returns true when any dependent field is set.
    ///
    /// Used on flat tiers to decide whether to attach the
    /// dependents-don't-change-this-rate note.
    pub fn has_dependents(&self) -> bool {
        self.has_spouse || self.children_count > 0 || self.parents_count > 0
    }

    /// Returns the parent-count bucket for base rate selection.
    pub fn parent_bucket(&self) -> ParentBucket {
        ParentBucket::from_count(self.parents_count)
    }
}

/// The parent-count axis of the base rate lookup.
///
/// The published rate schedule only distinguishes 0, 1, and 2-or-more
/// dependent parents, so the count saturates at two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentBucket {
    /// No dependent parents.
    None,
    /// One dependent parent.
    One,
    /// Two or more dependent parents.
    TwoOrMore,
}

impl ParentBucket {
    /// Buckets a raw parent count.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::None,
            1 => Self::One,
            _ => Self::TwoOrMore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(children: u32, parents: u32, has_spouse: bool) -> CompensationRequest {
        CompensationRequest {
            rating: 70,
            has_spouse,
            children_count: children,
            parents_count: parents,
            spouse_needs_aid: false,
        }
    }

    #[test]
    fn test_has_dependents() {
        assert!(!request(0, 0, false).has_dependents());
        assert!(request(0, 0, true).has_dependents());
        assert!(request(1, 0, false).has_dependents());
        assert!(request(0, 1, false).has_dependents());
    }

    #[test]
    fn test_parent_bucket_saturates_at_two() {
        assert_eq!(ParentBucket::from_count(0), ParentBucket::None);
        assert_eq!(ParentBucket::from_count(1), ParentBucket::One);
        assert_eq!(ParentBucket::from_count(2), ParentBucket::TwoOrMore);
        assert_eq!(ParentBucket::from_count(3), ParentBucket::TwoOrMore);
        assert_eq!(ParentBucket::from_count(17), ParentBucket::TwoOrMore);
    }

    #[test]
    fn test_deserialization_applies_defaults() {
        let json = r#"{"rating": 50, "has_spouse": false}"#;
        let request: CompensationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.children_count, 0);
        assert_eq!(request.parents_count, 0);
        assert!(!request.spouse_needs_aid);
    }

    #[test]
    fn test_deserialization_full_request() {
        let json = r#"{
            "rating": 100,
            "has_spouse": true,
            "children_count": 1,
            "parents_count": 1,
            "spouse_needs_aid": true
        }"#;
        let request: CompensationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.rating, 100);
        assert!(request.has_spouse);
        assert_eq!(request.children_count, 1);
        assert_eq!(request.parents_count, 1);
        assert!(request.spouse_needs_aid);
    }

    #[test]
    fn test_negative_rating_deserializes_for_validation() {
        // Out-of-range ratings must reach validation, not fail parsing.
        let json = r#"{"rating": -10, "has_spouse": false}"#;
        let request: CompensationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.rating, -10);
    }
}

//! Flat-tier handling for 10% and 20% ratings.
//!
//! These two tiers pay a fixed monthly amount; dependents never change it.
//! Supplying dependents anyway is informational, not an error: the line is
//! built from the flat amount alone and a note explains the policy.

use rust_decimal::Decimal;

use crate::models::{BreakdownLine, CompensationRequest, EstimateComponent};

/// The result of a flat-tier calculation.
#[derive(Debug, Clone)]
pub struct FlatRateResult {
    /// The breakdown line for the flat amount.
    pub line: BreakdownLine,
    /// A note attached when dependents were supplied but ignored.
    pub note: Option<String>,
}

/// Builds the breakdown line (and optional note) for a flat-tier rating.
///
/// # Arguments
///
/// * `rating` - The validated rating (10 or 20)
/// * `amount` - The flat monthly amount from the rate table
/// * `request` - The full request, used only to detect supplied dependents
pub fn calculate_flat_rate(
    rating: u32,
    amount: Decimal,
    request: &CompensationRequest,
) -> FlatRateResult {
    let line = BreakdownLine {
        component: EstimateComponent::FlatRate,
        amount,
        text: format!("Base rate for {}%: ${:.2}", rating, amount),
    };

    let note = request.has_dependents().then(|| {
        format!(
            "For a {}% rating, the rate is fixed and does not increase for dependents.",
            rating
        )
    });

    FlatRateResult { line, note }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn request(has_spouse: bool, children: u32, parents: u32) -> CompensationRequest {
        CompensationRequest {
            rating: 10,
            has_spouse,
            children_count: children,
            parents_count: parents,
            spouse_needs_aid: false,
        }
    }

    /// FR-001: line names the rating and amount
    #[test]
    fn test_line_names_rating_and_amount() {
        let result = calculate_flat_rate(10, dec("171.23"), &request(false, 0, 0));
        assert_eq!(result.line.text, "Base rate for 10%: $171.23");
        assert_eq!(result.line.amount, dec("171.23"));
        assert_eq!(result.line.component, EstimateComponent::FlatRate);
    }

    /// FR-002: no note without dependents
    #[test]
    fn test_no_note_without_dependents() {
        let result = calculate_flat_rate(20, dec("338.49"), &request(false, 0, 0));
        assert!(result.note.is_none());
    }

    /// FR-003: note attached when dependents supplied
    #[test]
    fn test_note_attached_when_dependents_supplied() {
        for req in [request(true, 0, 0), request(false, 2, 0), request(false, 0, 1)] {
            let result = calculate_flat_rate(10, dec("171.23"), &req);
            assert_eq!(
                result.note.as_deref(),
                Some("For a 10% rating, the rate is fixed and does not increase for dependents.")
            );
        }
    }

    /// FR-004: dependents never change the line amount
    #[test]
    fn test_dependents_do_not_change_amount() {
        let alone = calculate_flat_rate(20, dec("338.49"), &request(false, 0, 0));
        let crowded = calculate_flat_rate(20, dec("338.49"), &request(true, 3, 2));
        assert_eq!(alone.line.amount, crowded.line.amount);
        assert_eq!(alone.line.text, crowded.line.text);
    }
}

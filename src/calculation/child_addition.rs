//! Dependent-children addition for dependent-keyed tiers.

use rust_decimal::Decimal;

use crate::config::RateEntry;
use crate::models::{BreakdownLine, EstimateComponent};

/// The result of a child addition calculation.
#[derive(Debug, Clone)]
pub struct ChildAdditionResult {
    /// The total addition for all dependent children.
    pub amount: Decimal,
    /// The breakdown line with the child count and dollar addition.
    pub line: BreakdownLine,
}

/// Calculates the addition for dependent children.
///
/// The first child adds `add_for_first_child`; every further child adds
/// `add_for_additional_child`. Returns `None` when there are no children,
/// in which case no breakdown line is emitted.
pub fn calculate_child_addition(
    entry: &RateEntry,
    children_count: u32,
) -> Option<ChildAdditionResult> {
    if children_count == 0 {
        return None;
    }

    let additional = Decimal::from(children_count - 1) * entry.add_for_additional_child;
    let amount = entry.add_for_first_child + additional;

    Some(ChildAdditionResult {
        amount,
        line: BreakdownLine {
            component: EstimateComponent::ChildAddition,
            amount,
            text: format!("Add for {} child(ren): +${:.2}", children_count, amount),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry() -> RateEntry {
        RateEntry {
            veteran_only: dec("1716.28"),
            veteran_with_spouse: dec("1838.28"),
            veteran_with_spouse_and_one_parent: dec("1947.28"),
            veteran_with_spouse_and_two_parents: dec("2056.28"),
            veteran_with_one_parent: dec("1825.28"),
            veteran_with_two_parents: dec("1934.28"),
            add_for_first_child: dec("96.00"),
            add_for_additional_child: dec("82.00"),
            add_for_spouse_aid_and_attendance: dec("150.00"),
        }
    }

    /// CH-001: zero children emits nothing
    #[test]
    fn test_zero_children_returns_none() {
        assert!(calculate_child_addition(&entry(), 0).is_none());
    }

    /// CH-002: one child adds only the first-child amount
    #[test]
    fn test_one_child() {
        let result = calculate_child_addition(&entry(), 1).unwrap();
        assert_eq!(result.amount, dec("96.00"));
        assert_eq!(result.line.text, "Add for 1 child(ren): +$96.00");
    }

    /// CH-003: each further child adds the additional-child amount
    #[test]
    fn test_two_children() {
        let result = calculate_child_addition(&entry(), 2).unwrap();
        assert_eq!(result.amount, dec("178.00"));
        assert_eq!(result.line.text, "Add for 2 child(ren): +$178.00");
    }

    /// CH-004: addition is linear in the child count past the first
    #[test]
    fn test_addition_is_linear_past_first_child() {
        let per_additional = dec("82.00");
        for count in 1..6u32 {
            let current = calculate_child_addition(&entry(), count).unwrap().amount;
            let next = calculate_child_addition(&entry(), count + 1).unwrap().amount;
            assert_eq!(next - current, per_additional);
        }
    }

    #[test]
    fn test_line_component_is_child_addition() {
        let result = calculate_child_addition(&entry(), 3).unwrap();
        assert_eq!(result.line.component, EstimateComponent::ChildAddition);
        assert_eq!(result.line.amount, result.amount);
    }
}

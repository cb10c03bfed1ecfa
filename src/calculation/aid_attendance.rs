//! Spouse Aid and Attendance addition.

use rust_decimal::Decimal;

use crate::config::RateEntry;
use crate::models::{BreakdownLine, EstimateComponent};

/// The result of an Aid and Attendance calculation.
#[derive(Debug, Clone)]
pub struct AidAndAttendanceResult {
    /// The addition amount.
    pub amount: Decimal,
    /// The breakdown line for the addition.
    pub line: BreakdownLine,
}

/// Calculates the spouse Aid and Attendance addition.
///
/// The addition applies only when the veteran has a dependent spouse and
/// that spouse qualifies for Aid and Attendance; `spouse_needs_aid` without
/// a spouse contributes nothing. Returns `None` when the addition does not
/// apply.
pub fn calculate_spouse_aid(
    entry: &RateEntry,
    has_spouse: bool,
    spouse_needs_aid: bool,
) -> Option<AidAndAttendanceResult> {
    if !(has_spouse && spouse_needs_aid) {
        return None;
    }

    let amount = entry.add_for_spouse_aid_and_attendance;
    Some(AidAndAttendanceResult {
        amount,
        line: BreakdownLine {
            component: EstimateComponent::SpouseAidAndAttendance,
            amount,
            text: format!("Add for spouse needing Aid and Attendance: +${:.2}", amount),
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
            veteran_only: dec("3737.85"),
            veteran_with_spouse: dec("3946.25"),
            veteran_with_spouse_and_one_parent: dec("4124.71"),
            veteran_with_spouse_and_two_parents: dec("4303.17"),
            veteran_with_one_parent: dec("3916.31"),
            veteran_with_two_parents: dec("4094.77"),
            add_for_first_child: dec("138.48"),
            add_for_additional_child: dec("118.00"),
            add_for_spouse_aid_and_attendance: dec("216.48"),
        }
    }

    /// AA-001: applies with spouse and aid flag
    #[test]
    fn test_applies_with_spouse_and_aid() {
        let result = calculate_spouse_aid(&entry(), true, true).unwrap();
        assert_eq!(result.amount, dec("216.48"));
        assert_eq!(
            result.line.text,
            "Add for spouse needing Aid and Attendance: +$216.48"
        );
        assert_eq!(
            result.line.component,
            EstimateComponent::SpouseAidAndAttendance
        );
    }

    /// AA-002: no spouse means no addition, even with the aid flag set
    #[test]
    fn test_aid_without_spouse_contributes_nothing() {
        assert!(calculate_spouse_aid(&entry(), false, true).is_none());
    }

    /// AA-003: spouse without the aid flag contributes nothing
    #[test]
    fn test_spouse_without_aid_contributes_nothing() {
        assert!(calculate_spouse_aid(&entry(), true, false).is_none());
    }

    #[test]
    fn test_neither_flag_contributes_nothing() {
        assert!(calculate_spouse_aid(&entry(), false, false).is_none());
    }
}

//! Output models for a compensation estimate.
//!
//! This module contains the [`Estimate`] type returned by a successful
//! calculation: the final monthly amount, the ordered breakdown line items,
//! and the advisory notes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies which component of the estimate a breakdown line covers.
///
/// # Example
///
/// ```
/// use comp_engine::models::EstimateComponent;
///
/// let component = EstimateComponent::BaseRate;
/// assert_eq!(format!("{:?}", component), "BaseRate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateComponent {
    /// The flat amount for a 10% or 20% rating.
    FlatRate,
    /// The base amount selected by spouse presence and parent count.
    BaseRate,
    /// The addition for dependent children.
    ChildAddition,
    /// The addition for a spouse who qualifies for Aid and Attendance.
    SpouseAidAndAttendance,
}

/// A single line item in the estimate breakdown.
///
/// The `text` field is the exact string the presentation layer renders; the
/// typed `component` and `amount` exist so consumers never have to parse
/// the text to recover the number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// Which component of the estimate this line covers.
    pub component: EstimateComponent,
    /// The dollar amount this line contributes to the total.
    pub amount: Decimal,
    /// The rendered line, displayed verbatim.
    pub text: String,
}

/// The result of a successful compensation calculation.
///
/// An estimate is fully determined by its request: repeating a calculation
/// with identical input produces an identical estimate. Breakdown lines
/// appear in contract order (base, then child addition, then Aid and
/// Attendance) and are rendered verbatim by consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    /// The estimated monthly payment, rounded to 2 decimal places.
    pub final_amount: Decimal,
    /// Ordered line items that sum to `final_amount`.
    pub breakdown: Vec<BreakdownLine>,
    /// Ordered advisory notes; always ends with the estimate disclaimer.
    pub notes: Vec<String>,
}

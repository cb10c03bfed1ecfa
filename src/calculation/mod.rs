//! Calculation logic for the compensation estimation engine.
//!
//! This module contains the calculation functions for estimating the monthly
//! payment: rating validation, flat-tier handling for 10% and 20% ratings,
//! base rate selection across the spouse/parent axes, the dependent-children
//! addition, the spouse Aid and Attendance addition, and the top-level
//! [`calculate`] entry point that assembles an [`crate::models::Estimate`].

mod aid_attendance;
mod base_rate;
mod child_addition;
mod estimate;
mod flat_rate;
mod validate;

pub use aid_attendance::{AidAndAttendanceResult, calculate_spouse_aid};
pub use base_rate::{BaseRateResult, select_base_rate};
pub use child_addition::{ChildAdditionResult, calculate_child_addition};
pub use estimate::{ESTIMATE_DISCLAIMER, calculate};
pub use flat_rate::{FlatRateResult, calculate_flat_rate};
pub use validate::validate_rating;

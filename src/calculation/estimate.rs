//! The top-level compensation calculation.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{RateLookup, RateTable};
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationRequest, Estimate};

use super::aid_attendance::calculate_spouse_aid;
use super::base_rate::select_base_rate;
use super::child_addition::calculate_child_addition;
use super::flat_rate::calculate_flat_rate;
use super::validate::validate_rating;

/// The disclaimer appended to every successful estimate.
pub const ESTIMATE_DISCLAIMER: &str = "This is an estimate based on the 2024 VA \
compensation rates. Please verify all amounts with the VA.";

/// Calculates the estimated monthly compensation for a request.
///
/// This is a pure function: no side effects, no shared state, safe to call
/// concurrently, and identical input always yields an identical estimate.
///
/// The calculation proceeds in the contract order:
/// 1. Validate the rating (multiple of 10 in [10, 100]), short-circuiting
///    with [`EngineError::InvalidRating`].
/// 2. Look up the tier; a validated rating with no entry is
///    [`EngineError::RateDataMissing`] (a partial table, not user error).
/// 3. Flat tiers (10%, 20%) pay the flat amount; supplied dependents only
///    add an explanatory note.
/// 4. Other tiers select the base across the spouse/parent axes, then add
///    children and spouse Aid and Attendance when applicable.
/// 5. The total is rounded to 2 decimal places and the estimate disclaimer
///    is always appended.
///
/// Breakdown lines always appear as: base line, then child addition (if
/// any), then Aid and Attendance (if any). Consumers render the sequence
/// verbatim.
///
/// # Example
///
/// ```
/// use comp_engine::calculation::calculate;
/// use comp_engine::config::RateTable;
/// use comp_engine::models::CompensationRequest;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = RateTable::builtin().unwrap();
/// let request = CompensationRequest {
///     rating: 70,
///     has_spouse: true,
///     children_count: 2,
///     parents_count: 0,
///     spouse_needs_aid: false,
/// };
///
/// let estimate = calculate(&request, &table).unwrap();
/// assert_eq!(estimate.final_amount, Decimal::from_str("2016.28").unwrap());
/// ```
pub fn calculate(request: &CompensationRequest, table: &RateTable) -> EngineResult<Estimate> {
    let rating = validate_rating(request.rating)?;

    let lookup = table
        .lookup(rating)
        .ok_or(EngineError::RateDataMissing { rating })?;

    let mut total = Decimal::ZERO;
    let mut breakdown = Vec::new();
    let mut notes = Vec::new();

    match lookup {
        RateLookup::Flat(amount) => {
            let flat = calculate_flat_rate(rating, amount, request);
            total += flat.line.amount;
            breakdown.push(flat.line);
            if let Some(note) = flat.note {
                notes.push(note);
            }
        }
        RateLookup::Tiered(entry) => {
            let base = select_base_rate(rating, entry, request.has_spouse, request.parent_bucket());
            total += base.line.amount;
            breakdown.push(base.line);

            if let Some(children) = calculate_child_addition(entry, request.children_count) {
                total += children.amount;
                breakdown.push(children.line);
            }

            if let Some(aid) =
                calculate_spouse_aid(entry, request.has_spouse, request.spouse_needs_aid)
            {
                total += aid.amount;
                breakdown.push(aid.line);
            }
        }
    }

    notes.push(ESTIMATE_DISCLAIMER.to_string());

    Ok(Estimate {
        final_amount: total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        breakdown,
        notes,
    })
}

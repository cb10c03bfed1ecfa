//! Base rate selection for dependent-keyed tiers (30%–100%).

use crate::config::RateEntry;
use crate::models::{BreakdownLine, EstimateComponent, ParentBucket};

/// The result of a base rate selection, including its breakdown line.
#[derive(Debug, Clone)]
pub struct BaseRateResult {
    /// The breakdown line describing which base case was used.
    pub line: BreakdownLine,
}

/// Selects the base monthly amount for a rating tier.
///
/// The lookup is two-axis: spouse presence crossed with the parent-count
/// bucket. The returned line describes exactly which of the six base cases
/// applied, so the user can see why the amount was chosen.
///
/// # Arguments
///
/// * `rating` - The validated rating, used only for the line text
/// * `entry` - The rate table entry for this tier
/// * `has_spouse` - Whether the veteran has a dependent spouse
/// * `parents` - The bucketed dependent parent count
pub fn select_base_rate(
    rating: u32,
    entry: &RateEntry,
    has_spouse: bool,
    parents: ParentBucket,
) -> BaseRateResult {
    let (amount, description) = match (has_spouse, parents) {
        (true, ParentBucket::None) => (
            entry.veteran_with_spouse,
            format!("Base for {}% with a spouse", rating),
        ),
        (true, ParentBucket::One) => (
            entry.veteran_with_spouse_and_one_parent,
            format!("Base for {}% with a spouse and one parent", rating),
        ),
        (true, ParentBucket::TwoOrMore) => (
            entry.veteran_with_spouse_and_two_parents,
            format!("Base for {}% with a spouse and two parents", rating),
        ),
        (false, ParentBucket::None) => (
            entry.veteran_only,
            format!("Base for {}% (veteran alone)", rating),
        ),
        (false, ParentBucket::One) => (
            entry.veteran_with_one_parent,
            format!("Base for {}% with one parent", rating),
        ),
        (false, ParentBucket::TwoOrMore) => (
            entry.veteran_with_two_parents,
            format!("Base for {}% with two parents", rating),
        ),
    };

    BaseRateResult {
        line: BreakdownLine {
            component: EstimateComponent::BaseRate,
            amount,
            text: format!("{}: ${:.2}", description, amount),
        },
    }
}

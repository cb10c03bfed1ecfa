//! Presentation of calculation results.
//!
//! The driver renders the computed numbers directly and never asks the
//! model to restate them, so a hallucinated dollar figure cannot replace
//! the calculated one. The error path needs no formatter: each calculation
//! error's `Display` output is already the entire user-facing response.

use crate::models::Estimate;

/// Formats a successful estimate as the complete chat reply.
///
/// The final amount appears first in bold with exactly 2 decimals, then
/// every breakdown line as a discrete markdown list item, then the notes.
///
/// # Example
///
/// ```
/// use comp_engine::calculation::calculate;
/// use comp_engine::config::RateTable;
/// use comp_engine::models::CompensationRequest;
/// use comp_engine::protocol::format_estimate;
///
/// let table = RateTable::builtin().unwrap();
/// let request = CompensationRequest {
///     rating: 70,
///     has_spouse: true,
///     children_count: 2,
///     parents_count: 0,
///     spouse_needs_aid: false,
/// };
/// let text = format_estimate(&calculate(&request, &table).unwrap());
/// assert!(text.starts_with(
///     "Based on the information you've provided, your estimated monthly payment is **$2016.28**."
/// ));
/// ```
pub fn format_estimate(estimate: &Estimate) -> String {
    let mut text = format!(
        "Based on the information you've provided, your estimated monthly payment is **${:.2}**.\n\n",
        estimate.final_amount
    );

    text.push_str("Here is a simple breakdown:\n");
    for line in &estimate.breakdown {
        text.push_str(&format!("- {}\n", line.text));
    }
    text.push('\n');

    for note in &estimate.notes {
        text.push_str(&format!("{}\n", note));
    }

    text.trim_end().to_string()
}

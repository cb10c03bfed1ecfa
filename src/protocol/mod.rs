//! The slot-filling and tool-invocation protocol.
//!
//! This module is the contract between an external conversational driver
//! and the calculator: the ordered questions a driver must resolve before
//! the calculator may be invoked ([`EstimatorSession`]), the deterministic
//! coercion of loosely-typed tool-call arguments ([`coerce`]), and the
//! fixed presentation of results ([`present`]) so free-text generation
//! never touches the computed numbers.

pub mod coerce;
mod present;
mod session;

pub use present::format_estimate;
pub use session::{EstimatorSession, SlotState};

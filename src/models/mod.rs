//! Core data models for the compensation estimation engine.
//!
//! This module contains the domain models used throughout the engine.

mod estimate;
mod request;

pub use estimate::{BreakdownLine, Estimate, EstimateComponent};
pub use request::{CompensationRequest, ParentBucket};

//! VA Disability Compensation Estimation Engine
//!
//! This crate estimates the monthly VA disability compensation payment for a
//! veteran based on their disability rating (10%–100% in steps of 10) and
//! dependent configuration (spouse, children, parents, and spouse Aid and
//! Attendance). It also provides the slot-filling session and tool-call
//! argument coercion that a conversational driver uses to collect the inputs
//! one question at a time before invoking the calculator.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod protocol;

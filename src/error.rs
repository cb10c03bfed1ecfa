//! Error types for the compensation estimation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during estimation.
//!
//! The two calculation errors ([`EngineError::InvalidRating`] and
//! [`EngineError::RateDataMissing`]) carry their user-facing message as the
//! `Display` output, so a conversational driver can surface
//! `err.to_string()` to the user without any translation layer.

use thiserror::Error;

/// The main error type for the compensation estimation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use comp_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested rating is outside 10–100 or not a multiple of 10.
    ///
    /// User-correctable; the display text asks for a corrected rating.
    #[error(
        "I'm sorry, but I can only calculate ratings between 10% and 100% \
         in increments of 10. Could you please provide a valid rating?"
    )]
    InvalidRating {
        /// The rating that failed validation.
        rating: i64,
    },

    /// The rating passed validation but no rate table entry exists for it.
    ///
    /// Indicates a partial or inconsistent rate table; callers should log
    /// this as a defect. The display text still degrades politely.
    #[error(
        "I'm sorry, I encountered an error and couldn't find the rate data \
         for the specified rating."
    )]
    RateDataMissing {
        /// The validated rating with no table entry.
        rating: u32,
    },

    /// A slot was provided to a session out of the required order.
    #[error("Slot '{got}' provided out of order; the session is awaiting '{expected}'")]
    SlotOutOfOrder {
        /// The slot the session is currently waiting on.
        expected: String,
        /// The slot that was provided.
        got: String,
    },

    /// A session was asked to invoke the calculator before all slots were filled.
    #[error("Session is not ready to invoke the calculator (state: {state})")]
    SessionNotReady {
        /// The state the session was in.
        state: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

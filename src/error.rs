//! Error types for the experience mod audit engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while rating a policy.

use thiserror::Error;

/// The main error type for the experience mod audit engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use emod_engine::error::EngineError;
///
/// let error = EngineError::StateNotSupported {
///     state: "ZZ".to_string(),
///     supported: vec!["CA".to_string(), "GA".to_string()],
/// };
/// assert_eq!(
///     error.to_string(),
///     "State ZZ is not supported; supported states: CA, GA"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No rating values are registered for the requested state.
    #[error("State {state} is not supported; supported states: {}", supported.join(", "))]
    StateNotSupported {
        /// The state code that was requested.
        state: String,
        /// The sorted set of states the registry can rate.
        supported: Vec<String>,
    },

    /// The state is registered but its bureau's credibility formula is not
    /// implemented. NCCI math is never substituted for an independent
    /// bureau's rules.
    #[error("W/B calculation not implemented for {state} (bureau: {bureau})")]
    BureauNotImplemented {
        /// The state code whose formula was requested.
        state: String,
        /// The bureau that governs the state.
        bureau: String,
    },

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

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

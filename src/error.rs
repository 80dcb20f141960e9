//! Error types for the eligibility engine.
//!
//! Only configuration problems are errors. A household that does not qualify,
//! or that reported unusable data, is a regular
//! [`EligibilityResult`](crate::models::EligibilityResult) with a reason code.

use thiserror::Error;

/// The main error type for the eligibility engine.
///
/// # Example
///
/// ```
/// use housing_eligibility::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/thresholds.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/thresholds.yaml");
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

    /// Configuration parsed but breaks a table invariant.
    #[error("Invalid configuration in '{path}': {message}")]
    ConfigInvalid {
        /// The path to the offending file.
        path: String,
        /// Which invariant was broken.
        message: String,
    },

    /// A household shape with no threshold row reached the table lookup.
    ///
    /// Callers validate the adult count first, so this signals a programming error.
    #[error("No threshold row for household with {adult_count} adults")]
    InvalidHouseholdShape {
        /// The adult count that was looked up.
        adult_count: i64,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

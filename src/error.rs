//! Error types for quartic-ga
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for malformed form input
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// A field expected to hold an integer did not parse
    #[error("Field `{field}` is not a valid integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    /// A field expected to hold a real number did not parse
    #[error("Field `{field}` is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// Unknown gene encoding name
    #[error("Unknown encoding {0:?} (expected Integer or Float)")]
    UnknownEncoding(String),

    /// Unknown selection method name
    #[error("Unknown selection method {0:?} (expected Roulette or Tournament)")]
    UnknownSelection(String),

    /// Configuration document could not be decoded
    #[error("Malformed configuration document: {0}")]
    Document(String),
}

/// Error type for operator failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// Selection cannot produce a well-defined choice
    #[error("Degenerate state: {0}")]
    DegenerateState(String),

    /// Selection operation failed
    #[error("Selection failed: {0}")]
    SelectionFailed(String),

    /// Invalid operator configuration
    #[error("Invalid operator configuration: {0}")]
    InvalidConfiguration(String),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// Form input error
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

impl EvolutionError {
    /// Returns true if the run failed on a numerically degenerate population
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Operator(OperatorError::DegenerateState(_)))
    }

    /// Returns true if the run was rejected before it started
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Operator(OperatorError::InvalidConfiguration(_))
        )
    }
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

/// Result type alias for operator applications
pub type OperatorResult<T> = Result<T, OperatorError>;

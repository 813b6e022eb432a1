//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing, of the wrong type, or blank
    Required {
        field: &'static str,
        expected: &'static str,
    },

    /// Field is present but of the wrong type
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// Request body could not be read as a JSON object
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field, expected } => {
                write!(f, "{} is required and must be {}", field, expected)
            }
            Self::InvalidType { field, expected } => write!(f, "{} must be {}", field, expected),
            Self::InvalidBody { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

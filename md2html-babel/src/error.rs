//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while preparing or running a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A conversion rule cannot be used to build tags
    InvalidRule(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidRule(msg) => write!(f, "Invalid conversion rule: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}

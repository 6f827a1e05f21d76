//! Errors of the digest interface

use std::fmt;

use thiserror::Error;

/// Why the dispatcher refused an algorithm name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Unsupported {
    /// A known hash algorithm that this library deliberately does not provide, such as `sha1`.
    Excluded,
    /// A name that does not denote any hash algorithm known to this library.
    Unrecognized,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unsupported::Excluded => f.write_str("recognized but not supported"),
            Unsupported::Unrecognized => f.write_str("unrecognized"),
        }
    }
}

/// Digest errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    #[error("Unsupported hash algorithm: {name} ({reason})")]
    UnsupportedAlgorithm { name: String, reason: Unsupported },

    #[error("Invalid input type: {0}")]
    InvalidInputType(&'static str),
}

impl HashError {
    /// Whether the rejected algorithm name is known but excluded, as opposed to unknown.
    #[must_use]
    pub fn is_excluded_algorithm(&self) -> bool {
        matches!(self, HashError::UnsupportedAlgorithm { reason: Unsupported::Excluded, .. })
    }
}

/// Result type for digest operations
pub type Result<T> = std::result::Result<T, HashError>;

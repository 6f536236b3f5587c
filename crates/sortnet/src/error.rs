//! Network errors

use thiserror::Error;

use crate::comparator::Comparator;

/// Network result type
pub type Result<T> = std::result::Result<T, Error>;

/// Network errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid comparator '{token}': {reason}")]
    InvalidComparator { token: String, reason: String },

    #[error("network has no comparators")]
    EmptyNetwork,

    #[error("sequence length mismatch: network has {expected} wires, got {actual} items")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("comparator not found: {0}")]
    NotFound(Comparator),

    #[error("network width {width} exceeds the supported maximum of {max}")]
    WidthExceeded { width: usize, max: usize },

    #[error("verification cancelled")]
    Cancelled,
}

impl Error {
    pub(crate) fn invalid_comparator(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidComparator {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

//! Error taxonomy shared by the numera crates.

use thiserror::Error;

/// Errors raised by the numeric operations.
///
/// Every operation is deterministic, so a given invalid input always
/// produces the same variant.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum NumeraError {
    /// A required sequence or operand was absent.
    #[error("argument `{name}` is absent")]
    InvalidArgument {
        /// Name of the missing argument.
        name: &'static str,
    },

    /// A coefficient index fell outside `[0, degree]`.
    #[error("index {index} is out of range for a polynomial of degree {degree}")]
    OutOfRange {
        /// The requested index.
        index: i64,
        /// Degree of the polynomial that was indexed.
        degree: usize,
    },

    /// A requested degree needs more coefficients than can be stored.
    #[error("degree {degree} exceeds the storable coefficient count")]
    DegreeTooLarge {
        /// The requested degree.
        degree: usize,
    },

    /// A tolerance was negative or NaN.
    #[error("tolerance must be a non-negative number, got {0}")]
    InvalidTolerance(f64),
}

impl NumeraError {
    /// Shorthand for [`NumeraError::InvalidArgument`].
    #[must_use]
    pub const fn absent(name: &'static str) -> Self {
        Self::InvalidArgument { name }
    }
}

/// Convenience alias used across the workspace.
pub type Result<T, E = NumeraError> = std::result::Result<T, E>;

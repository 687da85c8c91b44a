//! Floating-point comparison tolerance.
//!
//! An [`Epsilon`] is always supplied by the caller. There is deliberately
//! no `Default`: a missing tolerance is a setup error of the host
//! application.

use std::fmt;

use crate::error::{NumeraError, Result};

/// A validated, non-negative comparison tolerance.
///
/// A value `c` is *negligible* when it is exactly zero or `|c| < eps`.
/// Two values are *close* when they are identical or `|a - b| < eps`.
/// With a tolerance of zero both tests degrade to exact comparison.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Epsilon(f64);

impl Epsilon {
    /// Exact comparison.
    pub const EXACT: Self = Self(0.0);

    /// Creates a tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`NumeraError::InvalidTolerance`] if `value` is negative or NaN.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() || value < 0.0 {
            return Err(NumeraError::InvalidTolerance(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw tolerance.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns true if `c` should be treated as zero.
    #[must_use]
    pub fn is_negligible(self, c: f64) -> bool {
        c == 0.0 || c.abs() < self.0
    }

    /// Returns true if `a` and `b` should be treated as equal.
    #[must_use]
    pub fn is_close(self, a: f64, b: f64) -> bool {
        a == b || (a - b).abs() < self.0
    }

    /// Returns the looser of two tolerances.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }
}

impl TryFrom<f64> for Epsilon {
    type Error = NumeraError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Debug for Epsilon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Epsilon({})", self.0)
    }
}

impl fmt::Display for Epsilon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

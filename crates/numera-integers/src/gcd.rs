//! Greatest common divisor over fixed-width integers.
//!
//! Two algorithms are provided:
//! - [`subtractive`]: Euclid's original repeated subtraction, O(max(a, b))
//! - [`binary`]: Stein's algorithm, shifts and subtraction only
//!
//! The pairwise kernels work on unsigned magnitudes. The signed entry
//! points map their inputs through `unsigned_abs`, so the result is
//! always non-negative and `gcd(i64::MIN, 0)` is representable.

use num_traits::{PrimInt, Unsigned};

use numera_core::{NumeraError, Result};

/// Subtractive Euclidean GCD of two magnitudes.
///
/// Repeatedly replaces the larger operand by the difference until both
/// agree. Worst case is linear in the larger operand, e.g. `(1, n)`.
#[must_use]
pub fn subtractive<U: PrimInt + Unsigned>(a: U, b: U) -> U {
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }

    let (mut a, mut b) = (a, b);
    while a != b {
        if a > b {
            a = a - b;
        } else {
            b = b - a;
        }
    }
    a
}

/// Binary (Stein's) GCD of two magnitudes.
#[must_use]
pub fn binary<U: PrimInt + Unsigned>(a: U, b: U) -> U {
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }

    // Shared power of two, re-applied at the end
    let shift = (a | b).trailing_zeros() as usize;
    let mut a = a >> shift;
    let mut b = b >> shift;

    a = a >> a.trailing_zeros() as usize;

    loop {
        b = b >> b.trailing_zeros() as usize;

        // Both odd here
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b = b - a;

        if b.is_zero() {
            break;
        }
    }

    a << shift
}

/// Subtractive GCD of two signed integers.
#[must_use]
pub fn gcd_subtractive(a: i64, b: i64) -> u64 {
    subtractive(a.unsigned_abs(), b.unsigned_abs())
}

/// Binary GCD of two signed integers.
#[must_use]
pub fn gcd_binary(a: i64, b: i64) -> u64 {
    binary(a.unsigned_abs(), b.unsigned_abs())
}

/// Selects one of the pairwise GCD kernels.
///
/// Every arity is a left fold of the pairwise kernel, so both algorithms
/// agree on every input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GcdAlgorithm {
    /// Repeated subtraction.
    Subtractive,
    /// Stein's binary algorithm.
    Binary,
}

impl GcdAlgorithm {
    /// All available algorithms.
    pub const ALL: [Self; 2] = [Self::Subtractive, Self::Binary];

    /// Short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Subtractive => "subtractive",
            Self::Binary => "binary",
        }
    }

    /// GCD of two magnitudes.
    #[must_use]
    pub fn pair(self, a: u64, b: u64) -> u64 {
        match self {
            Self::Subtractive => subtractive(a, b),
            Self::Binary => binary(a, b),
        }
    }

    /// GCD of two signed integers.
    #[must_use]
    pub fn gcd(self, a: i64, b: i64) -> u64 {
        self.pair(a.unsigned_abs(), b.unsigned_abs())
    }

    /// GCD of three signed integers, `gcd(gcd(a, b), c)`.
    #[must_use]
    pub fn gcd3(self, a: i64, b: i64, c: i64) -> u64 {
        self.pair(self.gcd(a, b), c.unsigned_abs())
    }

    /// GCD of a sequence, folded left to right.
    ///
    /// The empty sequence yields 0.
    #[must_use]
    pub fn gcd_all(self, values: &[i64]) -> u64 {
        let mut iter = values.iter();
        let Some(first) = iter.next() else {
            return 0;
        };
        iter.fold(first.unsigned_abs(), |acc, v| self.pair(acc, v.unsigned_abs()))
    }

    /// GCD of a sequence that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`NumeraError::InvalidArgument`] if `values` is `None`.
    pub fn try_gcd_all(self, values: Option<&[i64]>) -> Result<u64> {
        values
            .map(|v| self.gcd_all(v))
            .ok_or(NumeraError::absent("values"))
    }
}

impl std::fmt::Display for GcdAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

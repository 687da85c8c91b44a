//! Dense univariate polynomials over `f64`.
//!
//! Coefficients are stored in ascending degree order and the
//! comparison tolerance travels with each polynomial, so equality,
//! normalization and formatting never consult global state.

use std::ops::Index;

use numera_core::{Epsilon, NumeraError, Result};

/// A dense univariate polynomial with real coefficients.
///
/// Immutable: every arithmetic operation returns a new polynomial.
///
/// # Invariants
///
/// - `coeffs` is never empty; the zero polynomial stores `[0.0]`
/// - the highest stored coefficient is not negligible under `epsilon`,
///   unless it is the only one
#[derive(Clone, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending degree order.
    coeffs: Vec<f64>,
    /// Tolerance for normalization, equality and formatting.
    epsilon: Epsilon,
}

impl Polynomial {
    /// Creates a new polynomial from coefficients, constant term first.
    ///
    /// Trailing negligible coefficients are trimmed down to one element.
    #[must_use]
    pub fn new(coeffs: impl Into<Vec<f64>>, epsilon: Epsilon) -> Self {
        let mut coeffs = coeffs.into();

        // Normalize: remove trailing near-zeros
        while coeffs.len() > 1 && coeffs.last().is_some_and(|&c| epsilon.is_negligible(c)) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(0.0);
        }

        Self { coeffs, epsilon }
    }

    /// Creates a polynomial from a coefficient slice that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`NumeraError::InvalidArgument`] if `coeffs` is `None`.
    pub fn try_new(coeffs: Option<&[f64]>, epsilon: Epsilon) -> Result<Self> {
        coeffs
            .map(|c| Self::new(c, epsilon))
            .ok_or(NumeraError::absent("coeffs"))
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(epsilon: Epsilon) -> Self {
        Self {
            coeffs: vec![0.0],
            epsilon,
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64, epsilon: Epsilon) -> Self {
        Self::new(vec![c], epsilon)
    }

    /// Creates the monomial c * x^n.
    ///
    /// # Errors
    ///
    /// Returns [`NumeraError::DegreeTooLarge`] if `n + 1` coefficients
    /// cannot be allocated.
    pub fn monomial(c: f64, n: usize, epsilon: Epsilon) -> Result<Self> {
        let too_large = NumeraError::DegreeTooLarge { degree: n };
        let len = n.checked_add(1).ok_or(too_large.clone())?;
        let mut coeffs = Vec::new();
        coeffs.try_reserve_exact(len).map_err(|_| too_large)?;
        coeffs.resize(n, 0.0);
        coeffs.push(c);
        Ok(Self::new(coeffs, epsilon))
    }

    /// Returns the same coefficients under a different tolerance.
    ///
    /// The result is re-normalized, so a looser tolerance may lower the degree.
    #[must_use]
    pub fn with_epsilon(&self, epsilon: Epsilon) -> Self {
        Self::new(self.coeffs.clone(), epsilon)
    }

    /// Returns the tolerance carried by this polynomial.
    #[must_use]
    pub fn epsilon(&self) -> Epsilon {
        self.epsilon
    }

    /// Returns the degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if every coefficient is negligible.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.epsilon.is_negligible(self.coeffs[0])
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> f64 {
        self.coeffs[self.degree()]
    }

    /// Returns the coefficient of x^i.
    ///
    /// # Errors
    ///
    /// Returns [`NumeraError::OutOfRange`] if `i < 0` or `i > degree`.
    pub fn at(&self, i: i64) -> Result<f64> {
        usize::try_from(i)
            .ok()
            .and_then(|idx| self.coeffs.get(idx).copied())
            .ok_or(NumeraError::OutOfRange {
                index: i,
                degree: self.degree(),
            })
    }

    /// Returns the coefficient of x^i, or zero past the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    ///
    /// Overflow and NaN propagate as IEEE arithmetic produces them. The fold
    /// starts from the leading coefficient, so a constant evaluates to itself
    /// even at an infinite point.
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        match self.coeffs.split_last() {
            Some((&lead, rest)) => rest.iter().rev().fold(lead, |acc, &c| acc * x + c),
            None => 0.0,
        }
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (long, short) = if self.coeffs.len() >= other.coeffs.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = long.coeffs.clone();
        for (r, c) in result.iter_mut().zip(&short.coeffs) {
            *r += c;
        }

        Self::new(result, self.epsilon.max(other.epsilon))
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(
            self.coeffs.iter().map(|c| -c).collect::<Vec<_>>(),
            self.epsilon,
        )
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials by full convolution.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![0.0; n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] += a * b;
            }
        }

        Self::new(result, self.epsilon.max(other.epsilon))
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        Self::new(
            self.coeffs.iter().map(|x| x * c).collect::<Vec<_>>(),
            self.epsilon,
        )
    }

    /// Adds two operands that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`NumeraError::InvalidArgument`] if either operand is `None`.
    pub fn checked_add(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self> {
        let (lhs, rhs) = Self::require(lhs, rhs)?;
        Ok(lhs.add(rhs))
    }

    /// Subtracts two operands that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`NumeraError::InvalidArgument`] if either operand is `None`.
    pub fn checked_sub(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self> {
        let (lhs, rhs) = Self::require(lhs, rhs)?;
        Ok(lhs.sub(rhs))
    }

    /// Multiplies two operands that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`NumeraError::InvalidArgument`] if either operand is `None`.
    pub fn checked_mul(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self> {
        let (lhs, rhs) = Self::require(lhs, rhs)?;
        Ok(lhs.mul(rhs))
    }

    fn require<'a>(lhs: Option<&'a Self>, rhs: Option<&'a Self>) -> Result<(&'a Self, &'a Self)> {
        let lhs = lhs.ok_or(NumeraError::absent("lhs"))?;
        let rhs = rhs.ok_or(NumeraError::absent("rhs"))?;
        Ok((lhs, rhs))
    }

    /// Compares against `other` under an explicit tolerance.
    ///
    /// Degrees must match and every coefficient pair must be close.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: Epsilon) -> bool {
        self.coeffs.len() == other.coeffs.len()
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(&a, &b)| epsilon.is_close(a, b))
    }

    /// Equality for operands that may be absent.
    ///
    /// Two absent operands are equal; absent and present never are.
    #[must_use]
    pub fn eq_optional(lhs: Option<&Self>, rhs: Option<&Self>) -> bool {
        match (lhs, rhs) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Equality under the looser of the two tolerances, which keeps it symmetric.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, self.epsilon.max(other.epsilon))
    }
}

impl Index<usize> for Polynomial {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.coeffs[i]
    }
}

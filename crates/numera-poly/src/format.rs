//! Canonical text form of a polynomial.
//!
//! Terms are written from the highest degree down as `<coef>x^<deg>` and
//! joined by `+`. Negligible terms are skipped; if nothing remains the
//! output is `0x^0`. Negative coefficients keep their sign, e.g.
//! `4.5x^2+-1.2x^0`.

use std::fmt;

use numera_core::Epsilon;
use thiserror::Error;

use crate::dense::Polynomial;

/// Largest degree accepted by [`Polynomial::parse`].
pub const MAX_PARSE_DEGREE: usize = 1 << 20;

/// Errors raised while parsing the canonical text form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParsePolynomialError {
    /// The input contained no terms.
    #[error("empty polynomial")]
    Empty,

    /// A term is not of the form `<coef>x^<deg>`.
    #[error("malformed term {0:?}")]
    MalformedTerm(String),

    /// A coefficient is not a number.
    #[error("invalid coefficient {0:?}")]
    InvalidCoefficient(String),

    /// A degree is not a non-negative integer.
    #[error("invalid degree {0:?}")]
    InvalidDegree(String),

    /// A degree exceeds [`MAX_PARSE_DEGREE`].
    #[error("degree {0} exceeds the supported maximum")]
    DegreeTooLarge(usize),
}

impl fmt::Display for Polynomial {
    /// Honors a precision flag, e.g. `{:.2}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eps = self.epsilon();
        let mut wrote_term = false;

        for (deg, &c) in self.coeffs().iter().enumerate().rev() {
            if eps.is_negligible(c) {
                continue;
            }
            if wrote_term {
                f.write_str("+")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{c:.p$}x^{deg}")?,
                None => write!(f, "{c}x^{deg}")?,
            }
            wrote_term = true;
        }

        if !wrote_term {
            f.write_str("0x^0")?;
        }
        Ok(())
    }
}

impl Polynomial {
    /// Parses the canonical text form produced by `Display`.
    ///
    /// Whitespace around terms is ignored, terms may come in any order
    /// and repeated degrees are summed.
    ///
    /// # Errors
    ///
    /// Returns a [`ParsePolynomialError`] describing the first bad term.
    pub fn parse(s: &str, epsilon: Epsilon) -> Result<Self, ParsePolynomialError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParsePolynomialError::Empty);
        }

        let mut coeffs: Vec<f64> = Vec::new();
        for term in split_terms(s) {
            let (coeff, deg) = parse_term(term)?;
            if deg >= coeffs.len() {
                coeffs.resize(deg + 1, 0.0);
            }
            coeffs[deg] += coeff;
        }

        tracing::trace!(input = s, degree = coeffs.len().saturating_sub(1), "parsed polynomial");
        Ok(Self::new(coeffs, epsilon))
    }
}

/// Splits on `+` separators, leaving exponent signs such as `1e+5` intact.
fn split_terms(s: &str) -> impl Iterator<Item = &str> {
    let mut terms = Vec::new();
    let mut start = 0;
    let mut prev = None;

    for (i, ch) in s.char_indices() {
        if ch == '+' && !matches!(prev, Some('e' | 'E')) {
            terms.push(&s[start..i]);
            start = i + 1;
        }
        if !ch.is_whitespace() {
            prev = Some(ch);
        }
    }
    terms.push(&s[start..]);

    terms.into_iter().map(str::trim)
}

fn parse_term(term: &str) -> Result<(f64, usize), ParsePolynomialError> {
    let (coeff, deg) = term
        .split_once("x^")
        .ok_or_else(|| ParsePolynomialError::MalformedTerm(term.to_owned()))?;

    let coeff = coeff.trim();
    let deg = deg.trim();

    let coeff: f64 = coeff
        .parse()
        .map_err(|_| ParsePolynomialError::InvalidCoefficient(coeff.to_owned()))?;
    let deg: usize = deg
        .parse()
        .map_err(|_| ParsePolynomialError::InvalidDegree(deg.to_owned()))?;

    if deg > MAX_PARSE_DEGREE {
        return Err(ParsePolynomialError::DegreeTooLarge(deg));
    }
    Ok((coeff, deg))
}

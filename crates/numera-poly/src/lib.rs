//! # numera-poly
//!
//! Dense univariate polynomials with real coefficients.
//!
//! This crate provides:
//! - Immutable polynomials normalized on construction
//! - Addition, subtraction, negation, scaling and convolution product,
//!   with operators for owned and borrowed operands
//! - Horner evaluation
//! - Tolerance-based equality, with the tolerance carried by each value
//! - A canonical `<coef>x^<deg>` text form and its parser
//!
//! ## Tolerance
//!
//! Every polynomial carries an [`numera_core::Epsilon`]. A coefficient is
//! negligible when it is zero or smaller in magnitude than the tolerance;
//! the same test drives trailing-term trimming, equality and formatting.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arithmetic;
pub mod dense;
pub mod format;

#[cfg(test)]
mod proptests;

pub use dense::Polynomial;
pub use format::{ParsePolynomialError, MAX_PARSE_DEGREE};

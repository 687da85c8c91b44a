//! # numera-bits
//!
//! Exact bit strings for IEEE-754 binary64 values.
//!
//! Reinterpretation goes through `f64::to_bits`, so no memory aliasing is
//! involved and every pattern (subnormals, signed zeros, infinities, NaN
//! payloads) is rendered as stored.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binary64;

#[cfg(test)]
mod proptests;

pub use binary64::{bits_of, bits_of_masked, Binary64, WIDTH};

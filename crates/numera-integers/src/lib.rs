//! # numera-integers
//!
//! Greatest common divisor over fixed-width signed integers.
//!
//! This crate provides:
//! - Subtractive Euclidean GCD (the naive reference)
//! - Binary (Stein's) GCD using only shifts and subtraction
//! - Two-, three- and N-ary folds for both, selected by [`GcdAlgorithm`]
//! - A rayon-parallel N-ary reduction for long sequences
//!
//! ## Timing
//!
//! Any call can be timed with [`numera_core::measure`]:
//!
//! ```rust
//! use numera_core::measure;
//! use numera_integers::GcdAlgorithm;
//!
//! let timed = measure("binary", || GcdAlgorithm::Binary.gcd_all(&[16, 10, 8, 4]));
//! assert_eq!(timed.value, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod gcd;
pub mod parallel;

#[cfg(test)]
mod proptests;

pub use gcd::{binary, gcd_binary, gcd_subtractive, subtractive, GcdAlgorithm};
pub use parallel::{par_gcd_all, ParallelConfig};

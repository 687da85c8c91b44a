//! # Numera
//!
//! A small numeric toolkit: greatest common divisors, dense real
//! polynomials and exact IEEE-754 bit strings.
//!
//! ## Features
//!
//! - **Integer GCD**: subtractive and binary (Stein's) algorithms over 2, 3 or N values
//! - **Polynomials**: immutable dense polynomials with tolerance-based equality
//! - **Bit Strings**: the 64-bit pattern of any `f64`, NaN payloads included
//! - **Timing**: measure any call without altering its result
//!
//! ## Quick Start
//!
//! ```rust
//! use numera::prelude::*;
//!
//! let eps = Epsilon::new(1e-4).unwrap();
//! let p = Polynomial::new(vec![1.2, 3.4, 4.5], eps);
//! let q = Polynomial::new(vec![1.2, 4.5], eps);
//! assert_eq!(&p * &q, Polynomial::new(vec![1.44, 9.48, 20.7, 20.25], eps));
//!
//! assert_eq!(GcdAlgorithm::Binary.gcd_all(&[625, 75, 275, 575]), 25);
//! assert_eq!(bits_of(1.0).len(), 64);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use numera_bits as bits;
pub use numera_core as core;
pub use numera_integers as integers;
pub use numera_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numera_bits::{bits_of, Binary64};
    pub use numera_core::{measure, Epsilon, NumeraError, Timed, ToleranceConfig};
    pub use numera_integers::{gcd_binary, gcd_subtractive, GcdAlgorithm};
    pub use numera_poly::Polynomial;
}

//! # numera-core
//!
//! Shared plumbing for the numera crates.
//!
//! This crate provides:
//! - The error taxonomy (`InvalidArgument`, `OutOfRange`, bad tolerances)
//! - A validated comparison tolerance, [`Epsilon`]
//! - Tolerance configuration loaded from JSON or the environment
//! - A generic timing combinator for any call
//!
//! ## Design Principles
//!
//! - **No hidden state**: the tolerance is a value passed around, never a global
//! - **No silent defaults**: a missing tolerance is reported, not invented
//! - **Pure wrappers**: timing never alters the wrapped result

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod timing;
pub mod tolerance;

pub use config::{ConfigError, ToleranceConfig};
pub use error::{NumeraError, Result};
pub use timing::{measure, measure_with, Clock, MonotonicClock, Timed};
pub use tolerance::Epsilon;

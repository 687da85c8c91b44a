//! Workspace root package hosting the criterion benches and demos.

pub use numera::{bits, integers, poly, prelude};

//! Compares the subtractive and binary GCD algorithms on the same inputs.
//!
//! Run with: `cargo run --release --example gcd_timing`

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use numera::prelude::*;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        std::process::exit(1);
    }

    let inputs: &[(&str, &[i64])] = &[
        ("coprime triple", &[11, 7, 8]),
        ("mixed evens", &[16, 10, 8, 4]),
        ("multiples of 25", &[625, 75, 275, 575]),
        ("worst case for subtraction", &[1, 5_000_000]),
        ("shared powers of two", &[3 << 40, 5 << 38, 7 << 39]),
    ];

    println!("{:<28} {:>12} {:>14} {:>14}", "input", "gcd", "subtractive", "binary");
    for &(name, values) in inputs {
        let (slow, slow_time) =
            measure("subtractive", || GcdAlgorithm::Subtractive.gcd_all(values)).into_parts();
        let (fast, fast_time) = measure("binary", || GcdAlgorithm::Binary.gcd_all(values)).into_parts();
        assert_eq!(slow, fast, "algorithms disagree on {values:?}");

        println!("{name:<28} {fast:>12} {slow_time:>14.2?} {fast_time:>14.2?}");
    }
}

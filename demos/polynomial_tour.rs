//! Polynomial arithmetic with a tolerance read from configuration.
//!
//! Run with: `NUMERA_EPSILON=0.0001 cargo run --example polynomial_tour`

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use numera::prelude::*;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        std::process::exit(1);
    }

    let eps = match ToleranceConfig::from_env("NUMERA_EPSILON").and_then(|cfg| cfg.epsilon()) {
        Ok(eps) => eps,
        Err(e) => {
            eprintln!("cannot resolve NUMERA_EPSILON: {e}");
            std::process::exit(2);
        }
    };

    let p = Polynomial::new(vec![1.2, 3.4, 4.5], eps);
    let q = Polynomial::new(vec![1.2, 4.5], eps);

    println!("p       = {p}");
    println!("q       = {q}");
    println!("p + q   = {}", &p + &q);
    println!("p - q   = {}", &p - &q);
    println!("p * q   = {}", &p * &q);
    println!("p(1.5)  = {}", p.value_at(1.5));
    println!("p - p   = {}", &p - &p);

    match Polynomial::parse(&p.to_string(), eps) {
        Ok(back) => println!("round trip equal: {}", back == p),
        Err(e) => eprintln!("round trip failed: {e}"),
    }

    for (name, value) in [("p(1.5)", p.value_at(1.5)), ("NaN", f64::NAN)] {
        println!("{name:<8} {}", bits_of(value));
    }
    println!("fields   {}", Binary64::from(p.value_at(1.5)));
}

//! Parallel GCD reduction.
//!
//! GCD forms a commutative monoid with identity 0, so long sequences can
//! be split into chunks, reduced independently with rayon, and combined.
//! The result always equals the sequential fold.

use rayon::prelude::*;

use crate::gcd::GcdAlgorithm;

/// Configuration for the parallel reduction.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum sequence length to enable parallelism.
    pub parallel_threshold: usize,
    /// Number of values each task folds sequentially.
    pub chunk_size: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
            chunk_size: 1024,
        }
    }
}

/// GCD of a sequence using rayon work-stealing.
///
/// Falls back to [`GcdAlgorithm::gcd_all`] below the configured threshold.
#[must_use]
pub fn par_gcd_all(values: &[i64], algorithm: GcdAlgorithm, config: &ParallelConfig) -> u64 {
    if values.len() < config.parallel_threshold {
        tracing::trace!(len = values.len(), "sequential gcd fold");
        return algorithm.gcd_all(values);
    }

    values
        .par_chunks(config.chunk_size.max(1))
        .map(|chunk| algorithm.gcd_all(chunk))
        .reduce(|| 0, |a, b| algorithm.pair(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eager() -> ParallelConfig {
        ParallelConfig {
            parallel_threshold: 0,
            chunk_size: 3,
        }
    }

    #[test]
    fn test_matches_sequential() {
        let values: Vec<i64> = (1..=500)
            .map(|i: i64| if i % 2 == 0 { -6 * i } else { 6 * i })
            .collect();
        for alg in GcdAlgorithm::ALL {
            assert_eq!(par_gcd_all(&values, alg, &eager()), alg.gcd_all(&values));
            assert_eq!(par_gcd_all(&values, alg, &eager()), 6);
        }
    }

    #[test]
    fn test_empty_and_zero_chunk() {
        let config = ParallelConfig {
            parallel_threshold: 0,
            chunk_size: 0,
        };
        assert_eq!(par_gcd_all(&[], GcdAlgorithm::Binary, &config), 0);
        assert_eq!(par_gcd_all(&[0, 0, 9], GcdAlgorithm::Binary, &config), 9);
    }

    #[test]
    fn test_below_threshold() {
        let values = [625, 75, 275, 575];
        let result = par_gcd_all(&values, GcdAlgorithm::Binary, &ParallelConfig::default());
        assert_eq!(result, 25);
    }
}

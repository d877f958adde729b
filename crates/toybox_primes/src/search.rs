//! Range search for numbers with a given distinct prime factor count.

use crate::factors::count_distinct_prime_factors;
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Search over `2..=limit` for numbers with exactly `target` distinct prime factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct FactorSearch {
    /// Inclusive upper bound of the search.
    limit: u64,
    /// Required number of distinct prime factors.
    target: u32,
}

impl FactorSearch {
    /// Creates a search with the given bound and factor count.
    #[instrument]
    pub fn new(limit: u64, target: u32) -> Self {
        Self { limit, target }
    }

    /// Returns matching numbers in ascending order.
    #[instrument]
    pub fn matches(self) -> impl Iterator<Item = u64> {
        let target = self.target;
        (2..=self.limit).filter(move |&num| {
            let matched = count_distinct_prime_factors(num) == target;
            if matched {
                debug!(num, "Found match");
            }
            matched
        })
    }
}

impl Default for FactorSearch {
    fn default() -> Self {
        Self::new(100, 3)
    }
}

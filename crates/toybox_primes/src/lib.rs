//! Distinct prime factor counting.
//!
//! Finds the integers up to a limit whose factorization contains an exact
//! number of distinct primes, using plain trial division throughout.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod factors;
mod search;

pub use factors::{count_distinct_prime_factors, is_prime};
pub use search::FactorSearch;

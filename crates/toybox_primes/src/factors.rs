//! Trial-division primality and factor counting.

use tracing::instrument;

/// Checks whether `num` is prime by trial division up to its square root.
pub fn is_prime(num: u64) -> bool {
    if num < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor * divisor <= num {
        if num % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Counts the distinct primes dividing `num`.
///
/// Walks candidate factors upward from 2. Each prime candidate that divides
/// the remaining value is counted once and then divided out completely, so
/// the walk stops as soon as the remainder reaches 1.
///
/// Values below 2 have no prime factors.
#[instrument(level = "trace")]
pub fn count_distinct_prime_factors(num: u64) -> u32 {
    let mut remaining = num;
    let mut count = 0;
    let mut factor = 2;

    while remaining > 1 {
        if is_prime(factor) && remaining % factor == 0 {
            count += 1;
            while remaining % factor == 0 {
                remaining /= factor;
            }
        }
        factor += 1;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference factorizer: collects each prime once, no primality filter.
    fn reference_distinct(mut n: u64) -> u32 {
        let mut primes = Vec::new();
        let mut p = 2;
        while n > 1 {
            if n % p == 0 {
                primes.push(p);
                while n % p == 0 {
                    n /= p;
                }
            }
            p += 1;
        }
        primes.len() as u32
    }

    #[test]
    fn test_small_primes() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_zero_and_one_are_not_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
    }

    #[test]
    fn test_squares_are_not_prime() {
        assert!(!is_prime(4));
        assert!(!is_prime(49));
        assert!(!is_prime(121));
    }

    #[test]
    fn test_counts_match_reference_up_to_100() {
        for n in 2..=100 {
            assert_eq!(
                count_distinct_prime_factors(n),
                reference_distinct(n),
                "mismatch for {}",
                n
            );
        }
    }

    #[test]
    fn test_multiplicity_counted_once() {
        assert_eq!(count_distinct_prime_factors(64), 1);
        assert_eq!(count_distinct_prime_factors(72), 2);
        assert_eq!(count_distinct_prime_factors(90), 3);
    }

    #[test]
    fn test_below_two_has_no_factors() {
        assert_eq!(count_distinct_prime_factors(0), 0);
        assert_eq!(count_distinct_prime_factors(1), 0);
    }
}

//! Trial-division prime factorization

/// Prime factors of `n` with multiplicity, in ascending order
///
/// `n <= 1` has no factors. The ascending order is what fixes the child
/// order of a Matula tree, so the encoder relies on it.
pub fn prime_factorization(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n <= 1 {
        return factors;
    }

    let mut d = 2u64;
    while d <= n / d {
        while n % d == 0 {
            factors.push(d);
            n /= d;
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Distinct primes of a factorization, ascending
pub fn unique_factors(factors: &[u64]) -> Vec<u64> {
    let mut unique = factors.to_vec();
    unique.sort_unstable();
    unique.dedup();
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::is_prime;

    #[test]
    fn test_trivial_inputs() {
        assert!(prime_factorization(0).is_empty());
        assert!(prime_factorization(1).is_empty());
    }

    #[test]
    fn test_known_factorizations() {
        assert_eq!(prime_factorization(12), vec![2, 2, 3]);
        assert_eq!(prime_factorization(7), vec![7]);
        assert_eq!(prime_factorization(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(prime_factorization(9_991), vec![97, 103]);
    }

    #[test]
    fn test_large_prime_remainder() {
        assert_eq!(prime_factorization(1_000_000_007), vec![1_000_000_007]);
        assert_eq!(prime_factorization(2 * 4_294_967_291), vec![2, 4_294_967_291]);
    }

    #[test]
    fn test_product_and_primality() {
        for n in 2..=2_000u64 {
            let factors = prime_factorization(n);
            assert_eq!(factors.iter().product::<u64>(), n);
            assert!(factors.iter().all(|&p| is_prime(p)));
            assert!(factors.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_unique_factors() {
        assert_eq!(unique_factors(&[2, 2, 3, 3, 5]), vec![2, 3, 5]);
        assert!(unique_factors(&[]).is_empty());
    }
}

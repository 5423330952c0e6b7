//! Primality testing and nth-prime lookup

use crate::config::MatulaConfig;
use crate::{MatulaError, Result};
use tracing::debug;

/// Stateless primality test by trial division over odd candidates up to √n
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut d = 3u64;
    // d <= n / d is d * d <= n without overflow
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Context object owning the ascending prime table
///
/// The table is append-only: `primes[i]` is always the `(i + 1)`th prime,
/// so it answers `nth_prime` by indexing, `prime_to_index` by binary search,
/// and primality of any value up to its largest entry. Nothing is ever
/// removed or rewritten, which is what makes sharing one oracle behind a
/// lock safe.
#[derive(Clone, Debug)]
pub struct PrimeOracle {
    /// Consecutive primes starting at 2, never empty
    primes: Vec<u64>,
    config: MatulaConfig,
}

impl PrimeOracle {
    /// Create an oracle with the default config
    pub fn new() -> Self {
        Self::with_config(MatulaConfig::default())
    }

    /// Create an oracle with explicit limits
    pub fn with_config(config: MatulaConfig) -> Self {
        PrimeOracle {
            primes: vec![2],
            config,
        }
    }

    /// Limits in force for this oracle
    pub fn config(&self) -> &MatulaConfig {
        &self.config
    }

    /// Primes computed so far, ascending
    pub fn known_primes(&self) -> &[u64] {
        &self.primes
    }

    /// Largest prime in the table
    pub fn largest_known(&self) -> u64 {
        self.primes.last().copied().unwrap_or(2)
    }

    /// Primality test, answered from the table when `n` lies within it
    pub fn is_prime(&self, n: u64) -> bool {
        if n <= self.largest_known() {
            self.primes.binary_search(&n).is_ok()
        } else {
            self.trial_divide(n)
        }
    }

    /// The `n`th prime, 1-based (`1 → 2`, `2 → 3`, ...)
    pub fn nth_prime(&mut self, n: u64) -> Result<u64> {
        if n < 1 {
            return Err(MatulaError::InvalidArgument(
                "prime index must be >= 1".to_string(),
            ));
        }
        self.config.check_prime_index(n)?;

        let index = usize::try_from(n).map_err(|_| {
            MatulaError::InvalidArgument(format!("prime index {} is not addressable", n))
        })?;
        if index > self.primes.len() {
            self.extend_to_count(index);
        }
        Ok(self.primes[index - 1])
    }

    /// 1-based position of `p` in the prime sequence, 0 if `p` is not prime
    pub fn prime_to_index(&mut self, p: u64) -> u64 {
        if p < 2 || !self.is_prime(p) {
            return 0;
        }
        self.extend_past(p);
        match self.primes.binary_search(&p) {
            Ok(i) => i as u64 + 1,
            Err(_) => 0,
        }
    }

    /// All primes `<= bound`, ascending
    pub fn primes_up_to(&mut self, bound: u64) -> Vec<u64> {
        self.extend_past(bound);
        self.primes
            .iter()
            .copied()
            .take_while(|&p| p <= bound)
            .collect()
    }

    /// Prime factorization with multiplicity, ascending
    pub fn prime_factorization(&self, n: u64) -> Vec<u64> {
        super::prime_factorization(n)
    }

    /// Trial division by tabled primes, then by odd numbers past the table
    fn trial_divide(&self, n: u64) -> bool {
        if n < 2 {
            return false;
        }
        for &p in &self.primes {
            if p > n / p {
                return true;
            }
            if n % p == 0 {
                return false;
            }
        }

        let largest = self.largest_known();
        let mut d = if largest == 2 { 3 } else { largest + 2 };
        while d <= n / d {
            if n % d == 0 {
                return false;
            }
            d += 2;
        }
        true
    }

    fn next_prime_after_table(&self) -> u64 {
        let mut candidate = self.largest_known() + 1;
        while !self.trial_divide(candidate) {
            candidate += 1;
        }
        candidate
    }

    fn extend_to_count(&mut self, count: usize) {
        let before = self.primes.len();
        while self.primes.len() < count {
            let next = self.next_prime_after_table();
            self.primes.push(next);
        }
        self.log_growth(before);
    }

    fn extend_past(&mut self, value: u64) {
        let before = self.primes.len();
        while self.largest_known() < value {
            let next = self.next_prime_after_table();
            self.primes.push(next);
        }
        self.log_growth(before);
    }

    fn log_growth(&self, before: usize) {
        if self.primes.len() > before {
            debug!(
                from = before,
                to = self.primes.len(),
                largest = self.largest_known(),
                "extended prime table"
            );
        }
    }
}

impl Default for PrimeOracle {
    fn default() -> Self {
        Self::new()
    }
}

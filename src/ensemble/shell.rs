//! Prime shells: the nth prime viewed as the shell around its index

use super::enumerate::{divisors, partition_count, partitions};
use crate::matula::{persona, Persona};
use crate::primes::{prime_factorization, unique_factors, PrimeOracle};
use crate::Result;
use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

/// Largest index whose partitions are listed in full (p(40) = 37338)
pub const MAX_LISTED_PARTITIONS: u64 = 40;

/// Largest index whose partitions are counted, p(1000) < 2^128
pub const MAX_COUNTED_PARTITIONS: u64 = 1_000;

/// Factor shape of an integer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeStructure {
    /// Exactly one prime factor equal to the number itself
    pub is_prime: bool,
    /// Two or more prime factors
    pub is_composite: bool,
    /// Prime factors counted with multiplicity
    pub factor_count: usize,
    /// Distinct prime factors
    pub unique_factors: usize,
    /// Prime factors, ascending
    pub factors: Vec<u64>,
}

impl CompositeStructure {
    /// Shape of `n`
    pub fn of(n: u64) -> Self {
        let factors = prime_factorization(n);
        CompositeStructure {
            is_prime: factors.len() == 1 && factors[0] == n,
            is_composite: factors.len() > 1,
            factor_count: factors.len(),
            unique_factors: unique_factors(&factors).len(),
            factors,
        }
    }
}

/// Everything enumerable about an index
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ensemble {
    /// The index
    pub index: u64,
    /// Partitions of the index, empty past [`MAX_LISTED_PARTITIONS`]
    pub partitions: Vec<Vec<u32>>,
    /// Number of partitions of the index, 0 past [`MAX_COUNTED_PARTITIONS`]
    pub partition_count: u128,
    /// Divisors, ascending
    pub divisors: Vec<u64>,
    /// Prime factors, ascending
    pub prime_factorization: Vec<u64>,
    /// Factor shape
    pub composite: CompositeStructure,
}

impl Ensemble {
    /// Ensemble of `index`
    pub fn of(index: u64) -> Self {
        // both caps are far below u32::MAX
        let listed = if index <= MAX_LISTED_PARTITIONS {
            partitions(index as u32)
        } else {
            Vec::new()
        };
        let count = if index <= MAX_COUNTED_PARTITIONS {
            partition_count(index as u32).unwrap_or(0)
        } else {
            0
        };

        Ensemble {
            index,
            partitions: listed,
            partition_count: count,
            divisors: divisors(index),
            prime_factorization: prime_factorization(index),
            composite: CompositeStructure::of(index),
        }
    }
}

/// The prime at position `index`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimeShell {
    /// Position in the prime sequence, 1-based
    pub index: u64,
    /// The `index`th prime
    pub prime: u64,
}

impl PrimeShell {
    /// Shell around `index`
    pub fn at(index: u64, oracle: &mut PrimeOracle) -> Result<Self> {
        let prime = oracle.nth_prime(index)?;
        Ok(PrimeShell { index, prime })
    }

    /// Ensemble of the index this shell wraps
    pub fn ensemble(&self) -> Ensemble {
        Ensemble::of(self.index)
    }

    /// The irreducible value the index collapses to
    pub fn purify(&self) -> u64 {
        self.prime
    }

    /// Multiples of the prime up to `limit`
    pub fn project(&self, limit: u64) -> BTreeSet<u64> {
        (1..=limit / self.prime).map(|k| self.prime * k).collect()
    }

    /// Persona inherited from the index
    pub fn persona(&self, oracle: &mut PrimeOracle) -> Persona {
        persona(self.index, oracle)
    }
}

/// Shells for indices `1..=count`
pub fn prime_shells(count: u64, oracle: &mut PrimeOracle) -> Result<Vec<PrimeShell>> {
    (1..=count).map(|i| PrimeShell::at(i, oracle)).collect()
}

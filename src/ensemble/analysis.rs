//! Projection and prime-alphabet analysis

use super::shell::{Ensemble, PrimeShell};
use crate::matula::persona;
use crate::primes::PrimeOracle;
use std::fmt;
use serde::{Serialize, Deserialize};

/// How a prime shell reaches into its multiples
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionAnalysis {
    /// The prime
    pub prime: u64,
    /// Its index
    pub index: u64,
    /// Purified value, the prime itself
    pub purified: u64,
    /// Ensemble of the index
    pub ensemble: Ensemble,
    /// Multiples of the prime up to the limit, ascending
    pub multiples: Vec<u64>,
    /// Fraction of `1..=limit` covered by the multiples
    pub density: f64,
}

/// Analyze the projection of `shell` up to `limit`
pub fn analyze_projection(shell: &PrimeShell, limit: u64) -> ProjectionAnalysis {
    let multiples: Vec<u64> = shell.project(limit).into_iter().collect();
    let density = if limit > 0 {
        multiples.len() as f64 / limit as f64
    } else {
        0.0
    };

    ProjectionAnalysis {
        prime: shell.prime,
        index: shell.index,
        purified: shell.purify(),
        ensemble: shell.ensemble(),
        multiples,
        density,
    }
}

/// A prime in an alphabet together with the character of its index
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetEntry {
    /// Position in the prime sequence
    pub index: u64,
    /// The prime
    pub prime: u64,
    /// Character of the index
    pub character: String,
}

/// What a prime alphabet can express
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    /// Number of binary-based indices
    BinaryDepths(usize),
    /// Number of prime-power indices
    SquaredStructures(usize),
    /// Number of multi-prime indices
    MixedEnsembles(usize),
    /// Index 6 is reachable
    BinaryTernaryMix,
    /// Number of ternary-based indices
    TernaryForms(usize),
    /// Index 9 is reachable
    SquaredTernary,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::BinaryDepths(n) => write!(f, "Binary depths: {} levels", n),
            Capability::SquaredStructures(n) => write!(f, "Squared structures: {} types", n),
            Capability::MixedEnsembles(n) => write!(f, "Mixed ensembles: {} compositions", n),
            Capability::BinaryTernaryMix => write!(f, "Can mix binary and ternary (2×3 ensemble)"),
            Capability::TernaryForms(n) => write!(f, "Ternary operations: {} forms", n),
            Capability::SquaredTernary => write!(f, "Can invoke squared-ternary (3²)"),
        }
    }
}

/// Classification of every prime up to a bound by the persona of its index
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetAnalysis {
    /// Largest prime admitted
    pub prime_bound: u64,
    /// The primes, ascending
    pub primes: Vec<u64>,
    /// Entries with binary-based indices
    pub pure_binary: Vec<AlphabetEntry>,
    /// Entries with prime-power indices
    pub squared: Vec<AlphabetEntry>,
    /// Entries with multi-prime indices
    pub mixed: Vec<AlphabetEntry>,
    /// Entries with ternary-based indices
    pub ternary: Vec<AlphabetEntry>,
    /// Capabilities in discovery order
    pub capabilities: Vec<Capability>,
}

impl AlphabetAnalysis {
    /// Number of primes in the alphabet
    pub fn alphabet_size(&self) -> usize {
        self.primes.len()
    }

    /// Number of capabilities
    pub fn expressiveness(&self) -> usize {
        self.capabilities.len()
    }
}

/// Analyze the alphabet of primes `<= prime_bound`
///
/// An entry can land in several groups: index 6 is binary, ternary and
/// mixed at once.
pub fn analyze_alphabet(prime_bound: u64, oracle: &mut PrimeOracle) -> AlphabetAnalysis {
    let primes = oracle.primes_up_to(prime_bound);

    let mut pure_binary = Vec::new();
    let mut squared = Vec::new();
    let mut mixed = Vec::new();
    let mut ternary = Vec::new();

    for (i, &prime) in primes.iter().enumerate() {
        let index = i as u64 + 1;
        let p = persona(index, oracle);
        let entry = AlphabetEntry {
            index,
            prime,
            character: p.character,
        };

        if p.kind.is_binary() {
            pure_binary.push(entry.clone());
        }
        if p.kind.is_power() {
            squared.push(entry.clone());
        }
        if p.kind.is_mixed() {
            mixed.push(entry.clone());
        }
        if p.kind.is_ternary() {
            ternary.push(entry);
        }
    }

    let mut capabilities = vec![Capability::BinaryDepths(pure_binary.len())];
    if !squared.is_empty() {
        capabilities.push(Capability::SquaredStructures(squared.len()));
    }
    if !mixed.is_empty() {
        capabilities.push(Capability::MixedEnsembles(mixed.len()));
        if mixed.iter().any(|e| e.index == 6) {
            capabilities.push(Capability::BinaryTernaryMix);
        }
    }
    if !ternary.is_empty() {
        capabilities.push(Capability::TernaryForms(ternary.len()));
        if ternary.iter().any(|e| e.index == 9) {
            capabilities.push(Capability::SquaredTernary);
        }
    }

    AlphabetAnalysis {
        prime_bound,
        primes,
        pure_binary,
        squared,
        mixed,
        ternary,
        capabilities,
    }
}

//! Persona classification of an index by its compositional shape

use super::codec::encode;
use crate::primes::{prime_factorization, unique_factors, PrimeOracle};
use crate::Result;
use std::fmt;
use serde::{Serialize, Deserialize};

/// Shape class of an index's prime factorization
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonaKind {
    /// 0
    Void,
    /// 1
    Unit,
    /// The prime 2
    PureBinary,
    /// The prime 3
    PureTernary,
    /// Any other prime
    PurePrime(u64),
    /// 4
    SquaredBinary,
    /// 2^k for k >= 3
    PowerBinary(u32),
    /// 9
    SquaredTernary,
    /// 3^k for k >= 3
    PowerTernary(u32),
    /// p^k for a prime p >= 5 and k >= 2
    PrimePower {
        /// The repeated prime
        prime: u64,
        /// Its multiplicity
        power: u32,
    },
    /// 6
    MixedBinaryTernary,
    /// Any other product of two or more distinct primes
    MixedEnsemble,
}

impl PersonaKind {
    /// Built on 2
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            PersonaKind::PureBinary
                | PersonaKind::SquaredBinary
                | PersonaKind::PowerBinary(_)
                | PersonaKind::MixedBinaryTernary
        )
    }

    /// Built on 3
    pub fn is_ternary(&self) -> bool {
        matches!(
            self,
            PersonaKind::PureTernary
                | PersonaKind::SquaredTernary
                | PersonaKind::PowerTernary(_)
                | PersonaKind::MixedBinaryTernary
        )
    }

    /// A single prime raised to a power of two or more
    pub fn is_power(&self) -> bool {
        matches!(
            self,
            PersonaKind::SquaredBinary
                | PersonaKind::PowerBinary(_)
                | PersonaKind::SquaredTernary
                | PersonaKind::PowerTernary(_)
                | PersonaKind::PrimePower { .. }
        )
    }

    /// Two or more distinct primes
    pub fn is_mixed(&self) -> bool {
        matches!(
            self,
            PersonaKind::MixedBinaryTernary | PersonaKind::MixedEnsemble
        )
    }
}

impl fmt::Display for PersonaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonaKind::Void => write!(f, "void"),
            PersonaKind::Unit => write!(f, "unit"),
            PersonaKind::PureBinary => write!(f, "pure_binary"),
            PersonaKind::PureTernary => write!(f, "pure_ternary"),
            PersonaKind::PurePrime(p) => write!(f, "pure_prime_{}", p),
            PersonaKind::SquaredBinary => write!(f, "squared_binary"),
            PersonaKind::PowerBinary(_) => write!(f, "power_binary"),
            PersonaKind::SquaredTernary => write!(f, "squared_ternary"),
            PersonaKind::PowerTernary(_) => write!(f, "power_ternary"),
            PersonaKind::PrimePower { prime, .. } => write!(f, "power_{}", prime),
            PersonaKind::MixedBinaryTernary => write!(f, "mixed_binary_ternary"),
            PersonaKind::MixedEnsemble => write!(f, "mixed_ensemble"),
        }
    }
}

/// Persona of an index
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Matula tree notation
    pub structure: String,
    /// Descriptive character
    pub character: String,
    /// Shape class
    pub kind: PersonaKind,
    /// Prime factors with multiplicity, ascending
    pub factors: Vec<u64>,
    /// Distinct prime factors, ascending
    pub unique_factors: Vec<u64>,
}

/// One row of the persona table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaRow {
    /// The prime at `index`
    pub prime: u64,
    /// Position in the prime sequence
    pub index: u64,
    /// Matula notation of `index`
    pub structure: String,
    /// Character of `index`
    pub character: String,
    /// Shape class of `index`
    pub kind: PersonaKind,
}

/// Character text for indices that read differently from their class.
/// Only the text is replaced, never the kind.
fn character_override(n: u64) -> Option<&'static str> {
    match n {
        3 => Some("nested binary—φ's home"),
        5 => Some("triple nesting—deep recursion"),
        6 => Some("first mixed ensemble—2×3"),
        7 => Some("inherits 7's 'squared binary'"),
        10 => Some("2×5—binary-fibonacci liaison"),
        _ => None,
    }
}

fn classify(factors: &[u64], unique: &[u64]) -> (String, PersonaKind) {
    match (factors, unique) {
        ([], _) => ("void".to_string(), PersonaKind::Void),
        ([2], _) => (
            "pure binary—the first recursion".to_string(),
            PersonaKind::PureBinary,
        ),
        ([3], _) => ("pure ternary".to_string(), PersonaKind::PureTernary),
        ([p], _) => (format!("pure {}-adic", p), PersonaKind::PurePrime(*p)),
        (_, [2]) => {
            let power = factors.len() as u32;
            match power {
                2 => (
                    "binary squared—first composite index".to_string(),
                    PersonaKind::SquaredBinary,
                ),
                3 => ("binary cubed—pure 2³".to_string(), PersonaKind::PowerBinary(3)),
                _ => (
                    format!("binary to power {}", power),
                    PersonaKind::PowerBinary(power),
                ),
            }
        }
        (_, [3]) => {
            let power = factors.len() as u32;
            if power == 2 {
                ("ternary squared—3²".to_string(), PersonaKind::SquaredTernary)
            } else {
                (
                    format!("ternary to power {}", power),
                    PersonaKind::PowerTernary(power),
                )
            }
        }
        (_, [p]) => {
            let power = factors.len() as u32;
            (
                format!("{} to power {}", p, power),
                PersonaKind::PrimePower { prime: *p, power },
            )
        }
        ([2, 3], _) => (
            "first mixed ensemble—2×3".to_string(),
            PersonaKind::MixedBinaryTernary,
        ),
        _ if unique.contains(&2) && unique.contains(&3) => {
            ("binary-ternary mix".to_string(), PersonaKind::MixedEnsemble)
        }
        _ => (
            format!("heterogeneous mixing of {:?}", unique),
            PersonaKind::MixedEnsemble,
        ),
    }
}

/// Classify index `n`
pub fn persona(n: u64, oracle: &mut PrimeOracle) -> Persona {
    match n {
        0 => Persona {
            structure: "()".to_string(),
            character: "void".to_string(),
            kind: PersonaKind::Void,
            factors: Vec::new(),
            unique_factors: Vec::new(),
        },
        1 => Persona {
            structure: "()".to_string(),
            character: "unit/identity—the ur-shell".to_string(),
            kind: PersonaKind::Unit,
            factors: Vec::new(),
            unique_factors: Vec::new(),
        },
        _ => {
            let factors = prime_factorization(n);
            let unique = unique_factors(&factors);
            let (character, kind) = classify(&factors, &unique);
            let character = character_override(n)
                .map(str::to_string)
                .unwrap_or(character);

            Persona {
                structure: encode(n, oracle),
                character,
                kind,
                factors,
                unique_factors: unique,
            }
        }
    }
}

/// Personas of indices `1..=count` next to the primes that inherit them
pub fn persona_table(count: u64, oracle: &mut PrimeOracle) -> Result<Vec<PersonaRow>> {
    (1..=count)
        .map(|index| {
            let prime = oracle.nth_prime(index)?;
            let p = persona(index, oracle);
            Ok(PersonaRow {
                prime,
                index,
                structure: p.structure,
                character: p.character,
                kind: p.kind,
            })
        })
        .collect()
}

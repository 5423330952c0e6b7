//! # Matula-Ion: rooted trees as integers
//!
//! This library implements the Matula-Goebel correspondence between positive
//! integers and rooted unlabeled trees, and the counting structures built on
//! the same index space.
//!
//! ## Features
//!
//! - **Tree codec**: integer ↔ bracket notation, e.g. `6 ↔ (()(()))`
//! - **Prime oracle**: primality, nth prime and prime index with an
//!   append-only cache
//! - **Rooted tree counts**: OEIS A000081 for every term that fits in `u64`
//! - **Ion layers**: fiber/base decomposition of the tree counts with prime
//!   tower max shells
//! - **Personas and ensembles**: classification of an index by the shape of
//!   its factorization
//!
//! Every stateful operation takes an explicit [`PrimeOracle`]; the functions
//! re-exported at the crate root share one process-wide oracle instead.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Primality, nth prime and factorization
pub mod primes;

/// Rooted trees, tree counts, ion layers and prime towers
pub mod algebra;

/// Matula-Goebel codec and personas
pub mod matula;

/// Prime shells and index ensembles
pub mod ensemble;

/// Engine limits
pub mod config;

mod shared;

// Re-export commonly used types
pub use algebra::{rooted_trees_count, IonLayer, IonLayerEngine, Tree};
pub use config::MatulaConfig;
pub use primes::{is_prime, prime_factorization, PrimeOracle};
pub use shared::{
    decode_tree, encode_tree, graft_operation, ion_layer, nth_prime, persona, prime_to_index,
    prime_tower,
};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum MatulaError {
    /// An index or count outside its domain, e.g. `nth_prime(0)`
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Tree notation that is unbalanced, nested too deeply or contains
    /// foreign characters
    #[error("Invalid tree notation: {0}")]
    InvalidFormat(String),

    /// Tree count requested past the precomputed table
    #[error("Unsupported range: {requested} exceeds table maximum {max}")]
    UnsupportedRange {
        /// The order asked for
        requested: usize,
        /// The largest supported order
        max: usize,
    },

    /// A result that does not fit in `u64`
    #[error("Overflow: {0}")]
    Overflow(String),

    /// Malformed configuration
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, MatulaError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        algebra::{prime_tower, graft_operation, rooted_trees_count, IonLayer, IonLayerEngine, Tree},
        matula::{encode, decode, persona, Persona, PersonaKind},
        primes::{is_prime, prime_factorization, PrimeOracle},
        config::MatulaConfig,
        Result, MatulaError,
    };
}

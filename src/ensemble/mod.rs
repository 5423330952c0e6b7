//! Prime shells and the integer ensembles of their indices

mod enumerate;
mod shell;
mod analysis;

pub use enumerate::{divisors, partitions, partition_count};
pub use shell::{
    prime_shells, CompositeStructure, Ensemble, PrimeShell,
    MAX_COUNTED_PARTITIONS, MAX_LISTED_PARTITIONS,
};
pub use analysis::{
    analyze_alphabet, analyze_projection, AlphabetAnalysis, AlphabetEntry, Capability,
    ProjectionAnalysis,
};

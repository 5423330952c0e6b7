//! Process-wide default oracle and ion-layer memo
//!
//! The free functions here mirror the context-taking API for callers that
//! do not want to thread a [`PrimeOracle`] around. Locks are always taken
//! ion layers first, then oracle.

use crate::algebra::{self, IonLayer, IonLayerEngine};
use crate::matula::{self, Persona};
use crate::primes::PrimeOracle;
use crate::Result;
use std::sync::{Mutex, MutexGuard, PoisonError};
use once_cell::sync::Lazy;

static ORACLE: Lazy<Mutex<PrimeOracle>> = Lazy::new(|| Mutex::new(PrimeOracle::new()));

static ION_LAYERS: Lazy<Mutex<IonLayerEngine>> =
    Lazy::new(|| Mutex::new(IonLayerEngine::new()));

// Every cache write is append-only and idempotent, so a panic while a lock
// was held cannot leave a wrong entry behind.
fn oracle() -> MutexGuard<'static, PrimeOracle> {
    ORACLE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn ion_layers() -> MutexGuard<'static, IonLayerEngine> {
    ION_LAYERS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Tree notation of `n`
pub fn encode_tree(n: u64) -> String {
    matula::encode(n, &mut oracle())
}

/// Matula number of a tree notation
pub fn decode_tree(notation: &str) -> Result<u64> {
    matula::decode(notation, &mut oracle())
}

/// The `n`th prime, 1-based
pub fn nth_prime(n: u64) -> Result<u64> {
    oracle().nth_prime(n)
}

/// 1-based position of a prime, 0 if `p` is not prime
pub fn prime_to_index(p: u64) -> u64 {
    oracle().prime_to_index(p)
}

/// Ion layer at order `n`
pub fn ion_layer(n: usize) -> Result<IonLayer> {
    let mut engine = ion_layers();
    engine.layer(n, &mut oracle())
}

/// Prime tower with `depth` grafts after `seed`
pub fn prime_tower(seed: u64, depth: usize) -> Result<Vec<u64>> {
    algebra::prime_tower(seed, depth, &mut oracle())
}

/// Single unary graft, `nth_prime(m)`
pub fn graft_operation(m: u64) -> Result<u64> {
    algebra::graft_operation(m, &mut oracle())
}

/// Persona of index `n`
pub fn persona(n: u64) -> Persona {
    matula::persona(n, &mut oracle())
}

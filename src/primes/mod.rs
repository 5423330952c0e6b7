//! Prime oracle and trial-division factorization

mod oracle;
mod factorize;

pub use oracle::{PrimeOracle, is_prime};
pub use factorize::{prime_factorization, unique_factors};

//! Prime towers: iterated unary grafting

use crate::primes::PrimeOracle;
use crate::Result;

/// One unary graft: the Matula number `m` of a tree becomes `nth_prime(m)`,
/// the number of the same tree under a new root
pub fn graft_operation(m: u64, oracle: &mut PrimeOracle) -> Result<u64> {
    oracle.nth_prime(m)
}

/// `[seed, p(seed), p(p(seed)), ...]` with `depth` grafts after the seed
///
/// Elements grow roughly like an iterated exponential and no internal cap
/// is applied; bound `depth` (or set `max_prime_index`) before calling.
pub fn prime_tower(seed: u64, depth: usize, oracle: &mut PrimeOracle) -> Result<Vec<u64>> {
    let mut tower = vec![seed];

    let mut current = seed;
    for _ in 0..depth {
        current = graft_operation(current, oracle)?;
        tower.push(current);
    }

    Ok(tower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatulaConfig;
    use crate::MatulaError;

    #[test]
    fn test_tower_from_eight() {
        let mut oracle = PrimeOracle::new();
        assert_eq!(
            prime_tower(8, 4, &mut oracle).unwrap(),
            vec![8, 19, 67, 331, 2221]
        );
    }

    #[test]
    fn test_depth_zero_is_seed() {
        let mut oracle = PrimeOracle::new();
        assert_eq!(prime_tower(0, 0, &mut oracle).unwrap(), vec![0]);
        assert_eq!(prime_tower(5, 0, &mut oracle).unwrap(), vec![5]);
    }

    #[test]
    fn test_tower_from_one_is_path_numbers() {
        let mut oracle = PrimeOracle::new();
        assert_eq!(
            prime_tower(1, 8, &mut oracle).unwrap(),
            vec![1, 2, 3, 5, 11, 31, 127, 709, 5381]
        );
    }

    #[test]
    fn test_zero_seed_fails() {
        let mut oracle = PrimeOracle::new();
        assert!(matches!(
            prime_tower(0, 1, &mut oracle),
            Err(MatulaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_huge_depth_fails_on_first_graft() {
        let mut oracle = PrimeOracle::new();
        assert!(matches!(
            prime_tower(0, usize::MAX / 16, &mut oracle),
            Err(MatulaError::InvalidArgument(_))
        ));
        assert!(matches!(
            prime_tower(0, usize::MAX, &mut oracle),
            Err(MatulaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_tower_stops_at_configured_cap() {
        let mut oracle = PrimeOracle::with_config(MatulaConfig {
            max_prime_index: Some(1_000),
            ..MatulaConfig::default()
        });
        assert!(prime_tower(8, 3, &mut oracle).is_ok());
        // the fourth graft needs the 2221st prime
        assert!(prime_tower(8, 4, &mut oracle).is_err());
    }
}

//! Engine limits for the prime oracle and the tree codec

use serde::{Serialize, Deserialize};

/// Default deepest nesting accepted when decoding a tree notation
pub const DEFAULT_MAX_TREE_DEPTH: usize = 32;

/// Limits applied by a [`PrimeOracle`](crate::primes::PrimeOracle) and the codec built on it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatulaConfig {
    /// Deepest parenthesis nesting `decode` accepts
    pub max_tree_depth: usize,
    /// Largest argument `nth_prime` will compute, `None` for no cap
    pub max_prime_index: Option<u64>,
}

impl MatulaConfig {
    /// Preset for resource-constrained hosts
    ///
    /// Decoding a path of depth `d` needs the prime at the Matula number of
    /// the depth `d - 1` path, which grows roughly like an iterated
    /// exponential. Capping both depth and prime index keeps every call
    /// within a few seconds of trial division.
    pub fn bounded() -> Self {
        MatulaConfig {
            max_tree_depth: 16,
            max_prime_index: Some(10_000_000),
        }
    }

    /// No caps besides the default nesting depth
    pub fn unbounded() -> Self {
        MatulaConfig {
            max_tree_depth: usize::MAX,
            max_prime_index: None,
        }
    }

    /// Parse a config from JSON, missing fields take their defaults
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the config to pretty JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check an `nth_prime` argument against `max_prime_index`
    pub(crate) fn check_prime_index(&self, n: u64) -> crate::Result<()> {
        match self.max_prime_index {
            Some(max) if n > max => Err(crate::MatulaError::InvalidArgument(format!(
                "prime index {} exceeds configured limit {}",
                n, max
            ))),
            _ => Ok(()),
        }
    }
}

impl Default for MatulaConfig {
    fn default() -> Self {
        MatulaConfig {
            max_tree_depth: DEFAULT_MAX_TREE_DEPTH,
            max_prime_index: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_prime_cap() {
        let cfg = MatulaConfig::default();
        assert_eq!(cfg.max_tree_depth, DEFAULT_MAX_TREE_DEPTH);
        assert!(cfg.check_prime_index(u64::MAX).is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let cfg = MatulaConfig::from_json(r#"{ "max_prime_index": 100 }"#).unwrap();
        assert_eq!(cfg.max_tree_depth, DEFAULT_MAX_TREE_DEPTH);
        assert_eq!(cfg.max_prime_index, Some(100));
        assert!(cfg.check_prime_index(100).is_ok());
        assert!(cfg.check_prime_index(101).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = MatulaConfig::bounded();
        let json = cfg.to_json().unwrap();
        assert_eq!(MatulaConfig::from_json(&json).unwrap(), cfg);
    }

    #[test]
    fn test_malformed_json() {
        let err = MatulaConfig::from_json("{ max_tree_depth: }").unwrap_err();
        assert!(matches!(err, crate::MatulaError::Config(_)));
    }
}

//! Integer <-> tree notation bijection

use crate::algebra::Tree;
use crate::primes::PrimeOracle;
use crate::Result;
use tracing::trace;

/// Tree notation of `n`; `0` and `1` both give the single node `()`
///
/// The root's subtrees are the encodings of the prime indices of `n`'s
/// prime factors, in ascending factor order.
pub fn encode(n: u64, oracle: &mut PrimeOracle) -> String {
    Tree::from_matula(n, oracle).to_notation()
}

/// Matula number of a tree notation
///
/// Malformed input fails with `InvalidFormat` (never a best guess), a
/// result past `u64` with `Overflow`.
pub fn decode(notation: &str, oracle: &mut PrimeOracle) -> Result<u64> {
    let tree = Tree::parse(notation, oracle.config().max_tree_depth)?;
    trace!(nodes = tree.size(), height = tree.height(), "decoding tree");
    tree.matula_number(oracle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatulaConfig;
    use crate::MatulaError;

    #[test]
    fn test_encode_small() {
        let mut oracle = PrimeOracle::new();
        let expected = [
            (0, "()"),
            (1, "()"),
            (2, "(())"),
            (3, "((()))"),
            (4, "(()())"),
            (5, "(((())))"),
            (6, "(()(()))"),
            (7, "((()()))"),
            (8, "(()()())"),
        ];
        for (n, tree) in expected {
            assert_eq!(encode(n, &mut oracle), tree, "encode({})", n);
        }
    }

    #[test]
    fn test_decode_small() {
        let mut oracle = PrimeOracle::new();
        assert_eq!(decode("()", &mut oracle).unwrap(), 1);
        assert_eq!(decode("", &mut oracle).unwrap(), 1);
        assert_eq!(decode("(())", &mut oracle).unwrap(), 2);
        assert_eq!(decode(" (()(())) ", &mut oracle).unwrap(), 6);
    }

    #[test]
    fn test_decode_ignores_child_order() {
        let mut oracle = PrimeOracle::new();
        assert_eq!(decode("((())())", &mut oracle).unwrap(), 6);
    }

    #[test]
    fn test_round_trip() {
        let mut oracle = PrimeOracle::new();
        for n in 1..=1_000u64 {
            let tree = encode(n, &mut oracle);
            assert_eq!(decode(&tree, &mut oracle).unwrap(), n, "via {}", tree);
        }
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let mut oracle = PrimeOracle::new();
        for bad in ["(()", "())", "()()", "(1)", "abc", ")"] {
            assert!(
                matches!(decode(bad, &mut oracle), Err(MatulaError::InvalidFormat(_))),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_decode_depth_limit() {
        let mut oracle = PrimeOracle::with_config(MatulaConfig {
            max_tree_depth: 4,
            ..MatulaConfig::default()
        });
        assert_eq!(decode("(((())))", &mut oracle).unwrap(), 5);
        assert!(matches!(
            decode("((((()))))", &mut oracle),
            Err(MatulaError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_overflow() {
        let mut oracle = PrimeOracle::new();
        // 2^64 as sixty-four leaf children
        let wide = format!("({})", "()".repeat(64));
        assert!(matches!(
            decode(&wide, &mut oracle),
            Err(MatulaError::Overflow(_))
        ));
        let fits = format!("({})", "()".repeat(63));
        assert_eq!(decode(&fits, &mut oracle).unwrap(), 1u64 << 63);
    }
}

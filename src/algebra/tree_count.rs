//! Rooted unlabeled tree counts (OEIS A000081)

use crate::{MatulaError, Result};

/// A000081(n) for n = 1..=47, every term that fits in `u64`
const ROOTED_TREES: [u64; 47] = [
    1,
    1,
    2,
    4,
    9,
    20,
    48,
    115,
    286,
    719,
    1842,
    4766,
    12486,
    32973,
    87811,
    235381,
    634847,
    1721159,
    4688676,
    12826228,
    35221832,
    97055181,
    268282855,
    743724984,
    2067174645,
    5759636510,
    16083734329,
    45007066269,
    126186554308,
    354426847597,
    997171512998,
    2809934352700,
    7929819784355,
    22409533673568,
    63411730258053,
    179655930440464,
    509588049810620,
    1447023384581029,
    4113254119923150,
    11703780079612453,
    33333125878283632,
    95020085893954917,
    271097737169671824,
    774088023431472074,
    2212039245722726118,
    6325843306177425928,
    18103111141539779470,
];

/// Largest node count with a tabled tree count
pub const MAX_TREE_ORDER: usize = ROOTED_TREES.len();

/// Number of rooted unlabeled trees with `n` nodes
///
/// Fails with `InvalidArgument` for `n == 0` and `UnsupportedRange` past
/// [`MAX_TREE_ORDER`]; no approximation is ever returned.
pub fn rooted_trees_count(n: usize) -> Result<u64> {
    if n == 0 {
        return Err(MatulaError::InvalidArgument(
            "tree node count must be >= 1".to_string(),
        ));
    }
    ROOTED_TREES
        .get(n - 1)
        .copied()
        .ok_or(MatulaError::UnsupportedRange {
            requested: n,
            max: MAX_TREE_ORDER,
        })
}

/// Tree counts for 1..=n nodes
pub fn rooted_trees_counts(n: usize) -> Result<Vec<u64>> {
    (1..=n).map(rooted_trees_count).collect()
}

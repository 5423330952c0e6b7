//! Ion layers: per-order fiber/base decomposition of the rooted tree counts

use super::tree_count::{rooted_trees_count, MAX_TREE_ORDER};
use super::tower::graft_operation;
use crate::primes::PrimeOracle;
use crate::{MatulaError, Result};
use serde::{Serialize, Deserialize};
use tracing::{debug, trace};

/// Highest order with a tabled total (`total(n) = A000081(n + 1)`)
pub const MAX_ION_ORDER: usize = MAX_TREE_ORDER - 1;

/// One ion layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IonLayer {
    /// Order n
    pub order: usize,
    /// Tree count carried over from order n - 1
    pub fiber: u64,
    /// Trees introduced at this order
    pub base: u64,
    /// Cumulative tree count, A000081(n + 1)
    pub total: u64,
    /// Top of the prime tower reachable at this order
    pub max: u64,
}

impl IonLayer {
    /// The order-0 layer everything grows from
    pub const GROUND: IonLayer = IonLayer {
        order: 0,
        fiber: 0,
        base: 1,
        total: 1,
        max: 1,
    };

    /// `fiber + base == total`
    pub fn is_consistent(&self) -> bool {
        self.fiber.checked_add(self.base) == Some(self.total)
    }

    /// Layer at the following order
    ///
    /// Max shells are seeded as `2^n` up to order 3 and held at 8 for
    /// order 4; from order 5 on each is the graft of the previous one.
    fn successor(&self, oracle: &mut PrimeOracle) -> Result<IonLayer> {
        let order = self.order + 1;
        let total = rooted_trees_count(order + 1)?;
        let fiber = self.total;
        let max = match order {
            0..=3 => 1u64 << order,
            4 => 8,
            _ => graft_operation(self.max, oracle)?,
        };

        Ok(IonLayer {
            order,
            fiber,
            base: total - fiber,
            total,
            max,
        })
    }
}

/// Forward-only memo of ion layers
///
/// Layers are computed in increasing order from the last cached one and
/// never recomputed. A failed extension leaves the memo as it was.
#[derive(Clone, Debug, Default)]
pub struct IonLayerEngine {
    layers: Vec<IonLayer>,
}

impl IonLayerEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        IonLayerEngine { layers: Vec::new() }
    }

    /// Number of orders computed so far
    pub fn cached_orders(&self) -> usize {
        self.layers.len()
    }

    /// Ion layer at order `n`
    pub fn layer(&mut self, n: usize, oracle: &mut PrimeOracle) -> Result<IonLayer> {
        if let Some(layer) = self.layers.get(n) {
            return Ok(*layer);
        }
        if n > MAX_ION_ORDER {
            return Err(MatulaError::UnsupportedRange {
                requested: n,
                max: MAX_ION_ORDER,
            });
        }

        let from = self.layers.len();
        debug!(from, to = n, "extending ion layers");

        let mut fresh = Vec::with_capacity(n + 1 - from);
        let mut current = match self.layers.last() {
            Some(last) => last.successor(oracle)?,
            None => IonLayer::GROUND,
        };
        loop {
            trace!(
                order = current.order,
                fiber = current.fiber,
                base = current.base,
                total = current.total,
                max = current.max,
                "ion layer"
            );
            fresh.push(current);
            if current.order == n {
                break;
            }
            current = current.successor(oracle)?;
        }

        self.layers.extend(fresh);
        Ok(current)
    }

    /// Ion layers for orders `0..=n`
    pub fn layers(&mut self, n: usize, oracle: &mut PrimeOracle) -> Result<Vec<IonLayer>> {
        self.layer(n, oracle)?;
        Ok(self.layers[..=n].to_vec())
    }
}

//! Rooted trees, their counts, ion layers and prime towers

mod tree;
mod tree_count;
mod ion_layer;
mod tower;

pub use tree::Tree;
pub use tree_count::{rooted_trees_count, rooted_trees_counts, MAX_TREE_ORDER};
pub use ion_layer::{IonLayer, IonLayerEngine, MAX_ION_ORDER};
pub use tower::{graft_operation, prime_tower};

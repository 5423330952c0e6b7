//! Rooted tree data structure and operations

use crate::config::DEFAULT_MAX_TREE_DEPTH;
use crate::primes::{prime_factorization, PrimeOracle};
use crate::{MatulaError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use tracing::warn;

/// A rooted unlabeled tree represented as an adjacency list
///
/// - Node 0 is always the root
/// - Every child has a larger index than its parent
/// - Children are kept in insertion order, which for trees built from a
///   Matula number is ascending prime-factor order
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Tree {
    /// Adjacency list: children[i] contains indices of node i's children
    children: Vec<Vec<usize>>,
}

/// Step of the iterative notation writer
enum Step {
    Enter(usize),
    Leave,
}

impl Tree {
    /// Create a new tree with a single root node
    pub fn new() -> Self {
        Tree {
            children: vec![Vec::new()],
        }
    }

    /// Parse bracket notation such as `(()(()))`
    ///
    /// Surrounding whitespace is ignored and the empty string is the single
    /// node. Anything else must be exactly one balanced `(...)` group made
    /// of `(` and `)` only, nested at most `max_depth` levels.
    pub fn parse(notation: &str, max_depth: usize) -> Result<Self> {
        let s = notation.trim();
        if s.is_empty() {
            return Ok(Tree::new());
        }

        let mut children: Vec<Vec<usize>> = Vec::new();
        let mut open: Vec<usize> = Vec::new();
        let mut root_closed = false;

        for (pos, ch) in s.char_indices() {
            match ch {
                '(' => {
                    if root_closed {
                        return Err(MatulaError::InvalidFormat(format!(
                            "content after the root closes at position {}",
                            pos
                        )));
                    }
                    let node = children.len();
                    children.push(Vec::new());
                    if let Some(&parent) = open.last() {
                        children[parent].push(node);
                    }
                    open.push(node);
                    if open.len() > max_depth {
                        warn!(max_depth, "tree notation nested too deeply");
                        return Err(MatulaError::InvalidFormat(format!(
                            "nesting exceeds maximum depth {}",
                            max_depth
                        )));
                    }
                }
                ')' => {
                    if open.pop().is_none() {
                        return Err(MatulaError::InvalidFormat(format!(
                            "unmatched ')' at position {}",
                            pos
                        )));
                    }
                    if open.is_empty() {
                        root_closed = true;
                    }
                }
                other => {
                    return Err(MatulaError::InvalidFormat(format!(
                        "unexpected character {:?} at position {}",
                        other, pos
                    )));
                }
            }
        }

        if !open.is_empty() {
            return Err(MatulaError::InvalidFormat(format!(
                "{} unclosed '('",
                open.len()
            )));
        }

        Ok(Tree { children })
    }

    /// Build the tree whose Matula number is `n` (`0` and `1` give the single node)
    pub fn from_matula(n: u64, oracle: &mut PrimeOracle) -> Self {
        let mut children = vec![Vec::new()];
        let mut pending = vec![(0usize, n)];

        while let Some((node, value)) = pending.pop() {
            for p in prime_factorization(value) {
                let child = children.len();
                children.push(Vec::new());
                children[node].push(child);
                pending.push((child, oracle.prime_to_index(p)));
            }
        }

        Tree { children }
    }

    /// Matula number of this tree
    ///
    /// A node's number is the product of `nth_prime` of its children's
    /// numbers; leaves are 1. Fails with `Overflow` past `u64`.
    pub fn matula_number(&self, oracle: &mut PrimeOracle) -> Result<u64> {
        let mut values = vec![1u64; self.size()];

        // children always follow their parent, so a reverse sweep is post-order
        for node in (0..self.size()).rev() {
            let mut value = 1u64;
            for &child in &self.children[node] {
                let prime = oracle.nth_prime(values[child])?;
                value = value.checked_mul(prime).ok_or_else(|| {
                    MatulaError::Overflow(format!(
                        "Matula number of a {}-node tree exceeds u64",
                        self.size()
                    ))
                })?;
            }
            values[node] = value;
        }

        Ok(values[0])
    }

    /// Bracket notation, children written in stored order
    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(2 * self.size());
        let mut steps = vec![Step::Enter(0)];

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(node) => {
                    out.push('(');
                    steps.push(Step::Leave);
                    for &child in self.children[node].iter().rev() {
                        steps.push(Step::Enter(child));
                    }
                }
                Step::Leave => out.push(')'),
            }
        }

        out
    }

    /// Get the number of nodes
    pub fn size(&self) -> usize {
        self.children.len()
    }

    /// Get children of a node
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.size()`.
    pub fn children(&self, node: usize) -> &[usize] {
        &self.children[node]
    }

    /// Depth of each node, root at 0
    pub fn depths(&self) -> Vec<usize> {
        let mut depths = vec![0; self.size()];
        for node in 0..self.size() {
            for &child in &self.children[node] {
                depths[child] = depths[node] + 1;
            }
        }
        depths
    }

    /// Maximum depth of the tree
    pub fn height(&self) -> usize {
        self.depths().into_iter().max().unwrap_or(0)
    }

    /// Count of leaf nodes
    pub fn leaf_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_empty()).count()
    }

    /// Add a new root above this tree (unary grafting)
    ///
    /// The Matula number of the result is `nth_prime` of this tree's number.
    pub fn graft_root(&self) -> Tree {
        let mut children = Vec::with_capacity(self.size() + 1);
        children.push(vec![1]);
        for child_list in &self.children {
            children.push(child_list.iter().map(|&c| c + 1).collect());
        }
        Tree { children }
    }

    /// Apply natural growth operator N: attach a new leaf at each node
    pub fn graft_all_leaves(&self) -> Vec<Tree> {
        let n_nodes = self.size();
        let mut result = Vec::with_capacity(n_nodes);

        for attach_point in 0..n_nodes {
            let mut new_children = self.children.clone();
            new_children.push(Vec::new());
            new_children[attach_point].push(n_nodes);
            result.push(Tree { children: new_children });
        }

        result
    }

    /// Check if this tree is isomorphic to another
    pub fn is_isomorphic(&self, other: &Tree) -> bool {
        self.size() == other.size() && self.canonical_form() == other.canonical_form()
    }

    /// Notation with every child list sorted, equal for isomorphic trees
    pub fn canonical_form(&self) -> String {
        let mut forms = vec![String::new(); self.size()];

        for node in (0..self.size()).rev() {
            let mut child_forms: Vec<String> = self.children[node]
                .iter()
                .map(|&child| std::mem::take(&mut forms[child]))
                .collect();
            child_forms.sort();
            forms[node] = format!("({})", child_forms.concat());
        }

        std::mem::take(&mut forms[0])
    }

    /// All non-isomorphic rooted trees with `k` nodes, by natural growth
    pub fn trees_of_size(k: usize) -> Vec<Tree> {
        if k == 0 {
            return Vec::new();
        }

        let mut level = vec![Tree::new()];
        for _ in 1..k {
            let mut next = BTreeMap::new();
            for tree in &level {
                for grown in tree.graft_all_leaves() {
                    next.entry(grown.canonical_form()).or_insert(grown);
                }
            }
            level = next.into_values().collect();
        }
        level
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tree(size={}, {})", self.size(), self.to_notation())
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

impl FromStr for Tree {
    type Err = MatulaError;

    fn from_str(s: &str) -> Result<Self> {
        Tree::parse(s, DEFAULT_MAX_TREE_DEPTH)
    }
}

impl TryFrom<String> for Tree {
    type Error = MatulaError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Tree> for String {
    fn from(tree: Tree) -> Self {
        tree.to_notation()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

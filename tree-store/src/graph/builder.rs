//! Materialization of closure edges into a tree.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Edge, Tree};

/// Group closure edges into a per-node set of direct children.
///
/// Deterministic and side-effect-free; never fails for any finite edge
/// sequence, cyclic input included, since no traversal happens here.
/// Duplicate input edges collapse into the set. Nodes without outgoing
/// edges produce no entry — the root included, so a childless root yields
/// an empty mapping rather than an empty set under its key.
pub fn build_tree(root_id: i32, edges: &[Edge]) -> Tree {
    let mut children: BTreeMap<i32, BTreeSet<i32>> = BTreeMap::new();
    for edge in edges {
        children.entry(edge.from_id).or_default().insert(edge.to_id);
    }

    Tree::new(root_id, children)
}

//! Edge and Tree entities.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Directed parent → child relation instance.
///
/// Nodes have no standalone existence; they are implicit in the edge set.
/// The store guarantees at most one edge per `(from_id, to_id)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub from_id: i32,
    pub to_id: i32,
}

impl Edge {
    pub fn new(from_id: i32, to_id: i32) -> Self {
        Edge { from_id, to_id }
    }
}

/// Result of a subtree query: the direct children of every node discovered
/// below `root_id`.
///
/// A node appears as a key only if it has at least one outgoing edge in the
/// closure, so leaf nodes are absent rather than mapped to an empty set. The
/// root follows the same rule: a childless root yields an empty mapping.
/// Derived and caller-owned; holds no reference back to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    pub root_id: i32,
    pub children: BTreeMap<i32, BTreeSet<i32>>,
}

impl Tree {
    pub fn new(root_id: i32, children: BTreeMap<i32, BTreeSet<i32>>) -> Self {
        Tree { root_id, children }
    }

    /// Tree with no discovered children.
    pub fn empty(root_id: i32) -> Self {
        Tree {
            root_id,
            children: BTreeMap::new(),
        }
    }
}

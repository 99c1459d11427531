//! Forward transitive closure of the edge relation.

use std::collections::HashSet;

use tracing::debug;

use crate::model::Edge;
use crate::storage::{EdgeStore, Result};

/// Compute all edges reachable by forward traversal from `root_id`.
///
/// Level-by-level BFS: each round fetches the outgoing edges of the current
/// frontier in a single store round trip, collects them, and advances the
/// frontier to the targets that have not been expanded yet. A node is
/// expanded at most once, so the traversal terminates on cyclic and
/// self-referential data; back-edges into already-expanded nodes still
/// belong to the closure and are collected.
///
/// The number of round trips is proportional to the depth of the subtree.
/// The first failed round trip aborts the traversal and propagates.
pub async fn closure_from<S: EdgeStore + ?Sized>(store: &S, root_id: i32) -> Result<Vec<Edge>> {
    let mut visited: HashSet<i32> = HashSet::new();
    let mut frontier: Vec<i32> = vec![root_id];
    let mut collected: Vec<Edge> = Vec::new();

    visited.insert(root_id);

    while !frontier.is_empty() {
        let edges = store.edges_from(&frontier).await?;
        debug!(
            "Expanded {} node(s) into {} edge(s)",
            frontier.len(),
            edges.len()
        );

        let mut next = Vec::new();
        for edge in edges {
            if visited.insert(edge.to_id) {
                next.push(edge.to_id);
            }
            collected.push(edge);
        }
        frontier = next;
    }

    Ok(collected)
}

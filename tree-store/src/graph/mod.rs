//! Subtree resolution over the edge relation.
//!
//! This module contains the query path of the service:
//! - [`closure_from`]: forward transitive closure of the stored edges,
//!   computed as a level-by-level BFS against the store
//! - [`build_tree`]: pure grouping of closure edges into a child adjacency
//!   mapping
//! - [`subtree`]: the two composed, as served to callers

mod builder;
mod closure;

pub use builder::build_tree;
pub use closure::closure_from;

use crate::model::Tree;
use crate::storage::{EdgeStore, Result};

/// Resolve the subtree rooted at `root_id`.
///
/// Computes the forward closure of the edge relation and materializes it as
/// a [`Tree`]. A root with no outgoing edges yields an empty mapping, not an
/// error; root existence is never checked, since nodes are implicit in the
/// edge set.
pub async fn subtree<S: EdgeStore + ?Sized>(store: &S, root_id: i32) -> Result<Tree> {
    let edges = closure_from(store, root_id).await?;
    Ok(build_tree(root_id, &edges))
}

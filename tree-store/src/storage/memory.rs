//! In-memory edge store for testing and local development.
//!
//! `MemoryEdgeStore` upholds the same contract as the Postgres backend and
//! can be pre-populated with edges, allowing the traversal and the HTTP
//! handlers to be tested without a database.

use std::collections::BTreeSet;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{EdgeStore, Result, StoreError};
use crate::model::Edge;

/// Edge store backed by an in-memory set.
pub struct MemoryEdgeStore {
    edges: RwLock<BTreeSet<(i32, i32)>>,
}

impl MemoryEdgeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        MemoryEdgeStore {
            edges: RwLock::new(BTreeSet::new()),
        }
    }

    /// Create a store pre-populated with the given `(from_id, to_id)` pairs.
    pub fn with_edges(edges: impl IntoIterator<Item = (i32, i32)>) -> Self {
        MemoryEdgeStore {
            edges: RwLock::new(edges.into_iter().collect()),
        }
    }

    /// Whether the exact edge is currently stored.
    pub fn contains(&self, from_id: i32, to_id: i32) -> bool {
        self.edges.read().unwrap().contains(&(from_id, to_id))
    }

    /// Number of stored edges.
    pub fn len(&self) -> usize {
        self.edges.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryEdgeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EdgeStore for MemoryEdgeStore {
    async fn insert_edge(&self, from_id: i32, to_id: i32) -> Result<()> {
        let mut edges = self.edges.write().unwrap();
        if !edges.insert((from_id, to_id)) {
            return Err(StoreError::DuplicateEdge { from_id, to_id });
        }
        Ok(())
    }

    async fn delete_edge(&self, from_id: i32, to_id: i32) -> Result<()> {
        let mut edges = self.edges.write().unwrap();
        if !edges.remove(&(from_id, to_id)) {
            return Err(StoreError::EdgeNotFound { from_id, to_id });
        }
        Ok(())
    }

    async fn edges_from(&self, sources: &[i32]) -> Result<Vec<Edge>> {
        let edges = self.edges.read().unwrap();
        Ok(edges
            .iter()
            .filter(|(from_id, _)| sources.contains(from_id))
            .map(|&(from_id, to_id)| Edge::new(from_id, to_id))
            .collect())
    }
}

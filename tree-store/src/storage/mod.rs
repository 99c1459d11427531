//! Edge persistence backends.
//!
//! [`EdgeStore`] abstracts the storage engine so the traversal and the HTTP
//! layer can be exercised against [`MemoryEdgeStore`] while production runs
//! on [`PostgresEdgeStore`].

pub mod memory;
pub mod postgres;

pub use memory::MemoryEdgeStore;
pub use postgres::PostgresEdgeStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Edge;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("edge from {from_id} to {to_id} already exists")]
    DuplicateEdge { from_id: i32, to_id: i32 },
    #[error("edge from {from_id} to {to_id} does not exist")]
    EdgeNotFound { from_id: i32, to_id: i32 },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage abstraction over the directed edge set.
///
/// Implementations must uphold pair uniqueness atomically: of any number of
/// concurrent inserts for the same pair, exactly one succeeds and the rest
/// observe [`StoreError::DuplicateEdge`].
#[async_trait]
pub trait EdgeStore: Send + Sync {
    /// Insert a directed edge. Fails with [`StoreError::DuplicateEdge`] if
    /// the pair is already stored; no mutation occurs on failure.
    async fn insert_edge(&self, from_id: i32, to_id: i32) -> Result<()>;

    /// Remove the exact edge. Fails with [`StoreError::EdgeNotFound`] if no
    /// matching pair is stored; no mutation occurs on failure.
    async fn delete_edge(&self, from_id: i32, to_id: i32) -> Result<()>;

    /// Fetch every stored edge whose source is one of `sources`.
    ///
    /// One call per traversal frontier; implementations should answer it
    /// with an indexed lookup rather than a scan.
    async fn edges_from(&self, sources: &[i32]) -> Result<Vec<Edge>>;
}

//! Directed edge storage and subtree resolution.
//!
//! This crate provides:
//! - [`Edge`] and [`Tree`]: the stored parent → child relation and the derived
//!   per-query adjacency snapshot
//! - [`EdgeStore`]: async storage abstraction with a Postgres backend for
//!   production and an in-memory backend for tests and local development
//! - [`closure_from`] / [`build_tree`] / [`subtree`]: forward transitive
//!   closure over the edge relation and its materialization as a tree

pub mod graph;
pub mod model;
pub mod storage;

// Re-export commonly used types
pub use graph::{build_tree, closure_from, subtree};
pub use model::{Edge, Tree};
pub use storage::{EdgeStore, MemoryEdgeStore, PostgresEdgeStore, StoreError};

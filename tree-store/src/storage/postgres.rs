//! Postgres-backed edge store.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};

use super::{EdgeStore, Result, StoreError};
use crate::model::Edge;

#[derive(sqlx::FromRow)]
struct EdgeRow {
    from_id: i32,
    to_id: i32,
}

/// Edge store backed by a pooled Postgres connection.
///
/// Pair uniqueness is enforced by the primary key; conflicting inserts are
/// detected through `ON CONFLICT DO NOTHING` reporting zero affected rows,
/// so no application-level locking is involved.
pub struct PostgresEdgeStore {
    pool: sqlx::Pool<Postgres>,
}

impl PostgresEdgeStore {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .connect(database_url)
            .await?;

        Ok(PostgresEdgeStore { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ensure the edge table exists.
    ///
    /// The composite primary key doubles as the source-id index the
    /// level-by-level traversal relies on.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS edges (
                from_id INTEGER NOT NULL,
                to_id INTEGER NOT NULL,
                PRIMARY KEY (from_id, to_id)
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl EdgeStore for PostgresEdgeStore {
    async fn insert_edge(&self, from_id: i32, to_id: i32) -> Result<()> {
        let result =
            sqlx::query("INSERT INTO edges (from_id, to_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
                .bind(from_id)
                .bind(to_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::DuplicateEdge { from_id, to_id });
        }

        Ok(())
    }

    async fn delete_edge(&self, from_id: i32, to_id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM edges WHERE from_id = $1 AND to_id = $2")
            .bind(from_id)
            .bind(to_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::EdgeNotFound { from_id, to_id });
        }

        Ok(())
    }

    async fn edges_from(&self, sources: &[i32]) -> Result<Vec<Edge>> {
        let rows =
            sqlx::query_as::<_, EdgeRow>("SELECT from_id, to_id FROM edges WHERE from_id = ANY($1)")
                .bind(sources)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|row| Edge::new(row.from_id, row.to_id))
            .collect())
    }
}

// HTTP request handlers
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use tree_store::graph;
use tree_store::storage::{EdgeStore, StoreError};

use crate::server::state::AppState;

/// Error payload returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub reason: String,
}

/// HTTP request payload for edge creation and deletion
///
/// Both ids are optional at the serde level so that a missing field reaches
/// [`EdgeRequest::validated`] and maps to a 400 instead of a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRequest {
    pub source_id: Option<i32>,
    pub target_id: Option<i32>,
}

impl EdgeRequest {
    /// The validated (sourceId, targetId) pair, or None if either field is
    /// missing or negative.
    fn validated(&self) -> Option<(i32, i32)> {
        match (self.source_id, self.target_id) {
            (Some(source_id), Some(target_id)) if source_id >= 0 && target_id >= 0 => {
                Some((source_id, target_id))
            }
            _ => None,
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Tree service is running")
}

/// GET /tree/{node_id} - resolve the subtree rooted at a node
pub async fn get_tree(State(state): State<AppState>, Path(node_id): Path<i32>) -> Response {
    info!("Received request to fetch subtree with root id {}.", node_id);

    if node_id < 0 {
        return invalid_request();
    }

    match graph::subtree(state.store.as_ref(), node_id).await {
        Ok(tree) => (StatusCode::OK, Json(tree)).into_response(),
        Err(e) => store_error_response(e),
    }
}

/// POST /tree/edges - create a directed edge
pub async fn create_edge(
    State(state): State<AppState>,
    Json(payload): Json<EdgeRequest>,
) -> Response {
    let Some((source_id, target_id)) = payload.validated() else {
        info!("Rejected create request with payload {:?}", payload);
        return invalid_request();
    };

    info!(
        "Received request to create edge with source id {} and target id {}.",
        source_id, target_id
    );

    match state.store.insert_edge(source_id, target_id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => store_error_response(e),
    }
}

/// DELETE /tree/edges - delete a directed edge
pub async fn delete_edge(
    State(state): State<AppState>,
    Json(payload): Json<EdgeRequest>,
) -> Response {
    let Some((source_id, target_id)) = payload.validated() else {
        info!("Rejected delete request with payload {:?}", payload);
        return invalid_request();
    };

    info!(
        "Received request to delete edge with source id {} and target id {}.",
        source_id, target_id
    );

    match state.store.delete_edge(source_id, target_id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => store_error_response(e),
    }
}

fn invalid_request() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            reason: "Invalid request parameters and/or body.".to_string(),
        }),
    )
        .into_response()
}

/// Map a storage failure to its response
fn store_error_response(err: StoreError) -> Response {
    match err {
        StoreError::DuplicateEdge { .. } => {
            info!("Failed request with {}", err);
            (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    reason: "Entry already exists.".to_string(),
                }),
            )
                .into_response()
        }
        StoreError::EdgeNotFound { .. } => {
            info!("Failed request with {}", err);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    reason: "Entry does not exist.".to_string(),
                }),
            )
                .into_response()
        }
        StoreError::Database(ref cause) => {
            error!("Storage round trip failed: {:?}", cause);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    reason: "Storage unavailable.".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::to_bytes;
    use serde_json::json;
    use tree_store::storage::MemoryEdgeStore;

    use super::*;

    fn state_for(store: &Arc<MemoryEdgeStore>) -> AppState {
        AppState {
            store: store.clone(),
        }
    }

    fn edge_request(source_id: Option<i32>, target_id: Option<i32>) -> EdgeRequest {
        EdgeRequest {
            source_id,
            target_id,
        }
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn get_tree_returns_whole_subtree_for_root_node() {
        let store = Arc::new(MemoryEdgeStore::with_edges([(1, 2), (2, 3), (2, 4)]));

        let response = get_tree(State(state_for(&store)), Path(1)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(
            body,
            json!({"rootId": 1, "children": {"1": [2], "2": [3, 4]}})
        );
    }

    #[tokio::test]
    async fn get_tree_for_leaf_node_has_empty_children() {
        let store = Arc::new(MemoryEdgeStore::with_edges([(1, 2), (2, 3), (2, 4)]));

        let response = get_tree(State(state_for(&store)), Path(3)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body, json!({"rootId": 3, "children": {}}));
    }

    #[tokio::test]
    async fn get_tree_rejects_negative_node_id() {
        let store = Arc::new(MemoryEdgeStore::new());

        let response = get_tree(State(state_for(&store)), Path(-1)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body, json!({"reason": "Invalid request parameters and/or body."}));
    }

    #[tokio::test]
    async fn create_edge_stores_the_edge() {
        let store = Arc::new(MemoryEdgeStore::new());

        let response = create_edge(
            State(state_for(&store)),
            Json(edge_request(Some(2), Some(3))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(store.contains(2, 3));
    }

    #[tokio::test]
    async fn create_edge_maps_duplicate_to_conflict() {
        let store = Arc::new(MemoryEdgeStore::with_edges([(2, 3)]));

        let response = create_edge(
            State(state_for(&store)),
            Json(edge_request(Some(2), Some(3))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = response_json(response).await;
        assert_eq!(body, json!({"reason": "Entry already exists."}));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn create_edge_rejects_missing_source_id_before_store_access() {
        let store = Arc::new(MemoryEdgeStore::new());

        let response = create_edge(
            State(state_for(&store)),
            Json(edge_request(None, Some(3))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn create_edge_rejects_negative_target_id_before_store_access() {
        let store = Arc::new(MemoryEdgeStore::new());

        let response = create_edge(
            State(state_for(&store)),
            Json(edge_request(Some(1), Some(-2))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn delete_edge_removes_the_edge() {
        let store = Arc::new(MemoryEdgeStore::with_edges([(2, 3)]));

        let response = delete_edge(
            State(state_for(&store)),
            Json(edge_request(Some(2), Some(3))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn delete_edge_maps_unknown_edge_to_not_found() {
        let store = Arc::new(MemoryEdgeStore::with_edges([(1, 2)]));

        let response = delete_edge(
            State(state_for(&store)),
            Json(edge_request(Some(2), Some(3))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_json(response).await;
        assert_eq!(body, json!({"reason": "Entry does not exist."}));
        assert!(store.contains(1, 2));
    }

    #[tokio::test]
    async fn delete_edge_rejects_negative_source_id_before_store_access() {
        let store = Arc::new(MemoryEdgeStore::with_edges([(1, 2)]));

        let response = delete_edge(
            State(state_for(&store)),
            Json(edge_request(Some(-1), Some(2))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.len(), 1);
    }
}

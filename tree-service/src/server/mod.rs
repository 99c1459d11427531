// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use tree_store::storage::EdgeStore;

use self::state::AppState;
use crate::config::create_cors_layer;

/// Create the Axum application router with all routes and middleware
pub fn create_app(store: Arc<dyn EdgeStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/tree/:node_id", get(handlers::get_tree))
        .route(
            "/tree/edges",
            post(handlers::create_edge).delete(handlers::delete_edge),
        )
        .route("/health", get(handlers::health_check))
        .layer(create_cors_layer())
        .with_state(state)
}

/// Run the server on the specified address
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Server listening on {}", addr);
    info!("- Tree endpoint: http://{}/tree/{{nodeId}}", addr);
    info!("- Edges endpoint: http://{}/tree/edges", addr);
    info!("- Health endpoint: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

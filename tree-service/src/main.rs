use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tree_service::{
    config::{get_database_url, SERVER_HOST, SERVER_PORT},
    server,
};
use tree_store::storage::PostgresEdgeStore;

#[tokio::main]
async fn main() {
    // Initialize environment and logging
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    info!("Starting tree service...");

    let store = match initialize_store().await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Startup error: {:?}", e);
            std::process::exit(1);
        }
    };

    let app = server::create_app(Arc::new(store));
    let addr = SocketAddr::from((SERVER_HOST, SERVER_PORT));

    if let Err(e) = server::run_server(app, addr).await {
        eprintln!("Server error: {:?}", e);
        std::process::exit(1);
    }
}

/// Connect to Postgres and ensure the edge table exists
async fn initialize_store() -> anyhow::Result<PostgresEdgeStore> {
    let database_url = get_database_url();

    let store = PostgresEdgeStore::new(&database_url)
        .await
        .context("Failed to initialize PostgreSQL edge store")?;
    store
        .migrate()
        .await
        .context("Failed to run edge table migration")?;

    info!("Edge store initialized successfully");
    Ok(store)
}

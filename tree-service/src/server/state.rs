// App state for Axum server
use std::sync::Arc;

use tree_store::storage::EdgeStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EdgeStore>,
}

/// Application routes configuration
use crate::handlers::{
    get_database_status, get_databases, get_supported_databases, health, query_databases,
    search_annotations, search_databases, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Catalog views
        .route("/databases", get(get_databases))
        .route("/databases/supported", get(get_supported_databases))
        .route("/databases/status", get(get_database_status))
        // Fan-out search and query
        .route("/databases/search", post(search_databases))
        .route("/databases/query", post(query_databases))
        // Annotation lookup
        .route("/databases/annotations/search", post(search_annotations))
        .with_state(state)
}

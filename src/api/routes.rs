//! API Routes
//!
//! Configures the Axum router with all item cache endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_item, delete_item_by_id, get_item_by_id, get_item_by_name, health_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /item/id/:id` - Retrieve an item by ID
/// - `DELETE /item/id/:id` - Delete an item by ID
/// - `GET /item/name/:name` - Retrieve an item by name
/// - `POST /item` - Cache an item under its name
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/item", post(add_item))
        .route("/item/id/:id", get(get_item_by_id).delete(delete_item_by_id))
        .route("/item/name/:name", get(get_item_by_name))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

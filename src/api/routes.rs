//! API Routes
//!
//! Configures the Axum router with all item pool endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, commit_handler, delete_item_handler, delete_items_handler, get_item_handler,
    health_handler, item_exists_handler, lookup_items_handler, save_item_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /items` - Save or stage an item
/// - `GET /items/:key` - Fetch an item
/// - `DELETE /items/:key` - Delete an item
/// - `GET /items/:key/exists` - Check an item exists
/// - `POST /items/lookup` - Fetch several items
/// - `POST /items/delete` - Delete several items
/// - `POST /commit` - Flush staged items
/// - `POST /clear` - Purge every pool item
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
        .route("/items", put(save_item_handler))
        .route("/items/lookup", post(lookup_items_handler))
        .route("/items/delete", post(delete_items_handler))
        .route(
            "/items/:key",
            get(get_item_handler).delete(delete_item_handler),
        )
        .route("/items/:key/exists", get(item_exists_handler))
        .route("/commit", post(commit_handler))
        .route("/clear", post(clear_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! API Routes
//!
//! Configures the Axum router with all admin endpoints.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use super::access::require_loopback;
use super::handlers::{
    clear_handler, delete_handler, get_handler, health_handler, keys_handler, put_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /entries` - Store a key-value pair
/// - `GET /entries?key=K` - Retrieve a value by key
/// - `DELETE /entries?key=K` - Delete a key
/// - `GET /keys?prefix=P` - List keys under a prefix
/// - `POST /clear` - Remove every entry under a prefix or directory
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Loopback guard: rejects remote callers when `loopback_only` is set
/// - Tracing: Logs all requests, including rejected ones
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/entries",
            put(put_handler).get(get_handler).delete(delete_handler),
        )
        .route("/keys", get(keys_handler))
        .route("/clear", post(clear_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_loopback,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

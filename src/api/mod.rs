//! HTTP API server

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
///
/// Cross-origin requests are allowed from any origin with any method and
/// headers; the frontend may be served from a different host.
pub fn create_router(state: AppState, static_file: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/testPost", post(handlers::submit))
        .route("/fetchData/:common_id", get(handlers::fetch_path))
        .route_service("/", ServeFile::new(static_file))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

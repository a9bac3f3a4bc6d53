//! Router assembly for the skilltree HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with CORS
//! and tracing middleware layers.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. CORS is permissive (the
/// canvas UI may be served from a different origin). TraceLayer provides
/// request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/trees",
            get(handlers::trees::list_trees),
        )
        .route(
            "/trees/{name}",
            get(handlers::trees::load_tree)
                .put(handlers::trees::save_tree)
                .delete(handlers::trees::delete_tree),
        )
        .route(
            "/trees/{name}/download",
            get(handlers::trees::download_tree),
        )
        .route(
            "/trees/import",
            axum::routing::post(handlers::trees::import_tree),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

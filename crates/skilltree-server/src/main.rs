//! Binary entrypoint for the skilltree HTTP server.
//!
//! Reads configuration from environment variables:
//! - `SKILLTREE_DATA_DIR`: directory for saved trees (default: "data")
//! - `SKILLTREE_PORT`: server listen port (default: "5000")

use skilltree_server::router::build_router;
use skilltree_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let data_dir =
        std::env::var("SKILLTREE_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let port = std::env::var("SKILLTREE_PORT").unwrap_or_else(|_| "5000".to_string());

    let state = AppState::new(&data_dir).expect("Failed to initialize application state");

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("skilltree server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

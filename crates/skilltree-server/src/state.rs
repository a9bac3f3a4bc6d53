//! Application state with a shared `TreeService` for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. The async-aware mutex lets handlers await the lock without
//! blocking the tokio runtime, and serializes persistence requests so only
//! one save/load per process is in flight at a time (last response wins).

use std::sync::Arc;

use crate::error::ApiError;
use crate::service::TreeService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared tree service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<TreeService>>,
}

impl AppState {
    /// Creates a new `AppState` backed by JSON files under `data_dir`.
    pub fn new(data_dir: &str) -> Result<Self, ApiError> {
        let service = TreeService::new(data_dir)?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        })
    }

    /// Creates a new `AppState` with an in-memory store (for testing).
    pub fn in_memory() -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(TreeService::in_memory())),
        }
    }
}

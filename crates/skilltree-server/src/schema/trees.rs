//! Schema types for tree management endpoints.

use serde::{Deserialize, Serialize};

/// Response for `GET /trees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeListResponse {
    /// Names of all stored trees, sorted.
    pub trees: Vec<String>,
}

/// Confirmation response for save and delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

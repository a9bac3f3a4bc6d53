//! Tree management handlers (list, load, save, delete, download, import).
//!
//! Tree names arrive as path parameters and are percent-decoded by the
//! extractor before they are used as storage keys.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use skilltree_core::TreeDocument;

use crate::error::ApiError;
use crate::schema::trees::{MessageResponse, TreeListResponse};
use crate::state::AppState;

/// Lists all saved trees.
///
/// `GET /trees`
pub async fn list_trees(
    State(state): State<AppState>,
) -> Result<Json<TreeListResponse>, ApiError> {
    let service = state.service.lock().await;
    let trees = service.list_trees()?;
    Ok(Json(TreeListResponse { trees }))
}

/// Loads a tree by name.
///
/// `GET /trees/{name}`
pub async fn load_tree(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TreeDocument>, ApiError> {
    let service = state.service.lock().await;
    let doc = service.load_tree(&name)?;
    Ok(Json(doc))
}

/// Saves a tree under a name, including notes.
///
/// `PUT /trees/{name}`
pub async fn save_tree(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut service = state.service.lock().await;
    service.save_tree(&name, payload)?;
    Ok(Json(MessageResponse {
        message: format!("Skill tree '{name}' saved successfully!"),
    }))
}

/// Deletes a tree by name.
///
/// `DELETE /trees/{name}`
pub async fn delete_tree(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut service = state.service.lock().await;
    service.delete_tree(&name)?;
    Ok(Json(MessageResponse {
        message: format!("Skill tree '{name}' deleted successfully!"),
    }))
}

/// Downloads a tree as a JSON attachment named after it.
///
/// `GET /trees/{name}/download`
pub async fn download_tree(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let service = state.service.lock().await;
    let (filename, body) = service.download_tree(&name)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

/// Validates an uploaded tree document and echoes it back.
///
/// `POST /trees/import`
pub async fn import_tree(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<TreeDocument>, ApiError> {
    let service = state.service.lock().await;
    let doc = service.validate(payload)?;
    Ok(Json(doc))
}

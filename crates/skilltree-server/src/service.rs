//! TreeService: the single coordinator between HTTP handlers and the
//! core/storage crates.
//!
//! Every document crossing the persistence boundary is validated through the
//! core codec first: a save of a malformed payload is rejected before
//! anything is written, and a load of a corrupt stored document aborts with
//! no partial tree handed out. The in-flight tree state is otherwise left
//! exactly as it was on failure (load failure leaves the tree empty, save
//! failure leaves it as edited and unsaved).

use skilltree_core::{codec, TreeDocument};
use skilltree_storage::{FsStore, MemoryStore, TreeStore};

use crate::error::ApiError;

/// The central service coordinating tree persistence.
pub struct TreeService {
    store: Box<dyn TreeStore + Send>,
}

impl TreeService {
    /// Creates a service backed by JSON files under `data_dir`.
    pub fn new(data_dir: &str) -> Result<Self, ApiError> {
        let store = FsStore::new(data_dir)
            .map_err(|e| ApiError::InternalError(format!("failed to open data dir: {e}")))?;
        Ok(TreeService {
            store: Box::new(store),
        })
    }

    /// Creates a service backed by an in-memory store (for testing).
    pub fn in_memory() -> Self {
        TreeService {
            store: Box::new(MemoryStore::new()),
        }
    }

    /// Lists the names of all stored trees.
    pub fn list_trees(&self) -> Result<Vec<String>, ApiError> {
        Ok(self.store.list_trees()?)
    }

    /// Loads the document stored under `name`.
    ///
    /// Fails with 404 when absent. A stored document that no longer passes
    /// validation aborts the load entirely; no partial graph is handed out.
    pub fn load_tree(&self, name: &str) -> Result<TreeDocument, ApiError> {
        let doc = self
            .store
            .load_tree(name)?
            .ok_or_else(|| ApiError::NotFound(format!("Skill tree '{name}' not found.")))?;
        codec::deserialize(&doc)?;
        Ok(doc)
    }

    /// Validates and saves a document under `name`.
    pub fn save_tree(&mut self, name: &str, payload: serde_json::Value) -> Result<(), ApiError> {
        let doc = self.validate(payload)?;
        self.store.save_tree(name, &doc)?;
        tracing::info!(tree = name, "skill tree saved");
        Ok(())
    }

    /// Deletes the tree stored under `name`.
    pub fn delete_tree(&mut self, name: &str) -> Result<(), ApiError> {
        self.store.delete_tree(name)?;
        tracing::info!(tree = name, "skill tree deleted");
        Ok(())
    }

    /// Validates an uploaded document and returns its parsed form.
    ///
    /// Used by the import endpoint, which echoes the document back to the
    /// client without storing it (the client saves under a name of its own
    /// choosing afterwards).
    pub fn validate(&self, payload: serde_json::Value) -> Result<TreeDocument, ApiError> {
        let doc = codec::document_from_json(payload)?;
        codec::deserialize(&doc)?;
        Ok(doc)
    }

    /// Renders the stored document under `name` for download.
    ///
    /// Returns the attachment file name and the pretty-printed JSON body.
    pub fn download_tree(&self, name: &str) -> Result<(String, String), ApiError> {
        let doc = self.load_tree(name)?;
        let body = serde_json::to_string_pretty(&doc)
            .map_err(|e| ApiError::InternalError(e.to_string()))?;
        Ok((format!("{name}.json"), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skilltree_core::{LabelReply, Tree};

    fn sample_payload() -> serde_json::Value {
        let mut tree = Tree::new();
        tree.designate_root("Algebra");
        let a = tree
            .create_node(LabelReply::Submitted("Linear equations".into()))
            .unwrap()
            .unwrap();
        tree.create_edge(skilltree_core::NodeId::ROOT, a).unwrap();
        tree.notes.set_note(a, "ax + b = 0");
        serde_json::to_value(codec::serialize(&tree)).unwrap()
    }

    #[test]
    fn save_then_load_roundtrips() {
        let mut service = TreeService::in_memory();
        service.save_tree("Algebra", sample_payload()).unwrap();

        let doc = service.load_tree("Algebra").unwrap();
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.edges.len(), 1);
        assert_eq!(service.list_trees().unwrap(), vec!["Algebra"]);
    }

    #[test]
    fn load_absent_tree_is_404() {
        let service = TreeService::in_memory();
        let result = service.load_tree("ghost");
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[test]
    fn malformed_payload_is_rejected_before_storing() {
        let mut service = TreeService::in_memory();
        let payload = serde_json::json!({
            "nodes": [{ "id": 1, "label": "a" }],
            "edges": [{ "id": 0, "from": 1, "to": 2 }]
        });
        let result = service.save_tree("Broken", payload);
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
        // Nothing was written.
        assert!(service.list_trees().unwrap().is_empty());
    }

    #[test]
    fn payload_missing_arrays_is_rejected() {
        let service = TreeService::in_memory();
        let result = service.validate(serde_json::json!({ "notes": {} }));
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn delete_absent_tree_is_404() {
        let mut service = TreeService::in_memory();
        let result = service.delete_tree("ghost");
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[test]
    fn download_names_the_file_after_the_tree() {
        let mut service = TreeService::in_memory();
        service.save_tree("My Plan", sample_payload()).unwrap();
        let (filename, body) = service.download_tree("My Plan").unwrap();
        assert_eq!(filename, "My Plan.json");
        let parsed: TreeDocument = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.nodes.len(), 2);
    }
}

//! In-memory implementation of [`TreeStore`].
//!
//! [`MemoryStore`] is a first-class backend for tests and ephemeral sessions,
//! with identical semantics to the filesystem backend.

use std::collections::HashMap;

use skilltree_core::TreeDocument;

use crate::error::StorageError;
use crate::traits::TreeStore;

/// HashMap-backed tree store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    trees: HashMap<String, TreeDocument>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeStore for MemoryStore {
    fn save_tree(&mut self, name: &str, doc: &TreeDocument) -> Result<(), StorageError> {
        self.trees.insert(name.to_string(), doc.clone());
        Ok(())
    }

    fn load_tree(&self, name: &str) -> Result<Option<TreeDocument>, StorageError> {
        Ok(self.trees.get(name).cloned())
    }

    fn delete_tree(&mut self, name: &str) -> Result<(), StorageError> {
        self.trees
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StorageError::TreeNotFound(name.to_string()))
    }

    fn list_trees(&self) -> Result<Vec<String>, StorageError> {
        let mut names: Vec<String> = self.trees.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

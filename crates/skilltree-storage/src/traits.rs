//! The [`TreeStore`] trait defining the persistence contract for skill trees.
//!
//! Trees are keyed by name (case-sensitive; names arrive percent-decoded
//! from the transport). The trait is synchronous and object-safe; all
//! backends are fully swappable without changing the layers above.

use skilltree_core::TreeDocument;

use crate::error::StorageError;

/// The persistence contract: one [`TreeDocument`] per tree name.
pub trait TreeStore {
    /// Saves (creates or overwrites) the document stored under `name`.
    fn save_tree(&mut self, name: &str, doc: &TreeDocument) -> Result<(), StorageError>;

    /// Loads the document stored under `name`, or `None` when absent.
    fn load_tree(&self, name: &str) -> Result<Option<TreeDocument>, StorageError>;

    /// Deletes the tree stored under `name`.
    ///
    /// Fails with `TreeNotFound` when nothing is stored under that name.
    fn delete_tree(&mut self, name: &str) -> Result<(), StorageError>;

    /// Lists the names of all stored trees, sorted.
    fn list_trees(&self) -> Result<Vec<String>, StorageError>;
}

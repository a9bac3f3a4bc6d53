//! Filesystem implementation of [`TreeStore`].
//!
//! One pretty-printed `{name}.json` per tree under a data directory, the
//! layout the original tool used. The directory is created on construction.
//! Tree names become file names, so names that would escape the directory
//! (path separators, `..`, empty) are rejected up front.

use std::fs;
use std::path::{Path, PathBuf};

use skilltree_core::TreeDocument;

use crate::error::StorageError;
use crate::traits::TreeStore;

/// Directory-of-JSON-files tree store.
#[derive(Debug)]
pub struct FsStore {
    data_dir: PathBuf,
}

impl FsStore {
    /// Opens a store rooted at `data_dir`, creating the directory if needed.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(FsStore { data_dir })
    }

    /// The directory documents are stored under.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn tree_path(&self, name: &str) -> Result<PathBuf, StorageError> {
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(StorageError::InvalidTreeName(name.to_string()));
        }
        Ok(self.data_dir.join(format!("{name}.json")))
    }
}

impl TreeStore for FsStore {
    fn save_tree(&mut self, name: &str, doc: &TreeDocument) -> Result<(), StorageError> {
        let path = self.tree_path(name)?;
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn load_tree(&self, name: &str) -> Result<Option<TreeDocument>, StorageError> {
        let path = self.tree_path(name)?;
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn delete_tree(&mut self, name: &str) -> Result<(), StorageError> {
        let path = self.tree_path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::TreeNotFound(name.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn list_trees(&self) -> Result<Vec<String>, StorageError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

//! The explicit tree value: one named graph instance plus its notes.

use serde::{Deserialize, Serialize};

use crate::graph::SkillGraph;
use crate::notes::NotesStore;

/// One skill tree: the unit of editing and persistence.
///
/// The original UI kept the current tree in module-level mutable state; here
/// the tree is an explicit value owned by whatever session or request context
/// is active, and every operation takes it explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tree {
    /// Canonical node/edge store.
    pub graph: SkillGraph,
    /// Per-node free-text annotations.
    pub notes: NotesStore,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }
}

//! Per-node free-text annotations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// Free-text notes keyed by node identity.
///
/// Entries are created lazily: an absent note reads as the empty string, so
/// lookups never fail. Edits are full-text replacements (the UI collaborator
/// pushes the whole textarea content on every keystroke, not a diff). When a
/// node is deleted, the editor drops its note so orphan text is never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesStore {
    notes: IndexMap<NodeId, String>,
}

impl NotesStore {
    /// Creates an empty notes store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the note text for a node.
    pub fn set_note(&mut self, id: NodeId, text: impl Into<String>) {
        self.notes.insert(id, text.into());
    }

    /// Returns the note for a node, or the empty string if none was set.
    pub fn get_note(&self, id: NodeId) -> &str {
        self.notes.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Drops the note for a node. Missing entries are fine.
    pub fn delete_note(&mut self, id: NodeId) {
        self.notes.shift_remove(&id);
    }

    /// Iterates over stored (node, text) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.notes.iter().map(|(&id, text)| (id, text.as_str()))
    }

    /// Returns the number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns `true` if no notes are stored.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_note_reads_as_empty_string() {
        let notes = NotesStore::new();
        assert_eq!(notes.get_note(NodeId(5)), "");
    }

    #[test]
    fn set_replaces_full_text() {
        let mut notes = NotesStore::new();
        notes.set_note(NodeId(1), "first draft");
        notes.set_note(NodeId(1), "rewritten");
        assert_eq!(notes.get_note(NodeId(1)), "rewritten");
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut notes = NotesStore::new();
        notes.set_note(NodeId(1), "text");
        notes.delete_note(NodeId(1));
        notes.delete_note(NodeId(1));
        assert_eq!(notes.get_note(NodeId(1)), "");
        assert!(notes.is_empty());
    }
}

//! Skill node data model.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// A skill/topic vertex: label, completion flag, optional root designation.
///
/// At most one node per tree carries `is_root = true` (the designated entry
/// node, visually emphasized). The root node has an empty label and instead
/// shows the tree name via `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillNode {
    /// Stable identity, assigned at creation and never reused.
    pub id: NodeId,
    /// Display string. Empty is legal (the root shows its title instead).
    #[serde(default)]
    pub label: String,
    /// Whether the user has marked this skill complete.
    #[serde(default)]
    pub completed: bool,
    /// True only for the designated root node. Loaders re-derive this from
    /// the sentinel id, so imported documents may omit it.
    #[serde(default)]
    pub is_root: bool,
    /// Tree name shown on the root node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SkillNode {
    /// Creates a regular (non-root, incomplete) node with the given label.
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        SkillNode {
            id,
            label: label.into(),
            completed: false,
            is_root: false,
            title: None,
        }
    }

    /// Creates the designated root node carrying the tree name as its title.
    ///
    /// Always uses the [`NodeId::ROOT`] sentinel so loaders can re-derive
    /// root styling from the id alone.
    pub fn root(tree_name: impl Into<String>) -> Self {
        SkillNode {
            id: NodeId::ROOT,
            label: String::new(),
            completed: false,
            is_root: true,
            title: Some(tree_name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_defaults() {
        let node = SkillNode::new(NodeId(3), "Recursion");
        assert_eq!(node.label, "Recursion");
        assert!(!node.completed);
        assert!(!node.is_root);
        assert!(node.title.is_none());
    }

    #[test]
    fn root_node_uses_sentinel_id() {
        let root = SkillNode::root("Algebra");
        assert_eq!(root.id, NodeId::ROOT);
        assert!(root.is_root);
        assert!(root.label.is_empty());
        assert_eq!(root.title.as_deref(), Some("Algebra"));
    }

    #[test]
    fn title_omitted_from_json_when_absent() {
        let node = SkillNode::new(NodeId(1), "Loops");
        let json = serde_json::to_string(&node).unwrap();
        assert!(!json.contains("title"));
    }
}

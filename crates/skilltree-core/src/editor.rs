//! Editing commands: the only surface permitted to mutate graph structure.
//!
//! Commands are implemented on [`Tree`] so every mutation names the tree it
//! touches. Completion flags are not handled here; they flow through
//! [`crate::completion::set_completed`].
//!
//! Label entry is an asynchronous request/response exchange with the UI
//! collaborator: the editor asks for text and resumes the create or rename
//! only when a [`LabelReply`] comes back. Cancellation abandons the
//! operation with no mutation, so no orphan placeholder nodes are created
//! when label entry fails.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::{EdgeId, NodeId};
use crate::node::SkillNode;
use crate::tree::Tree;

/// The UI collaborator's answer to a label request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelReply {
    /// The user submitted text (possibly blank; blank is rejected).
    Submitted(String),
    /// The user dismissed the prompt.
    Cancelled,
}

/// One entry of a deletion request: node ids cascade, edge ids are removed
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionItem {
    Node(NodeId),
    Edge(EdgeId),
}

impl Tree {
    /// Creates a node from a label prompt exchange.
    ///
    /// `Cancelled` abandons the operation (`Ok(None)`, nothing created).
    /// Submitted text that trims to empty fails with `EmptyLabel`. Otherwise
    /// a non-root, incomplete node is created with an empty note.
    pub fn create_node(&mut self, reply: LabelReply) -> Result<Option<NodeId>, CoreError> {
        let label = match reply {
            LabelReply::Cancelled => return Ok(None),
            LabelReply::Submitted(text) => text,
        };
        if label.trim().is_empty() {
            return Err(CoreError::EmptyLabel);
        }
        let id = self.graph.add_node(label);
        self.notes.set_note(id, "");
        Ok(Some(id))
    }

    /// Renames a node in place.
    ///
    /// Fails with `EmptyLabel` when the new label trims to empty and
    /// `NodeNotFound` when the node is absent.
    pub fn rename_node(&mut self, id: NodeId, new_label: &str) -> Result<(), CoreError> {
        if new_label.trim().is_empty() {
            return Err(CoreError::EmptyLabel);
        }
        self.graph.get_node_mut(id)?.label = new_label.to_string();
        Ok(())
    }

    /// Creates a prerequisite edge between two nodes.
    ///
    /// Fails with `SelfLoop` when `from == to`, otherwise delegates endpoint
    /// validation to the graph.
    pub fn create_edge(&mut self, from: NodeId, to: NodeId) -> Result<EdgeId, CoreError> {
        if from == to {
            return Err(CoreError::SelfLoop { id: from });
        }
        self.graph.add_edge(from, to)
    }

    /// Deletes a set of nodes and edges.
    ///
    /// Node deletion cascades to every edge touching the node and drops its
    /// note. Ids that are already gone (for example an edge removed by an
    /// earlier cascade in the same selection) are skipped with a warning
    /// rather than failing the whole command.
    pub fn delete_selection(&mut self, selection: &[SelectionItem]) {
        for item in selection {
            match *item {
                SelectionItem::Node(id) => match self.graph.remove_node(id) {
                    Ok(_) => self.notes.delete_note(id),
                    Err(_) => tracing::warn!(node = %id, "delete skipped absent node"),
                },
                SelectionItem::Edge(id) => {
                    if self.graph.remove_edge(id).is_err() {
                        tracing::warn!(edge = %id, "delete skipped absent edge");
                    }
                }
            }
        }
    }

    /// Creates the designated root node on an empty tree.
    ///
    /// The root carries the sentinel id, an empty label, and the tree name
    /// as its title. Idempotent: a non-empty tree is left untouched.
    pub fn designate_root(&mut self, tree_name: &str) {
        if self.graph.node_count() > 0 {
            return;
        }
        // The sentinel id is free on an empty tree, so this cannot fail.
        let _ = self.graph.insert_node(SkillNode::root(tree_name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::NodeId;

    #[test]
    fn cancelled_prompt_creates_nothing() {
        let mut tree = Tree::new();
        let created = tree.create_node(LabelReply::Cancelled).unwrap();
        assert!(created.is_none());
        assert_eq!(tree.graph.node_count(), 0);
    }

    #[test]
    fn blank_label_is_rejected_on_submit() {
        let mut tree = Tree::new();
        let result = tree.create_node(LabelReply::Submitted("   ".into()));
        assert!(matches!(result, Err(CoreError::EmptyLabel)));
        assert_eq!(tree.graph.node_count(), 0);
    }

    #[test]
    fn create_node_initializes_empty_note() {
        let mut tree = Tree::new();
        let id = tree
            .create_node(LabelReply::Submitted("Ownership".into()))
            .unwrap()
            .unwrap();
        let node = tree.graph.get_node(id).unwrap();
        assert_eq!(node.label, "Ownership");
        assert!(!node.completed);
        assert!(!node.is_root);
        assert_eq!(tree.notes.get_note(id), "");
        assert_eq!(tree.notes.len(), 1);
    }

    #[test]
    fn rename_rejects_blank_and_keeps_old_label() {
        let mut tree = Tree::new();
        let id = tree
            .create_node(LabelReply::Submitted("Old".into()))
            .unwrap()
            .unwrap();

        assert!(matches!(
            tree.rename_node(id, "  \t"),
            Err(CoreError::EmptyLabel)
        ));
        assert_eq!(tree.graph.get_node(id).unwrap().label, "Old");

        tree.rename_node(id, "New").unwrap();
        assert_eq!(tree.graph.get_node(id).unwrap().label, "New");
    }

    #[test]
    fn rename_missing_node_fails() {
        let mut tree = Tree::new();
        assert!(matches!(
            tree.rename_node(NodeId(4), "x"),
            Err(CoreError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn create_edge_rejects_self_loop_before_touching_graph() {
        let mut tree = Tree::new();
        let a = tree
            .create_node(LabelReply::Submitted("a".into()))
            .unwrap()
            .unwrap();
        assert!(matches!(
            tree.create_edge(a, a),
            Err(CoreError::SelfLoop { .. })
        ));
        assert_eq!(tree.graph.edge_count(), 0);
    }

    #[test]
    fn deleting_node_drops_edges_and_note() {
        let mut tree = Tree::new();
        let a = tree
            .create_node(LabelReply::Submitted("a".into()))
            .unwrap()
            .unwrap();
        let b = tree
            .create_node(LabelReply::Submitted("b".into()))
            .unwrap()
            .unwrap();
        tree.create_edge(a, b).unwrap();
        tree.notes.set_note(a, "remember this");

        tree.delete_selection(&[SelectionItem::Node(a)]);

        assert!(tree.graph.edges_touching(a).is_empty());
        assert_eq!(tree.notes.get_note(a), "");
        assert!(tree.graph.get_node(b).is_ok());
    }

    #[test]
    fn delete_selection_skips_absent_ids() {
        let mut tree = Tree::new();
        let a = tree
            .create_node(LabelReply::Submitted("a".into()))
            .unwrap()
            .unwrap();
        let b = tree
            .create_node(LabelReply::Submitted("b".into()))
            .unwrap()
            .unwrap();
        let e = tree.create_edge(a, b).unwrap();

        // Deleting the node first cascades the edge; the explicit edge entry
        // then refers to an id that is already gone.
        tree.delete_selection(&[SelectionItem::Node(a), SelectionItem::Edge(e)]);
        assert_eq!(tree.graph.node_count(), 1);
        assert_eq!(tree.graph.edge_count(), 0);
    }

    #[test]
    fn designate_root_is_idempotent() {
        let mut tree = Tree::new();
        tree.designate_root("Algebra");

        let root = tree.graph.root().expect("root created");
        assert_eq!(root.id, NodeId::ROOT);
        assert!(root.is_root);
        assert!(root.label.is_empty());
        assert_eq!(root.title.as_deref(), Some("Algebra"));
        assert_eq!(tree.graph.node_count(), 1);

        tree.designate_root("Algebra");
        assert_eq!(tree.graph.node_count(), 1);
    }

    #[test]
    fn designate_root_is_a_noop_on_non_empty_tree() {
        let mut tree = Tree::new();
        tree.create_node(LabelReply::Submitted("existing".into()))
            .unwrap();
        tree.designate_root("Algebra");
        assert!(tree.graph.root().is_none());
        assert_eq!(tree.graph.node_count(), 1);
    }
}

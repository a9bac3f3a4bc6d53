//! Typed event dispatch between the UI collaborators and the core.
//!
//! The rendering collaborator's callbacks are kept out of the core's own
//! interface: selection and double-click land here as [`CanvasEvent`] values
//! dispatched through [`EditorSession::handle_event`], and the core answers
//! with typed [`UiRequest`]s and [`RenderCommand`]s instead of calling the
//! UI directly.

use serde::{Deserialize, Serialize};

use crate::completion;
use crate::editor::LabelReply;
use crate::error::CoreError;
use crate::id::NodeId;
use crate::style::{edge_view, node_view, EdgeView, NodeView};
use crate::tree::Tree;

/// Events emitted by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasEvent {
    NodeSelected(NodeId),
    NodeDeselected,
    NodeDoubleClicked(NodeId),
}

/// Requests the core issues back to the UI chrome collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiRequest {
    /// Show the notes panel for a node with its current text.
    ShowNotes { node: NodeId, text: String },
    /// Clear the notes panel; nothing is selected.
    ClearNotes,
    /// Ask the user for a new label for a node (double-click rename).
    PromptRename { node: NodeId, current: String },
}

/// Commands the core issues to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderCommand {
    RenderNodes(Vec<NodeView>),
    RenderEdges(Vec<EdgeView>),
    EnterAddNodeMode,
    EnterAddEdgeMode,
    DeleteCurrentSelection,
    FitView,
}

/// One editing session: a tree plus the current canvas selection.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    /// The tree being edited.
    pub tree: Tree,
    selected: Option<NodeId>,
}

impl EditorSession {
    /// Starts a session over an existing tree.
    pub fn new(tree: Tree) -> Self {
        EditorSession {
            tree,
            selected: None,
        }
    }

    /// The currently selected node, if any.
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Dispatches one canvas event; the single entry point for UI events.
    ///
    /// Events naming a node that no longer exists (deleted between the
    /// renderer's snapshot and the event arriving) are dropped with a
    /// warning.
    pub fn handle_event(&mut self, event: CanvasEvent) -> Option<UiRequest> {
        match event {
            CanvasEvent::NodeSelected(id) => match self.tree.graph.get_node(id) {
                Ok(_) => {
                    self.selected = Some(id);
                    Some(UiRequest::ShowNotes {
                        node: id,
                        text: self.tree.notes.get_note(id).to_string(),
                    })
                }
                Err(_) => {
                    tracing::warn!(node = %id, "selection event for absent node");
                    None
                }
            },
            CanvasEvent::NodeDeselected => {
                self.selected = None;
                Some(UiRequest::ClearNotes)
            }
            CanvasEvent::NodeDoubleClicked(id) => match self.tree.graph.get_node(id) {
                Ok(node) => Some(UiRequest::PromptRename {
                    node: id,
                    current: node.label.clone(),
                }),
                Err(_) => {
                    tracing::warn!(node = %id, "double-click event for absent node");
                    None
                }
            },
        }
    }

    /// Completes a rename exchange started by `PromptRename`.
    ///
    /// Cancellation abandons the rename with no mutation.
    pub fn finish_rename(&mut self, node: NodeId, reply: LabelReply) -> Result<(), CoreError> {
        match reply {
            LabelReply::Cancelled => Ok(()),
            LabelReply::Submitted(text) => self.tree.rename_node(node, &text),
        }
    }

    /// Marks the selected node complete or incomplete.
    ///
    /// Returns `Ok(false)` when nothing is selected (the caller notifies the
    /// user). A selected node that has since been deleted is a warned no-op.
    pub fn mark_selected(&mut self, completed: bool) -> Result<bool, CoreError> {
        let Some(id) = self.selected else {
            return Ok(false);
        };
        match completion::set_completed(&mut self.tree.graph, id, completed) {
            Ok(()) => Ok(true),
            Err(CoreError::NodeNotFound { .. }) => {
                tracing::warn!(node = %id, "completion change for absent node");
                self.selected = None;
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Keystroke-level note edit: replaces the selected node's note text.
    ///
    /// Returns `false` when nothing is selected.
    pub fn edit_note(&mut self, text: &str) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        self.tree.notes.set_note(id, text);
        true
    }

    /// Produces the full re-render command pair for the current tree state.
    pub fn render_commands(&self) -> Vec<RenderCommand> {
        let mut nodes: Vec<NodeView> = self.tree.graph.nodes().map(node_view).collect();
        nodes.sort_by_key(|view| view.id);
        let mut edges: Vec<EdgeView> = self.tree.graph.edges().map(edge_view).collect();
        edges.sort_by_key(|view| view.id);
        vec![
            RenderCommand::RenderNodes(nodes),
            RenderCommand::RenderEdges(edges),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{EDGE_HIGHLIGHT_COLOR, NODE_COMPLETE_BG};

    fn session_with_two_nodes() -> (EditorSession, NodeId, NodeId) {
        let mut tree = Tree::new();
        let a = tree
            .create_node(LabelReply::Submitted("a".into()))
            .unwrap()
            .unwrap();
        let b = tree
            .create_node(LabelReply::Submitted("b".into()))
            .unwrap()
            .unwrap();
        (EditorSession::new(tree), a, b)
    }

    #[test]
    fn selection_shows_notes_and_deselection_clears() {
        let (mut session, a, _) = session_with_two_nodes();
        session.tree.notes.set_note(a, "todo: practice");

        let request = session.handle_event(CanvasEvent::NodeSelected(a));
        assert_eq!(
            request,
            Some(UiRequest::ShowNotes {
                node: a,
                text: "todo: practice".into()
            })
        );
        assert_eq!(session.selected(), Some(a));

        let request = session.handle_event(CanvasEvent::NodeDeselected);
        assert_eq!(request, Some(UiRequest::ClearNotes));
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn double_click_requests_rename_with_current_label() {
        let (mut session, a, _) = session_with_two_nodes();
        let request = session.handle_event(CanvasEvent::NodeDoubleClicked(a));
        assert_eq!(
            request,
            Some(UiRequest::PromptRename {
                node: a,
                current: "a".into()
            })
        );

        session
            .finish_rename(a, LabelReply::Submitted("alpha".into()))
            .unwrap();
        assert_eq!(session.tree.graph.get_node(a).unwrap().label, "alpha");
    }

    #[test]
    fn cancelled_rename_changes_nothing() {
        let (mut session, a, _) = session_with_two_nodes();
        session.finish_rename(a, LabelReply::Cancelled).unwrap();
        assert_eq!(session.tree.graph.get_node(a).unwrap().label, "a");
    }

    #[test]
    fn events_for_absent_nodes_are_dropped() {
        let (mut session, _, _) = session_with_two_nodes();
        assert_eq!(session.handle_event(CanvasEvent::NodeSelected(NodeId(99))), None);
        assert_eq!(
            session.handle_event(CanvasEvent::NodeDoubleClicked(NodeId(99))),
            None
        );
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn mark_selected_without_selection_is_reported() {
        let (mut session, _, _) = session_with_two_nodes();
        assert!(!session.mark_selected(true).unwrap());
    }

    #[test]
    fn mark_selected_updates_node_and_render_styles() {
        let (mut session, a, b) = session_with_two_nodes();
        session.tree.create_edge(a, b).unwrap();

        session.handle_event(CanvasEvent::NodeSelected(a));
        assert!(session.mark_selected(true).unwrap());
        session.handle_event(CanvasEvent::NodeSelected(b));
        assert!(session.mark_selected(true).unwrap());

        let commands = session.render_commands();
        let RenderCommand::RenderNodes(nodes) = &commands[0] else {
            panic!("expected RenderNodes first");
        };
        assert!(nodes
            .iter()
            .all(|view| view.color.background == NODE_COMPLETE_BG));
        let RenderCommand::RenderEdges(edges) = &commands[1] else {
            panic!("expected RenderEdges second");
        };
        assert_eq!(edges[0].color, EDGE_HIGHLIGHT_COLOR);
    }

    #[test]
    fn edit_note_replaces_selected_nodes_text() {
        let (mut session, a, _) = session_with_two_nodes();
        assert!(!session.edit_note("ignored"));

        session.handle_event(CanvasEvent::NodeSelected(a));
        assert!(session.edit_note("first"));
        assert!(session.edit_note("first revised"));
        assert_eq!(session.tree.notes.get_note(a), "first revised");
    }
}

//! The persistence codec: transfer documents for whole trees.
//!
//! [`TreeDocument`] is the JSON-shaped contract shared with the persistence
//! collaborator: `{ nodes: [...], edges: [...], notes: { "<nodeId>": text } }`.
//! Each node and edge carries everything needed to reconstruct visual state
//! (completion flags, cached highlight), so a freshly loaded tree renders
//! correctly before any completion change runs.
//!
//! Round-trip law: `deserialize(&serialize(&tree))` is observationally
//! equivalent to `tree` -- same node set, same edge set, same notes mapping,
//! same completion flags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::edge::SkillEdge;
use crate::error::CoreError;
use crate::id::NodeId;
use crate::node::SkillNode;
use crate::tree::Tree;

/// The transfer document for one named tree.
///
/// `nodes` and `edges` are required on load (a payload missing either is
/// malformed); `notes` defaults to empty for documents produced before notes
/// existed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDocument {
    pub nodes: Vec<SkillNode>,
    pub edges: Vec<SkillEdge>,
    #[serde(default)]
    pub notes: BTreeMap<String, String>,
}

/// Serializes a tree into its transfer document.
///
/// Nodes and edges are emitted in id order so equal trees produce equal
/// documents.
pub fn serialize(tree: &Tree) -> TreeDocument {
    let mut nodes: Vec<SkillNode> = tree.graph.nodes().cloned().collect();
    nodes.sort_by_key(|node| node.id);
    let mut edges: Vec<SkillEdge> = tree.graph.edges().cloned().collect();
    edges.sort_by_key(|edge| edge.id);
    let notes = tree
        .notes
        .iter()
        .map(|(id, text)| (id.to_string(), text.to_string()))
        .collect();
    TreeDocument {
        nodes,
        edges,
        notes,
    }
}

/// Reconstructs a tree from a transfer document.
///
/// Fails with `MalformedDocument` when ids collide, an edge references a
/// missing node or forms a self-loop, more than one node claims root, or a
/// notes key is not a node id. On failure nothing is installed; callers keep
/// whatever tree they had.
///
/// Root styling is re-derived from the sentinel id rather than trusted from
/// the stored flag, so imported documents cannot smuggle in a second root.
pub fn deserialize(doc: &TreeDocument) -> Result<Tree, CoreError> {
    let mut tree = Tree::new();

    for node in &doc.nodes {
        let mut node = node.clone();
        node.is_root = node.id == NodeId::ROOT;
        tree.graph
            .insert_node(node)
            .map_err(|err| CoreError::MalformedDocument {
                reason: err.to_string(),
            })?;
    }

    for edge in &doc.edges {
        tree.graph
            .insert_edge(edge.clone())
            .map_err(|err| CoreError::MalformedDocument {
                reason: err.to_string(),
            })?;
    }

    for (key, text) in &doc.notes {
        let id: u32 = key.parse().map_err(|_| CoreError::MalformedDocument {
            reason: format!("notes key is not a node id: '{key}'"),
        })?;
        let id = NodeId(id);
        // Notes for nodes that no longer exist are dropped, never persisted
        // onward.
        if tree.graph.contains_node(id) {
            tree.notes.set_note(id, text.clone());
        }
    }

    Ok(tree)
}

/// Parses a raw JSON value into a [`TreeDocument`].
///
/// Structural failures (missing `nodes`/`edges` arrays, wrong shapes) map to
/// `MalformedDocument`.
pub fn document_from_json(value: serde_json::Value) -> Result<TreeDocument, CoreError> {
    serde_json::from_value(value).map_err(|err| CoreError::MalformedDocument {
        reason: err.to_string(),
    })
}

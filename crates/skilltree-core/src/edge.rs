//! Prerequisite edge data model.

use serde::{Deserialize, Serialize};

use crate::id::{EdgeId, NodeId};

/// A directed prerequisite relation between two nodes.
///
/// `highlighted` is derived state (both endpoints completed) but is cached on
/// the edge so a freshly loaded tree renders correctly before any completion
/// change runs. It is recomputed by the completion engine whenever either
/// endpoint's flag flips. Duplicate edges between the same ordered pair are
/// permitted; self-loops are rejected at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEdge {
    /// Stable identity, assigned at creation and never reused.
    pub id: EdgeId,
    /// Source node id.
    pub from: NodeId,
    /// Target node id.
    pub to: NodeId,
    /// True iff both endpoints are completed (recomputed, never set directly).
    #[serde(default)]
    pub highlighted: bool,
}

impl SkillEdge {
    /// Creates a new edge. `highlighted` starts false; the graph computes the
    /// real value from the endpoints at insertion time.
    pub fn new(id: EdgeId, from: NodeId, to: NodeId) -> Self {
        SkillEdge {
            id,
            from,
            to,
            highlighted: false,
        }
    }

    /// Returns `true` if this edge has `node` as either endpoint.
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touches_either_endpoint() {
        let edge = SkillEdge::new(EdgeId(0), NodeId(1), NodeId(2));
        assert!(edge.touches(NodeId(1)));
        assert!(edge.touches(NodeId(2)));
        assert!(!edge.touches(NodeId(3)));
    }
}

//! SkillGraph: the canonical store of nodes and prerequisite edges.
//!
//! [`SkillGraph`] is the single source of truth for graph structure. It wraps
//! a petgraph `StableGraph` and layers stable external ids on top of it:
//! petgraph indices may be reused after removal, but [`NodeId`]/[`EdgeId`]
//! values are allocated from monotonic counters and never reused, so they are
//! safe to hold in notes, selections, and persisted documents.
//!
//! All mutations are synchronous and take effect atomically from the
//! caller's perspective; a failed operation leaves the graph untouched.

use indexmap::IndexMap;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::stable_graph::StableGraph;
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use crate::edge::SkillEdge;
use crate::error::CoreError;
use crate::id::{EdgeId, NodeId};
use crate::node::SkillNode;

/// The canonical node/edge store for one skill tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGraph {
    inner: StableGraph<SkillNode, SkillEdge, Directed, u32>,
    node_indices: IndexMap<NodeId, NodeIndex<u32>>,
    edge_indices: IndexMap<EdgeId, EdgeIndex<u32>>,
    /// Next regular node id. Starts at 1; 0 is the root sentinel.
    next_node_id: u32,
    next_edge_id: u32,
}

impl SkillGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        SkillGraph {
            inner: StableGraph::new(),
            node_indices: IndexMap::new(),
            edge_indices: IndexMap::new(),
            next_node_id: 1,
            next_edge_id: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Node operations
    // -----------------------------------------------------------------------

    /// Adds a regular node with the given label, allocating a fresh id.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        let idx = self.inner.add_node(SkillNode::new(id, label));
        self.node_indices.insert(id, idx);
        id
    }

    /// Inserts a fully-formed node under its own id.
    ///
    /// Reconstruction path used by the persistence codec and by root
    /// designation; fails with `DuplicateNode` if the id is already taken.
    /// Bumps the allocation counter past the restored id so later
    /// `add_node` calls can never collide with it.
    pub fn insert_node(&mut self, node: SkillNode) -> Result<NodeId, CoreError> {
        let id = node.id;
        if self.node_indices.contains_key(&id) {
            return Err(CoreError::DuplicateNode { id });
        }
        if id.0 >= self.next_node_id {
            self.next_node_id = id.0 + 1;
        }
        let idx = self.inner.add_node(node);
        self.node_indices.insert(id, idx);
        Ok(id)
    }

    /// Removes a node, cascading removal of every edge touching it.
    ///
    /// Returns the removed node. Fails with `NodeNotFound` if absent.
    pub fn remove_node(&mut self, id: NodeId) -> Result<SkillNode, CoreError> {
        let idx = self
            .node_indices
            .get(&id)
            .copied()
            .ok_or(CoreError::NodeNotFound { id })?;

        // Incident edge ids must be dropped from the id map before petgraph
        // removes the underlying edges.
        let incident: Vec<EdgeId> = self
            .incident_edge_indices(idx)
            .into_iter()
            .map(|eidx| self.inner[eidx].id)
            .collect();
        for eid in incident {
            self.edge_indices.shift_remove(&eid);
        }

        self.node_indices.shift_remove(&id);
        let node = self
            .inner
            .remove_node(idx)
            .ok_or(CoreError::NodeNotFound { id })?;
        Ok(node)
    }

    /// Looks up a node by id.
    pub fn get_node(&self, id: NodeId) -> Result<&SkillNode, CoreError> {
        self.node_indices
            .get(&id)
            .and_then(|&idx| self.inner.node_weight(idx))
            .ok_or(CoreError::NodeNotFound { id })
    }

    /// Mutable node lookup, restricted to the crate so that completion flips
    /// and renames stay behind their dedicated entry points.
    pub(crate) fn get_node_mut(&mut self, id: NodeId) -> Result<&mut SkillNode, CoreError> {
        let idx = self
            .node_indices
            .get(&id)
            .copied()
            .ok_or(CoreError::NodeNotFound { id })?;
        self.inner
            .node_weight_mut(idx)
            .ok_or(CoreError::NodeNotFound { id })
    }

    /// Returns `true` if a node with this id exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_indices.contains_key(&id)
    }

    /// Returns the designated root node, if one exists.
    pub fn root(&self) -> Option<&SkillNode> {
        self.get_node(NodeId::ROOT).ok()
    }

    /// Iterates over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &SkillNode> {
        self.inner.node_weights()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    // -----------------------------------------------------------------------
    // Edge operations
    // -----------------------------------------------------------------------

    /// Adds a directed edge between two existing nodes, allocating a fresh id.
    ///
    /// Fails with `SelfLoop` when `from == to` and `MissingEndpoint` when
    /// either endpoint does not exist. Duplicate edges between the same
    /// ordered pair are permitted. The edge's highlight state is computed
    /// from the endpoints' completion flags at insertion time.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<EdgeId, CoreError> {
        if from == to {
            return Err(CoreError::SelfLoop { id: from });
        }
        let from_idx = self
            .node_indices
            .get(&from)
            .copied()
            .ok_or(CoreError::MissingEndpoint { id: from })?;
        let to_idx = self
            .node_indices
            .get(&to)
            .copied()
            .ok_or(CoreError::MissingEndpoint { id: to })?;

        let id = EdgeId(self.next_edge_id);
        self.next_edge_id += 1;

        let mut edge = SkillEdge::new(id, from, to);
        edge.highlighted = self.inner[from_idx].completed && self.inner[to_idx].completed;

        let eidx = self.inner.add_edge(from_idx, to_idx, edge);
        self.edge_indices.insert(id, eidx);
        Ok(id)
    }

    /// Inserts a fully-formed edge under its own id (reconstruction path).
    ///
    /// Same endpoint validation as [`add_edge`](Self::add_edge), plus a
    /// `DuplicateEdge` check. Highlight state is re-derived from the
    /// endpoints rather than trusted from the stored value.
    pub fn insert_edge(&mut self, edge: SkillEdge) -> Result<EdgeId, CoreError> {
        let id = edge.id;
        if self.edge_indices.contains_key(&id) {
            return Err(CoreError::DuplicateEdge { id });
        }
        if edge.from == edge.to {
            return Err(CoreError::SelfLoop { id: edge.from });
        }
        let from_idx = self
            .node_indices
            .get(&edge.from)
            .copied()
            .ok_or(CoreError::MissingEndpoint { id: edge.from })?;
        let to_idx = self
            .node_indices
            .get(&edge.to)
            .copied()
            .ok_or(CoreError::MissingEndpoint { id: edge.to })?;

        if id.0 >= self.next_edge_id {
            self.next_edge_id = id.0 + 1;
        }

        let mut edge = edge;
        edge.highlighted = self.inner[from_idx].completed && self.inner[to_idx].completed;

        let eidx = self.inner.add_edge(from_idx, to_idx, edge);
        self.edge_indices.insert(id, eidx);
        Ok(id)
    }

    /// Removes an edge. Fails with `EdgeNotFound` if absent.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<SkillEdge, CoreError> {
        let idx = self
            .edge_indices
            .shift_remove(&id)
            .ok_or(CoreError::EdgeNotFound { id })?;
        self.inner
            .remove_edge(idx)
            .ok_or(CoreError::EdgeNotFound { id })
    }

    /// Looks up an edge by id.
    pub fn get_edge(&self, id: EdgeId) -> Result<&SkillEdge, CoreError> {
        self.edge_indices
            .get(&id)
            .and_then(|&idx| self.inner.edge_weight(idx))
            .ok_or(CoreError::EdgeNotFound { id })
    }

    /// Iterates over all edges.
    pub fn edges(&self) -> impl Iterator<Item = &SkillEdge> {
        self.inner.edge_weights()
    }

    /// Returns every edge with the given node as either endpoint.
    ///
    /// Returns an empty vec for absent nodes (queries never fail).
    pub fn edges_touching(&self, id: NodeId) -> Vec<&SkillEdge> {
        let Some(&idx) = self.node_indices.get(&id) else {
            return Vec::new();
        };
        self.incident_edge_indices(idx)
            .into_iter()
            .map(|eidx| &self.inner[eidx])
            .collect()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    // -----------------------------------------------------------------------
    // Completion support (crate-private; see the completion module)
    // -----------------------------------------------------------------------

    /// Recomputes the cached highlight state of every edge incident to `id`.
    ///
    /// Only edges touching the node can change when its completion flag
    /// flips, so the whole-graph sweep the original UI performed is not
    /// needed here.
    pub(crate) fn refresh_incident_highlights(&mut self, id: NodeId) {
        let Some(&idx) = self.node_indices.get(&id) else {
            return;
        };
        for eidx in self.incident_edge_indices(idx) {
            let Some((a, b)) = self.inner.edge_endpoints(eidx) else {
                continue;
            };
            let highlighted = self.inner[a].completed && self.inner[b].completed;
            self.inner[eidx].highlighted = highlighted;
        }
    }

    /// Edge indices incident to a node, outgoing then incoming. Self-loops
    /// are rejected at creation, so no edge appears twice.
    fn incident_edge_indices(&self, idx: NodeIndex<u32>) -> Vec<EdgeIndex<u32>> {
        let mut out: Vec<EdgeIndex<u32>> = Vec::new();
        for dir in [Direction::Outgoing, Direction::Incoming] {
            out.extend(self.inner.edges_directed(idx, dir).map(|edge| edge.id()));
        }
        out
    }
}

impl Default for SkillGraph {
    fn default() -> Self {
        Self::new()
    }
}

//! Core error types for skilltree-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering all
//! anticipated failure modes in the graph data model. Structural errors
//! (`SelfLoop`, `MissingEndpoint`, `EmptyLabel`) are rejected at the editing
//! boundary and never partially mutate state.

use crate::id::{EdgeId, NodeId};
use thiserror::Error;

/// Core errors produced by the skilltree-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A node id was not found in the graph.
    #[error("node not found: NodeId({id})", id = id.0)]
    NodeNotFound { id: NodeId },

    /// An edge id was not found in the graph.
    #[error("edge not found: EdgeId({id})", id = id.0)]
    EdgeNotFound { id: EdgeId },

    /// An edge connecting a node to itself was rejected.
    #[error("cannot connect a node to itself: NodeId({id})", id = id.0)]
    SelfLoop { id: NodeId },

    /// An edge referenced an endpoint that does not exist.
    #[error("edge endpoint missing: NodeId({id})", id = id.0)]
    MissingEndpoint { id: NodeId },

    /// A node with this id already exists (reconstruction path only).
    #[error("duplicate node id: NodeId({id})", id = id.0)]
    DuplicateNode { id: NodeId },

    /// An edge with this id already exists (reconstruction path only).
    #[error("duplicate edge id: EdgeId({id})", id = id.0)]
    DuplicateEdge { id: EdgeId },

    /// A create or rename was submitted with a label that trims to empty.
    #[error("node label cannot be empty")]
    EmptyLabel,

    /// A persistence payload failed structural validation on load.
    #[error("malformed document: {reason}")]
    MalformedDocument { reason: String },
}

//! Stable ID newtypes for graph entities.
//!
//! Both IDs are distinct newtype wrappers over `u32`, providing type safety
//! so that a `NodeId` cannot be accidentally used where an `EdgeId` is
//! expected. IDs are allocated monotonically by [`SkillGraph`] and are never
//! reused after deletion, so they stay valid as external references (notes
//! keys, persisted documents) for the lifetime of a tree.
//!
//! [`SkillGraph`]: crate::graph::SkillGraph

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The well-known sentinel id reserved for the designated root node.
    ///
    /// Regular allocation starts at 1, so the sentinel can never collide
    /// with an editor-created node.
    pub const ROOT: NodeId = NodeId(0);
}

/// Stable edge identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_display() {
        assert_eq!(format!("{}", NodeId(7)), "7");
    }

    #[test]
    fn edge_id_display() {
        assert_eq!(format!("{}", EdgeId(99)), "99");
    }

    #[test]
    fn root_sentinel_is_zero() {
        assert_eq!(NodeId::ROOT, NodeId(0));
    }

    #[test]
    fn serde_roundtrip() {
        let node = NodeId(42);
        let json = serde_json::to_string(&node).unwrap();
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}

//! Visual style derivation for the rendering collaborator.
//!
//! The renderer draws whatever it is told; all styling decisions (colors,
//! widths, sizes) are derived here from completion state so a freshly loaded
//! tree renders correctly without replaying any completion changes.

use serde::{Deserialize, Serialize};

use crate::edge::SkillEdge;
use crate::id::{EdgeId, NodeId};
use crate::node::SkillNode;

/// Background of an incomplete node.
pub const NODE_DEFAULT_BG: &str = "#b3e5fc";
/// Background of a completed node.
pub const NODE_COMPLETE_BG: &str = "#4caf50";
/// Border of an incomplete node.
pub const NODE_DEFAULT_BORDER: &str = "#0288d1";
/// Border of a completed node.
pub const NODE_COMPLETE_BORDER: &str = "#38823b";
/// Label color on an incomplete node.
pub const FONT_DEFAULT: &str = "#333";
/// Label color on a completed node.
pub const FONT_COMPLETE: &str = "#fff";
/// Color of a regular edge.
pub const EDGE_DEFAULT_COLOR: &str = "#0288d1";
/// Color of a highlighted edge (both endpoints complete).
pub const EDGE_HIGHLIGHT_COLOR: &str = "#4caf50";
/// Width of a regular edge.
pub const EDGE_DEFAULT_WIDTH: u32 = 1;
/// Width of a highlighted edge.
pub const EDGE_HIGHLIGHT_WIDTH: u32 = 3;
/// Size of a regular node.
pub const NODE_SIZE: u32 = 15;
/// Size of the root node (visually emphasized).
pub const ROOT_SIZE: u32 = 30;

/// Node fill and border colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeColor {
    pub background: String,
    pub border: String,
}

/// A node with its derived visual attributes, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: NodeId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub color: NodeColor,
    pub font_color: String,
    pub size: u32,
}

/// An edge with its derived visual attributes, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeView {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub color: String,
    pub width: u32,
}

/// Derives render attributes for one node.
pub fn node_view(node: &SkillNode) -> NodeView {
    let (background, border, font_color) = if node.completed {
        (NODE_COMPLETE_BG, NODE_COMPLETE_BORDER, FONT_COMPLETE)
    } else {
        (NODE_DEFAULT_BG, NODE_DEFAULT_BORDER, FONT_DEFAULT)
    };
    NodeView {
        id: node.id,
        label: node.label.clone(),
        title: node.title.clone(),
        color: NodeColor {
            background: background.to_string(),
            border: border.to_string(),
        },
        font_color: font_color.to_string(),
        size: if node.is_root { ROOT_SIZE } else { NODE_SIZE },
    }
}

/// Derives render attributes for one edge.
pub fn edge_view(edge: &SkillEdge) -> EdgeView {
    let (color, width) = if edge.highlighted {
        (EDGE_HIGHLIGHT_COLOR, EDGE_HIGHLIGHT_WIDTH)
    } else {
        (EDGE_DEFAULT_COLOR, EDGE_DEFAULT_WIDTH)
    };
    EdgeView {
        id: edge.id,
        from: edge.from,
        to: edge.to,
        color: color.to_string(),
        width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_node_turns_green() {
        let mut node = SkillNode::new(NodeId(1), "a");
        node.completed = true;
        let view = node_view(&node);
        assert_eq!(view.color.background, NODE_COMPLETE_BG);
        assert_eq!(view.font_color, FONT_COMPLETE);
        assert_eq!(view.size, NODE_SIZE);
    }

    #[test]
    fn root_node_is_larger() {
        let view = node_view(&SkillNode::root("Algebra"));
        assert_eq!(view.size, ROOT_SIZE);
        assert_eq!(view.title.as_deref(), Some("Algebra"));
    }

    #[test]
    fn highlighted_edge_is_bold_green() {
        let mut edge = SkillEdge::new(EdgeId(0), NodeId(1), NodeId(2));
        let view = edge_view(&edge);
        assert_eq!(view.color, EDGE_DEFAULT_COLOR);
        assert_eq!(view.width, EDGE_DEFAULT_WIDTH);

        edge.highlighted = true;
        let view = edge_view(&edge);
        assert_eq!(view.color, EDGE_HIGHLIGHT_COLOR);
        assert_eq!(view.width, EDGE_HIGHLIGHT_WIDTH);
    }
}

//! Graph state and completion-propagation engine for skill trees.
//!
//! A skill tree is a small directed graph of named skill nodes connected by
//! prerequisite edges, each node optionally marked complete and carrying
//! free-text notes. This crate owns the in-memory model, the editing
//! commands, the edge-highlight derivation, and the serialization contract;
//! rendering, layout, and UI chrome are external collaborators driven
//! through typed commands and events.

pub mod codec;
pub mod completion;
pub mod edge;
pub mod editor;
pub mod error;
pub mod events;
pub mod graph;
pub mod id;
pub mod node;
pub mod notes;
pub mod style;
pub mod tree;

// Re-export commonly used types
pub use codec::TreeDocument;
pub use edge::SkillEdge;
pub use editor::{LabelReply, SelectionItem};
pub use error::CoreError;
pub use events::{CanvasEvent, EditorSession, RenderCommand, UiRequest};
pub use graph::SkillGraph;
pub use id::{EdgeId, NodeId};
pub use node::SkillNode;
pub use notes::NotesStore;
pub use tree::Tree;

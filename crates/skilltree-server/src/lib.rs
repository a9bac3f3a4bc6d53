//! HTTP/JSON persistence facade for skill trees.
//!
//! Exposes save/load/delete/download/import/list over the storage layer,
//! keyed by tree name. The canvas UI talks to these endpoints; all editing
//! happens client-side against the core engine, so the server stays a thin
//! validated key-value facade.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;

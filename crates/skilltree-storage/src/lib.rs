//! Persistence backends for skill trees.
//!
//! Defines the [`TreeStore`] trait (one transfer document per tree name)
//! with two backends: [`MemoryStore`] for tests and ephemeral sessions, and
//! [`FsStore`] storing one JSON file per tree under a data directory.

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use error::StorageError;
pub use fs::FsStore;
pub use memory::MemoryStore;
pub use traits::TreeStore;

//! HTTP handler functions, grouped by resource.

pub mod trees;

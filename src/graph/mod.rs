//! Dependency graph data model
//!
//! This module implements the graph snapshot the rest of the crate
//! operates on:
//! - Nodes with stable string ids, types and display metadata
//! - Directed, typed links (multigraph over the link type)
//! - Snapshot ingestion from analyzer JSON, cross-analyzer merging, and
//!   derived undirected neighbor lists

pub mod link;
pub mod node;
pub mod snapshot;
pub mod types;

// Re-export main types
pub use link::Link;
pub use node::Node;
pub use snapshot::{GraphSnapshot, SnapshotError, SnapshotResult};
pub use types::{LinkType, NodeId, NodeType};

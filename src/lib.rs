//! DependViz core
//!
//! The filtering and slicing engine behind a code-dependency graph
//! visualizer. The surrounding tool (analyzers that build the graph, the
//! settings UI, the rendering layer) supplies snapshots and controls and
//! renders whatever this crate keeps; everything here is synchronous, pure
//! and read-only over the supplied snapshot.
//!
//! # Architecture
//!
//! - `graph`: the snapshot data model: nodes, typed directed links,
//!   analyzer-JSON ingestion, cross-analyzer merging, derived neighbor
//!   lists
//! - `query`: the search mini-language: tokenizer, recursive-descent
//!   parser, AST, per-node evaluation (`AND`/`OR`/`NOT`, field scopes,
//!   `/regex/` literals)
//! - `slice`: bounded-depth directional reachability from a focused node
//! - `filter`: the pipeline composing type toggles, search, slice and
//!   isolation into the rendered subset
//!
//! Malformed input never escalates: unparseable queries fail open (the
//! graph stays complete), invalid regex terms match nothing, and slicing
//! from an unknown focus yields the trivial singleton.
//!
//! # Example
//!
//! ```rust
//! use dependviz::filter;
//! use dependviz::{Controls, GraphSnapshot};
//!
//! let snapshot = GraphSnapshot::from_json(r#"{
//!     "nodes": [
//!         {"id": "app.Main", "type": "Class", "name": "Main"},
//!         {"id": "app.Util", "type": "Class", "name": "Util"},
//!         {"id": "app.Shape", "type": "Interface", "name": "Shape"}
//!     ],
//!     "links": [
//!         {"source": "app.Main", "target": "app.Util", "type": "MethodCall"}
//!     ]
//! }"#).unwrap();
//!
//! let controls = Controls::default().with_search("type:Class");
//! let result = filter::apply(&snapshot, &controls);
//!
//! assert_eq!(result.nodes.len(), 2);
//! assert_eq!(result.links.len(), 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod graph;
pub mod query;
pub mod slice;

// Re-export main types for convenience
pub use graph::{GraphSnapshot, Link, LinkType, Node, NodeId, NodeType, SnapshotError, SnapshotResult};

pub use query::{evaluate, parse_query, ParseError, ParseResult, QueryAst, Token, TokenKind};

pub use slice::{FxIndexSet, SliceResult};

pub use filter::{Controls, FilterResult, TypeFilters};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}

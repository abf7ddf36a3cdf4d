//! Node record for the dependency graph

use super::types::{NodeId, NodeType};
use serde::{Deserialize, Serialize};

/// A node in the dependency graph.
///
/// Nodes carry:
/// - A unique, stable id (the join key for all operations)
/// - A type used by the per-type display toggles
/// - Optional display metadata (name, file path, lines of code)
/// - A derived `neighbors` list, recomputed from the link set whenever the
///   graph changes and never hand-edited
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Node type (e.g. "Class", "Interface")
    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Source file backing this node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Legacy path field emitted by older analyzers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Source line count; analyzers use -1 for "not measured"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_of_code: Option<i64>,

    /// Adjacent node ids, derived from the link set (undirected)
    #[serde(default)]
    pub neighbors: Vec<NodeId>,
}

impl Node {
    /// Create a new node with an id and a type
    pub fn new(id: impl Into<NodeId>, node_type: impl Into<NodeType>) -> Self {
        Node {
            id: id.into(),
            node_type: node_type.into(),
            name: None,
            file_path: None,
            file: None,
            lines_of_code: None,
            neighbors: Vec::new(),
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the source file path
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Set the source line count
    pub fn with_lines_of_code(mut self, lines: i64) -> Self {
        self.lines_of_code = Some(lines);
        self
    }

    /// Resolve the source path, falling back to the legacy `file` field
    pub fn path(&self) -> Option<&str> {
        self.file_path.as_deref().or(self.file.as_deref())
    }

    /// Whether this node has no adjacent nodes in the full graph
    pub fn is_isolated(&self) -> bool {
        self.neighbors.is_empty()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

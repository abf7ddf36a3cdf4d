//! Link record for the dependency graph

use super::types::{LinkType, NodeId};
use serde::{Deserialize, Serialize};

/// A directed link in the dependency graph.
///
/// Multiple links between the same ordered pair of nodes are permitted when
/// their types differ (multigraph). Duplicate `(source, type, target)`
/// triples are deduplicated by producers; equality and hashing cover the
/// full triple so links can live in sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Source node (link goes FROM this node)
    pub source: NodeId,

    /// Target node (link goes TO this node)
    pub target: NodeId,

    /// Dependency kind (e.g. "Extends", "MethodCall")
    #[serde(rename = "type")]
    pub link_type: LinkType,
}

impl Link {
    /// Create a new directed link
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        link_type: impl Into<LinkType>,
    ) -> Self {
        Link {
            source: source.into(),
            target: target.into(),
            link_type: link_type.into(),
        }
    }

    /// Check if this link goes FROM a specific node
    pub fn starts_from(&self, node: &NodeId) -> bool {
        &self.source == node
    }

    /// Check if this link goes TO a specific node
    pub fn ends_at(&self, node: &NodeId) -> bool {
        &self.target == node
    }
}

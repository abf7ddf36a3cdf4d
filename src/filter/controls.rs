//! View controls consumed by the filter pipeline.
//!
//! Controls arrive from the settings layer as a flat camelCase JSON object
//! and are passed to the pipeline explicitly; nothing in this crate reads
//! process-global configuration.

use crate::graph::{LinkType, NodeId, NodeType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-type display toggles for nodes and edges.
///
/// A type with no entry is enabled: new types coming out of an analyzer
/// show up until the user switches them off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeFilters {
    #[serde(default)]
    pub node: IndexMap<String, bool>,

    #[serde(default)]
    pub edge: IndexMap<String, bool>,
}

/// The subset of the view settings the core pipeline acts on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Controls {
    /// Raw search query; empty means no search filter
    pub search: String,

    /// Drop nodes that have no neighbors in the full graph
    pub hide_isolated_nodes: bool,

    /// Follow links out of the focused node
    pub enable_forward_slice: bool,

    /// Follow links into the focused node
    pub enable_backward_slice: bool,

    /// Hop budget for slicing
    pub slice_depth: u32,

    /// Currently focused node, if any
    pub focused_node: Option<NodeId>,

    /// Per-type display toggles
    pub type_filters: TypeFilters,
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            search: String::new(),
            hide_isolated_nodes: false,
            enable_forward_slice: true,
            enable_backward_slice: true,
            slice_depth: 3,
            focused_node: None,
            type_filters: TypeFilters::default(),
        }
    }
}

impl Controls {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_focus(mut self, focus: impl Into<NodeId>) -> Self {
        self.focused_node = Some(focus.into());
        self
    }

    pub fn with_slice(mut self, forward: bool, backward: bool, depth: u32) -> Self {
        self.enable_forward_slice = forward;
        self.enable_backward_slice = backward;
        self.slice_depth = depth;
        self
    }

    pub fn with_hidden_isolated(mut self) -> Self {
        self.hide_isolated_nodes = true;
        self
    }

    pub fn with_node_type(mut self, node_type: impl Into<String>, enabled: bool) -> Self {
        self.type_filters.node.insert(node_type.into(), enabled);
        self
    }

    pub fn with_edge_type(mut self, edge_type: impl Into<String>, enabled: bool) -> Self {
        self.type_filters.edge.insert(edge_type.into(), enabled);
        self
    }

    /// Whether nodes of this type are shown
    pub fn node_type_enabled(&self, node_type: &NodeType) -> bool {
        self.type_filters
            .node
            .get(node_type.as_str())
            .copied()
            .unwrap_or(true)
    }

    /// Whether links of this type are shown
    pub fn edge_type_enabled(&self, link_type: &LinkType) -> bool {
        self.type_filters
            .edge
            .get(link_type.as_str())
            .copied()
            .unwrap_or(true)
    }

    /// Whether a slice restriction is in effect
    pub fn slicing_active(&self) -> bool {
        self.focused_node.is_some() && (self.enable_forward_slice || self.enable_backward_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_settings_layer() {
        let controls = Controls::default();
        assert_eq!(controls.search, "");
        assert!(!controls.hide_isolated_nodes);
        assert!(controls.enable_forward_slice);
        assert!(controls.enable_backward_slice);
        assert_eq!(controls.slice_depth, 3);
        assert_eq!(controls.focused_node, None);
    }

    #[test]
    fn test_missing_type_entry_is_enabled() {
        let controls = Controls::default().with_node_type("Class", false);
        assert!(!controls.node_type_enabled(&NodeType::new("Class")));
        assert!(controls.node_type_enabled(&NodeType::new("Interface")));
        assert!(controls.edge_type_enabled(&LinkType::new("Extends")));
    }

    #[test]
    fn test_slicing_active_requires_focus_and_direction() {
        let unfocused = Controls::default();
        assert!(!unfocused.slicing_active());

        let focused = Controls::default().with_focus("a");
        assert!(focused.slicing_active());

        let no_direction = Controls::default().with_focus("a").with_slice(false, false, 3);
        assert!(!no_direction.slicing_active());
    }

    #[test]
    fn test_serde_camel_case_round_trip() {
        let json = r#"{
            "search": "type:Class",
            "hideIsolatedNodes": true,
            "enableForwardSlice": false,
            "sliceDepth": 5,
            "focusedNode": "app.Main",
            "typeFilters": {"node": {"Enum": false}, "edge": {}}
        }"#;

        let controls: Controls = serde_json::from_str(json).unwrap();
        assert_eq!(controls.search, "type:Class");
        assert!(controls.hide_isolated_nodes);
        assert!(!controls.enable_forward_slice);
        // Unspecified fields keep their defaults
        assert!(controls.enable_backward_slice);
        assert_eq!(controls.slice_depth, 5);
        assert_eq!(controls.focused_node, Some(NodeId::new("app.Main")));
        assert!(!controls.node_type_enabled(&NodeType::new("Enum")));

        let back = serde_json::to_string(&controls).unwrap();
        let reparsed: Controls = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, controls);
    }
}

//! The filter pipeline: composes type toggles, search, slicing and the
//! isolation rule into the rendered subset.
//!
//! `apply` is pure and deterministic. Output node and link order equal
//! input order; repeated invocations with the same inputs produce
//! value-equal results.

use super::controls::Controls;
use crate::graph::{GraphSnapshot, Link, Node, NodeId};
use crate::query::{evaluate, parse_query};
use crate::slice::{slice, SliceResult};
use rustc_hash::FxHashSet;
use tracing::debug;

/// The rendered subset plus the raw slice sets for the dimming layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,

    /// Present when a slice restriction was in effect for this run
    pub slice: Option<SliceResult>,
}

/// Run the filter rules over a snapshot.
///
/// Rules apply in order, each to the survivors of the previous:
/// 1. Type filter: disabled node types drop out.
/// 2. Search filter: nodes failing the query drop out. A malformed query
///    fails open and drops nothing.
/// 3. Slice restriction: with a focused node and at least one direction
///    enabled, survivors are intersected with the slice computed over the
///    FULL snapshot.
/// 4. Isolation filter: with `hide_isolated_nodes` set, nodes isolated in
///    the FULL graph drop out. A node whose neighbors were all filtered
///    away in steps 1-3 is not isolated.
/// 5. Link derivation: a link survives iff its type is enabled and both
///    endpoints survived.
pub fn apply(snapshot: &GraphSnapshot, controls: &Controls) -> FilterResult {
    // 1. Type filter
    let mut survivors: Vec<&Node> = snapshot
        .nodes
        .iter()
        .filter(|node| controls.node_type_enabled(&node.node_type))
        .collect();

    // 2. Search filter (fail-open on parse errors)
    let ast = match parse_query(&controls.search) {
        Ok(ast) => ast,
        Err(err) => {
            debug!(query = %controls.search, %err, "query rejected, search filter disabled");
            None
        }
    };
    if let Some(ast) = &ast {
        survivors.retain(|node| evaluate(Some(ast), node));
    }

    // 3. Slice restriction, computed over the full snapshot
    let slice_result = controls.focused_node.as_ref().and_then(|focus| {
        if controls.slicing_active() {
            Some(slice(
                snapshot,
                focus,
                controls.enable_forward_slice,
                controls.enable_backward_slice,
                controls.slice_depth,
            ))
        } else {
            None
        }
    });
    if let Some(slice_result) = &slice_result {
        survivors.retain(|node| slice_result.contains_node(&node.id));
    }

    // 4. Isolation filter over the pre-filter neighbor lists
    if controls.hide_isolated_nodes {
        survivors.retain(|node| !node.is_isolated());
    }

    // 5. Link derivation
    let surviving_ids: FxHashSet<&NodeId> = survivors.iter().map(|node| &node.id).collect();
    let links: Vec<Link> = snapshot
        .links
        .iter()
        .filter(|link| {
            controls.edge_type_enabled(&link.link_type)
                && surviving_ids.contains(&link.source)
                && surviving_ids.contains(&link.target)
        })
        .cloned()
        .collect();

    debug!(
        nodes_in = snapshot.node_count(),
        nodes_out = survivors.len(),
        links_in = snapshot.link_count(),
        links_out = links.len(),
        "applied filter pipeline"
    );

    FilterResult {
        nodes: survivors.into_iter().cloned().collect(),
        links,
        slice: slice_result,
    }
}

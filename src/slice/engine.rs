//! Bounded, directional reachability from a focused node.
//!
//! A slice is the neighborhood of a focus node reachable within a hop
//! budget, following links forward (along their direction), backward
//! (against it), or both. The engine is a single breadth-first pass over a
//! per-invocation adjacency view; both directions share one visited set, so
//! every node is expanded at most once and cyclic graphs terminate.

use crate::graph::{GraphSnapshot, Link, NodeId};
use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashMap};
use std::collections::VecDeque;
use tracing::debug;

/// Insertion-ordered hash set; iteration order is discovery order, so
/// slice results are deterministic across runs.
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Result of a slice computation.
///
/// `slice_nodes` always contains the focus id, even at depth 0 or with
/// both directions disabled; `slice_links` holds every link traversed
/// inside the depth budget, including links that close a cycle back into
/// the slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceResult {
    pub slice_nodes: FxIndexSet<NodeId>,
    pub slice_links: FxIndexSet<Link>,
}

impl SliceResult {
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.slice_nodes.contains(id)
    }

    pub fn contains_link(&self, link: &Link) -> bool {
        self.slice_links.contains(link)
    }
}

/// A read-only index of the link set for traversal.
///
/// Maps each node id to the indices of its outgoing and incoming links.
/// Built once per slice invocation; the link order within each bucket is
/// the input link order.
struct AdjacencyView {
    outgoing: FxHashMap<NodeId, Vec<usize>>,
    incoming: FxHashMap<NodeId, Vec<usize>>,
}

impl AdjacencyView {
    fn new(links: &[Link]) -> Self {
        let mut outgoing: FxHashMap<NodeId, Vec<usize>> = FxHashMap::default();
        let mut incoming: FxHashMap<NodeId, Vec<usize>> = FxHashMap::default();

        for (idx, link) in links.iter().enumerate() {
            outgoing.entry(link.source.clone()).or_default().push(idx);
            incoming.entry(link.target.clone()).or_default().push(idx);
        }

        AdjacencyView { outgoing, incoming }
    }
}

/// Compute the slice around `focus`.
///
/// `max_depth` counts link traversals from the focus: depth 0 is the focus
/// alone. A focus id absent from the graph yields the trivial singleton,
/// which is a valid result, not an error.
pub fn slice(
    snapshot: &GraphSnapshot,
    focus: &NodeId,
    forward: bool,
    backward: bool,
    max_depth: u32,
) -> SliceResult {
    let mut slice_nodes: FxIndexSet<NodeId> = FxIndexSet::default();
    let mut slice_links: FxIndexSet<Link> = FxIndexSet::default();
    slice_nodes.insert(focus.clone());

    if !forward && !backward {
        return SliceResult {
            slice_nodes,
            slice_links,
        };
    }

    let view = AdjacencyView::new(&snapshot.links);

    // slice_nodes doubles as the visited set: seeded with the focus and
    // shared by both directions, so a node reached one way is not
    // re-expanded the other way.
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    queue.push_back((focus.clone(), max_depth));

    while let Some((id, remaining)) = queue.pop_front() {
        if remaining == 0 {
            continue;
        }

        if forward {
            if let Some(indices) = view.outgoing.get(&id) {
                for &idx in indices {
                    let link = &snapshot.links[idx];
                    slice_links.insert(link.clone());
                    if slice_nodes.insert(link.target.clone()) {
                        queue.push_back((link.target.clone(), remaining - 1));
                    }
                }
            }
        }

        if backward {
            if let Some(indices) = view.incoming.get(&id) {
                for &idx in indices {
                    let link = &snapshot.links[idx];
                    slice_links.insert(link.clone());
                    if slice_nodes.insert(link.source.clone()) {
                        queue.push_back((link.source.clone(), remaining - 1));
                    }
                }
            }
        }
    }

    debug!(
        focus = %focus,
        nodes = slice_nodes.len(),
        links = slice_links.len(),
        "computed slice"
    );

    SliceResult {
        slice_nodes,
        slice_links,
    }
}

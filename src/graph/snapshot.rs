//! Graph snapshot: the immutable `{nodes, links}` view every core
//! operation reads.
//!
//! Snapshots arrive as JSON payloads from the analysis layer, one per
//! analyzed source tree; payloads for different analyzers are merged into a
//! single graph. All downstream components (query evaluation, slicing,
//! filtering) treat the snapshot as read-only.

use super::link::Link;
use super::node::Node;
use super::types::NodeId;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Snapshot ingestion errors
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The analyzer payload did not match the graph data contract
    #[error("malformed graph payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// A dependency graph snapshot.
///
/// `nodes` and `links` keep the order the analyzer produced them in; every
/// downstream operation is order-stable with respect to this snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,

    #[serde(default)]
    pub links: Vec<Link>,
}

impl GraphSnapshot {
    /// Create a snapshot from node and link sets, deriving neighbor lists
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Self {
        let mut snapshot = GraphSnapshot { nodes, links };
        snapshot.recompute_neighbors();
        snapshot
    }

    /// Deserialize an analyzer payload and derive neighbor lists
    pub fn from_json(payload: &str) -> SnapshotResult<Self> {
        let mut snapshot: GraphSnapshot = serde_json::from_str(payload)?;
        snapshot.recompute_neighbors();
        Ok(snapshot)
    }

    /// Look up a node by id
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Merge another snapshot into this one.
    ///
    /// Node identity is the id: unknown ids are appended, known ids are
    /// patched field by field. A patch only fills gaps the earlier analyzer
    /// left behind:
    /// - `type` is overwritten only while it is `"Unknown"`
    /// - `lines_of_code` is overwritten only while it is `-1`
    /// - `file_path` is filled only while unset
    ///
    /// Links are deduplicated on the full `(source, type, target)` triple,
    /// keeping first-appearance order. Neighbor lists are recomputed
    /// afterwards.
    pub fn merge(&mut self, other: GraphSnapshot) {
        let mut index: FxHashMap<NodeId, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();

        for incoming in other.nodes {
            match index.get(&incoming.id) {
                None => {
                    index.insert(incoming.id.clone(), self.nodes.len());
                    self.nodes.push(incoming);
                }
                Some(&i) => {
                    let existing = &mut self.nodes[i];
                    if existing.node_type.as_str() == "Unknown"
                        && incoming.node_type.as_str() != "Unknown"
                    {
                        existing.node_type = incoming.node_type;
                    }
                    if existing.lines_of_code == Some(-1) && incoming.lines_of_code != Some(-1) {
                        existing.lines_of_code = incoming.lines_of_code;
                    }
                    if existing.file_path.is_none() {
                        if let Some(path) = incoming.file_path {
                            existing.file_path = Some(path);
                        }
                    }
                }
            }
        }

        let mut seen: FxHashSet<Link> = self.links.iter().cloned().collect();
        for link in other.links {
            if seen.insert(link.clone()) {
                self.links.push(link);
            }
        }

        self.recompute_neighbors();
        debug!(
            nodes = self.nodes.len(),
            links = self.links.len(),
            "merged graph snapshot"
        );
    }

    /// Rebuild every node's derived `neighbors` list from the link set.
    ///
    /// Adjacency is undirected: each link pushes both endpoints onto each
    /// other's list, and only when both endpoints resolve to nodes in this
    /// snapshot. Parallel links contribute one entry each.
    pub fn recompute_neighbors(&mut self) {
        let index: FxHashMap<NodeId, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();

        let nodes = &mut self.nodes;
        for node in nodes.iter_mut() {
            node.neighbors.clear();
        }

        for link in &self.links {
            let (Some(&a), Some(&b)) = (index.get(&link.source), index.get(&link.target)) else {
                continue;
            };
            nodes[a].neighbors.push(link.target.clone());
            nodes[b].neighbors.push(link.source.clone());
        }
    }

    /// Find the node backed by a given source file.
    ///
    /// Editors hand over absolute paths while analyzers record
    /// workspace-relative ones, so after an exact comparison the lookup
    /// falls back to matching path suffixes component by component.
    pub fn find_node_by_path(&self, path: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.path().is_some_and(|p| paths_match(p, path)))
    }
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

fn paths_match(path1: &str, path2: &str) -> bool {
    if path1.is_empty() || path2.is_empty() {
        return false;
    }
    let norm1 = normalize_path(path1);
    let norm2 = normalize_path(path2);
    if norm1 == norm2 {
        return true;
    }

    let parts1: Vec<&str> = norm1.split('/').filter(|s| !s.is_empty()).collect();
    let parts2: Vec<&str> = norm2.split('/').filter(|s| !s.is_empty()).collect();
    if parts1.is_empty() || parts2.is_empty() {
        return false;
    }

    let min_len = parts1.len().min(parts2.len());
    (1..=min_len).any(|i| parts1[parts1.len() - i..] == parts2[parts2.len() - i..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphSnapshot {
        GraphSnapshot::new(
            vec![
                Node::new("a", "Class").with_name("A"),
                Node::new("b", "Class").with_name("B"),
                Node::new("c", "Interface").with_name("C"),
            ],
            vec![
                Link::new("a", "b", "MethodCall"),
                Link::new("b", "c", "Extends"),
            ],
        )
    }

    #[test]
    fn test_from_json() {
        let snapshot = GraphSnapshot::from_json(
            r#"{
                "nodes": [
                    {"id": "a", "type": "Class"},
                    {"id": "b", "type": "Class"}
                ],
                "links": [
                    {"source": "a", "target": "b", "type": "MethodCall"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.node_count(), 2);
        assert_eq!(snapshot.link_count(), 1);
        // Neighbors are derived during ingestion
        assert_eq!(snapshot.nodes[0].neighbors, vec![NodeId::new("b")]);
        assert_eq!(snapshot.nodes[1].neighbors, vec![NodeId::new("a")]);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = GraphSnapshot::from_json(r#"{"nodes": 42}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed(_)));
    }

    #[test]
    fn test_recompute_neighbors_skips_dangling_links() {
        let snapshot = GraphSnapshot::new(
            vec![Node::new("a", "Class")],
            vec![Link::new("a", "ghost", "MethodCall")],
        );
        assert!(snapshot.nodes[0].neighbors.is_empty());
    }

    #[test]
    fn test_recompute_neighbors_undirected() {
        let snapshot = sample();
        let b = snapshot.node(&NodeId::new("b")).unwrap();
        // b sees both the incoming a->b and the outgoing b->c
        assert_eq!(b.neighbors, vec![NodeId::new("a"), NodeId::new("c")]);
    }

    #[test]
    fn test_merge_appends_new_nodes_and_dedups_links() {
        let mut snapshot = sample();
        snapshot.merge(GraphSnapshot::new(
            vec![Node::new("d", "Class"), Node::new("a", "Class")],
            vec![
                Link::new("a", "b", "MethodCall"), // duplicate
                Link::new("c", "d", "MethodCall"), // new
            ],
        ));

        assert_eq!(snapshot.node_count(), 4);
        assert_eq!(snapshot.link_count(), 3);
        // Input order preserved, new link appended last
        assert_eq!(snapshot.links[2], Link::new("c", "d", "MethodCall"));
    }

    #[test]
    fn test_merge_patches_gaps_only() {
        let mut snapshot = GraphSnapshot::new(
            vec![Node::new("a", "Unknown").with_lines_of_code(-1)],
            vec![],
        );

        snapshot.merge(GraphSnapshot::new(
            vec![Node::new("a", "Class")
                .with_name("ignored")
                .with_file_path("src/A.java")
                .with_lines_of_code(42)],
            vec![],
        ));

        let a = snapshot.node(&NodeId::new("a")).unwrap();
        assert_eq!(a.node_type.as_str(), "Class");
        assert_eq!(a.lines_of_code, Some(42));
        assert_eq!(a.path(), Some("src/A.java"));
        // Name is not a merge-patched field
        assert_eq!(a.name, None);
    }

    #[test]
    fn test_merge_does_not_overwrite_known_fields() {
        let mut snapshot = GraphSnapshot::new(
            vec![Node::new("a", "Interface")
                .with_file_path("src/A.java")
                .with_lines_of_code(10)],
            vec![],
        );

        snapshot.merge(GraphSnapshot::new(
            vec![Node::new("a", "Class")
                .with_file_path("other/A.java")
                .with_lines_of_code(99)],
            vec![],
        ));

        let a = snapshot.node(&NodeId::new("a")).unwrap();
        assert_eq!(a.node_type.as_str(), "Interface");
        assert_eq!(a.lines_of_code, Some(10));
        assert_eq!(a.path(), Some("src/A.java"));
    }

    #[test]
    fn test_find_node_by_path_exact_and_suffix() {
        let snapshot = GraphSnapshot::new(
            vec![
                Node::new("a", "Class").with_file_path("src/app/Main.java"),
                Node::new("b", "Class").with_file_path("src/app/Util.java"),
            ],
            vec![],
        );

        let exact = snapshot.find_node_by_path("src/app/Main.java").unwrap();
        assert_eq!(exact.id.as_str(), "a");

        // Absolute editor path vs workspace-relative analyzer path
        let suffix = snapshot
            .find_node_by_path("/home/user/project/src/app/Util.java")
            .unwrap();
        assert_eq!(suffix.id.as_str(), "b");

        // Windows separators normalize
        let windows = snapshot
            .find_node_by_path(r"C:\project\src\app\Main.java")
            .unwrap();
        assert_eq!(windows.id.as_str(), "a");

        assert!(snapshot.find_node_by_path("src/app/Missing.java").is_none());
    }
}

use std::collections::{HashMap, HashSet};

use stepwise_ir::types::{Edge, GraphNode, NodeId};
use tracing::warn;

/// Undirected neighbor lists keyed by node id.
///
/// Every known node has an entry, possibly empty. Edges naming an unknown
/// node are dropped.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    neighbors: HashMap<NodeId, Vec<NodeId>>,
}

impl Adjacency {
    /// Build neighbor lists sorted ascending, or descending when
    /// `descending` is set.
    pub fn undirected(nodes: &[GraphNode], edges: &[Edge], descending: bool) -> Self {
        let mut neighbors: HashMap<NodeId, Vec<NodeId>> = nodes
            .iter()
            .map(|n| (n.id.clone(), Vec::new()))
            .collect();

        for edge in edges {
            if !neighbors.contains_key(&edge.source) || !neighbors.contains_key(&edge.target) {
                warn!(
                    source = %edge.source,
                    target = %edge.target,
                    "skipping edge with unknown endpoint"
                );
                continue;
            }
            if let Some(list) = neighbors.get_mut(&edge.source) {
                list.push(edge.target.clone());
            }
            if let Some(list) = neighbors.get_mut(&edge.target) {
                list.push(edge.source.clone());
            }
        }

        for list in neighbors.values_mut() {
            list.sort();
            if descending {
                list.reverse();
            }
        }
        Self { neighbors }
    }

    pub fn neighbors(&self, id: &str) -> &[NodeId] {
        self.neighbors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.neighbors.contains_key(id)
    }
}

/// Ids present in `nodes`, for membership checks.
pub fn node_ids(nodes: &[GraphNode]) -> HashSet<&str> {
    nodes.iter().map(|n| n.id.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[&str]) -> Vec<GraphNode> {
        ids.iter().map(|id| GraphNode::new(*id)).collect()
    }

    #[test]
    fn test_neighbors_sorted_both_ways() {
        let edges = vec![Edge::new("A", "C"), Edge::new("A", "B")];
        let asc = Adjacency::undirected(&nodes(&["A", "B", "C"]), &edges, false);
        assert_eq!(asc.neighbors("A"), ["B", "C"]);
        assert_eq!(asc.neighbors("B"), ["A"]);
        let desc = Adjacency::undirected(&nodes(&["A", "B", "C"]), &edges, true);
        assert_eq!(desc.neighbors("A"), ["C", "B"]);
    }

    #[test]
    fn test_unknown_endpoints_are_skipped() {
        let edges = vec![Edge::new("A", "Z")];
        let adj = Adjacency::undirected(&nodes(&["A"]), &edges, false);
        assert!(adj.neighbors("A").is_empty());
        assert!(adj.neighbors("Z").is_empty());
        assert!(!adj.contains("Z"));
    }
}

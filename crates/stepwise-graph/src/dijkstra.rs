//! Array-scan Dijkstra with a next-hop hint built on top of it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use stepwise_ir::types::{GraphNode, NodeId, WeightedEdge};
use stepwise_ir::validate::{
    validate_edge_weights, validate_graph_size, validate_non_negative_weights, ValidationError,
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    pub path: Vec<NodeId>,
    pub total_distance: i64,
    /// Nodes in the order they were settled.
    pub visited_order: Vec<NodeId>,
    pub success: bool,
    pub message: String,
}

impl PathResult {
    fn failure(message: &str, visited_order: Vec<NodeId>) -> Self {
        Self {
            path: Vec::new(),
            total_distance: 0,
            visited_order,
            success: false,
            message: message.to_string(),
        }
    }
}

/// Shortest path from `start` to `target`, settling nodes one at a time.
///
/// Ties between equally distant nodes go to the one listed first; the
/// search stops as soon as the target is settled.
pub fn dijkstra_solve(
    nodes: &[GraphNode],
    edges: &[WeightedEdge],
    start: &str,
    target: &str,
) -> Result<PathResult, ValidationError> {
    validate_graph_size(nodes.len(), edges.len())?;
    validate_edge_weights(edges)?;
    validate_non_negative_weights(edges)?;

    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();
    let (Some(&s), Some(&t)) = (index.get(start), index.get(target)) else {
        return Ok(PathResult::failure("Invalid start or target node.", Vec::new()));
    };

    let n = nodes.len();
    let mut distance: Vec<Option<i64>> = vec![None; n];
    let mut previous: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut visited_order = Vec::new();
    distance[s] = Some(0);

    while let Some((d, current)) = closest_unsettled(&distance, &settled) {
        settled[current] = true;
        visited_order.push(nodes[current].id.clone());
        if current == t {
            break;
        }

        let id = nodes[current].id.as_str();
        for edge in edges {
            let Some(&next) = edge.other(id).and_then(|other| index.get(other)) else {
                continue;
            };
            if settled[next] {
                continue;
            }
            // 32-bit weights over at most MAX_GRAPH_EDGES hops fit in i64.
            let candidate = d + edge.weight;
            if distance[next].map_or(true, |known| candidate < known) {
                distance[next] = Some(candidate);
                previous[next] = Some(current);
            }
        }
    }

    let Some(total_distance) = distance[t] else {
        return Ok(PathResult::failure("No path found.", visited_order));
    };

    let mut path = vec![nodes[t].id.clone()];
    let mut cursor = t;
    while let Some(prev) = previous[cursor] {
        path.push(nodes[prev].id.clone());
        cursor = prev;
    }
    path.reverse();

    debug!(settled = visited_order.len(), distance = total_distance, "dijkstra solved");
    Ok(PathResult {
        path,
        total_distance,
        visited_order,
        success: true,
        message: format!("Shortest path found with distance {total_distance}."),
    })
}

/// Nearest reachable node not yet settled; the first listed wins ties.
fn closest_unsettled(distance: &[Option<i64>], settled: &[bool]) -> Option<(i64, usize)> {
    distance
        .iter()
        .enumerate()
        .filter(|(i, _)| !settled[*i])
        .filter_map(|(i, d)| d.map(|d| (d, i)))
        .min_by_key(|&(d, _)| d)
}

/// The node to move to next on a shortest path from `current` to `target`.
///
/// `None` when already at the target or when no path exists.
pub fn dijkstra_next_move(
    nodes: &[GraphNode],
    edges: &[WeightedEdge],
    current: &str,
    target: &str,
) -> Result<Option<NodeId>, ValidationError> {
    let result = dijkstra_solve(nodes, edges, current, target)?;
    if result.success && result.path.len() > 1 {
        Ok(Some(result.path[1].clone()))
    } else {
        Ok(None)
    }
}

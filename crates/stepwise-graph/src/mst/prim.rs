use std::collections::HashSet;

use stepwise_ir::types::{GraphNode, WeightedEdge};
use stepwise_ir::validate::ValidationError;
use tracing::debug;

use super::{known_edges, MstBuilder, MstResult, MstStatus};

/// Prim's algorithm by repeated scans of the full edge list.
///
/// Starts at `start_node_id` when it names a node, else at the smallest
/// id. A disconnected graph stops growing once no edge leaves the tree.
pub fn prim(
    nodes: &[GraphNode],
    edges: &[WeightedEdge],
    start_node_id: Option<&str>,
) -> Result<MstResult, ValidationError> {
    let edges = known_edges(nodes, edges)?;
    let start = match start_node_id {
        Some(id) if nodes.iter().any(|n| n.id == id) => id.to_string(),
        _ => nodes
            .iter()
            .map(|n| n.id.as_str())
            .min()
            .unwrap_or_default()
            .to_string(),
    };

    let mut visited: HashSet<String> = HashSet::from([start]);
    let mut builder = MstBuilder::new();

    while visited.len() < nodes.len() {
        // First lightest edge with exactly one endpoint in the tree.
        let best = edges
            .iter()
            .filter(|e| visited.contains(&e.source) != visited.contains(&e.target))
            .fold(None::<&WeightedEdge>, |best, e| match best {
                Some(b) if b.weight <= e.weight => Some(b),
                _ => Some(e),
            });
        let Some(edge) = best else {
            break;
        };

        let label = edge.label();
        builder.record(
            edge,
            MstStatus::Checking,
            format!(
                "Checking minimal edge from frontier: {label} ({})",
                edge.weight
            ),
        );
        builder.record(edge, MstStatus::Accepted, format!("Accepted {label}"));

        let outside = if visited.contains(&edge.source) {
            &edge.target
        } else {
            &edge.source
        };
        visited.insert(outside.clone());
    }

    let result = builder.finish(nodes.len());
    debug!(steps = result.steps.len(), weight = result.total_weight, "prim generated");
    Ok(result)
}

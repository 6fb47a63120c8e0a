use stepwise_ir::types::{GraphNode, WeightedEdge};
use stepwise_ir::validate::ValidationError;
use tracing::debug;

use super::union_find::UnionFind;
use super::{known_edges, MstBuilder, MstResult, MstStatus};

/// Kruskal's algorithm. Edges of equal weight keep their input order.
pub fn kruskal(nodes: &[GraphNode], edges: &[WeightedEdge]) -> Result<MstResult, ValidationError> {
    let mut sorted = known_edges(nodes, edges)?;
    sorted.sort_by_key(|e| e.weight);

    let mut sets = UnionFind::new(nodes);
    let mut builder = MstBuilder::new();

    for edge in &sorted {
        let label = edge.label();
        builder.record(
            edge,
            MstStatus::Checking,
            format!("Checking edge {label} ({})", edge.weight),
        );
        if sets.union(&edge.source, &edge.target) {
            builder.record(
                edge,
                MstStatus::Accepted,
                format!("Accepted {label}: it joins two separate components"),
            );
        } else {
            builder.record(
                edge,
                MstStatus::Rejected,
                format!("Rejected {label}: it would form a cycle"),
            );
        }
    }

    let result = builder.finish(nodes.len());
    debug!(steps = result.steps.len(), weight = result.total_weight, "kruskal generated");
    Ok(result)
}

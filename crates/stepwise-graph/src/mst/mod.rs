//! Minimum spanning trees (Prim, Kruskal) with shared step and result types.

pub mod kruskal;
pub mod prim;
pub mod union_find;

pub use kruskal::kruskal;
pub use prim::prim;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use stepwise_ir::types::{GraphNode, WeightedEdge};
use stepwise_ir::validate::{validate_edge_weights, validate_graph_size, ValidationError};
use stepwise_ir::Trace;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MstStatus {
    Checking,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MstStep {
    pub edge: WeightedEdge,
    pub status: MstStatus,
    pub description: String,
    /// Tree edges accepted so far, including this step's edge when accepted.
    pub mst_edges: Vec<WeightedEdge>,
    pub total_weight: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MstResult {
    pub mst_edges: Vec<WeightedEdge>,
    pub total_weight: i64,
    pub steps: Vec<MstStep>,
    pub success: bool,
    pub message: String,
}

pub(crate) struct MstBuilder {
    trace: Trace<MstStep>,
    accepted: Vec<WeightedEdge>,
    total_weight: i64,
}

impl MstBuilder {
    pub fn new() -> Self {
        Self {
            trace: Trace::new(),
            accepted: Vec::new(),
            total_weight: 0,
        }
    }

    pub fn record(&mut self, edge: &WeightedEdge, status: MstStatus, description: String) {
        if status == MstStatus::Accepted {
            self.accepted.push(edge.clone());
            self.total_weight += edge.weight;
        }
        self.trace.record(MstStep {
            edge: edge.clone(),
            status,
            description,
            mst_edges: self.accepted.clone(),
            total_weight: self.total_weight,
        });
    }

    /// A spanning tree over `node_count` nodes has `node_count - 1` edges;
    /// fewer means the graph was disconnected.
    pub fn finish(self, node_count: usize) -> MstResult {
        let message = if self.accepted.len() + 1 >= node_count {
            format!(
                "Minimum spanning tree complete with total weight {}.",
                self.total_weight
            )
        } else {
            format!(
                "Graph is disconnected: the tree spans {} of {node_count} nodes.",
                self.accepted.len() + 1
            )
        };
        MstResult {
            mst_edges: self.accepted,
            total_weight: self.total_weight,
            steps: self.trace.into_steps(),
            success: true,
            message,
        }
    }
}

/// Validate sizes and drop edges that name unknown nodes.
pub(crate) fn known_edges(
    nodes: &[GraphNode],
    edges: &[WeightedEdge],
) -> Result<Vec<WeightedEdge>, ValidationError> {
    validate_graph_size(nodes.len(), edges.len())?;
    validate_edge_weights(edges)?;
    let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    Ok(edges
        .iter()
        .filter(|e| {
            let known = ids.contains(e.source.as_str()) && ids.contains(e.target.as_str());
            if !known {
                warn!(edge = %e.label(), "skipping edge with unknown endpoint");
            }
            known
        })
        .cloned()
        .collect())
}

//! Greedy graph coloring, a DSatur hint and conflict checking.
//!
//! Nodes carry integer ids; a node's color is `None` until assigned
//! (`-1` on the wire).

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use stepwise_ir::sentinel;
use stepwise_ir::types::ColorGraph;
use stepwise_ir::validate::{validate_graph_ceiling, validate_graph_size, ValidationError};
use stepwise_ir::Trace;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColoringStep {
    pub node_id: usize,
    pub color_index: usize,
    pub description: String,
    /// Color per node position after this assignment.
    #[serde(with = "sentinel::vec")]
    pub colors: Vec<Option<usize>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColoringResult {
    pub graph: ColorGraph,
    pub steps: Vec<ColoringStep>,
    pub colors_used: usize,
}

/// A suggested assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColoringMove {
    pub node_id: usize,
    pub color_index: usize,
}

/// Sequential greedy coloring in node order.
///
/// Any colors already on the input are ignored. The first node gets color
/// 0; each later node takes the smallest color none of its
/// already-colored neighbors use.
pub fn greedy_coloring(graph: &ColorGraph) -> Result<ColoringResult, ValidationError> {
    validate_graph_size(graph.nodes.len(), graph.edges.len())?;
    let n = graph.nodes.len();
    let position: HashMap<usize, usize> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(pos, node)| (node.id, pos))
        .collect();

    let mut adjacent = vec![Vec::new(); n];
    for edge in &graph.edges {
        if let (Some(&u), Some(&v)) = (position.get(&edge.source), position.get(&edge.target)) {
            adjacent[u].push(v);
            adjacent[v].push(u);
        }
    }

    let mut colors: Vec<Option<usize>> = vec![None; n];
    let mut trace = Trace::new();
    for u in 0..n {
        let taken: BTreeSet<usize> = adjacent[u].iter().filter_map(|&v| colors[v]).collect();
        let color = (0..n).find(|c| !taken.contains(c)).unwrap_or(n);
        colors[u] = Some(color);

        let node_id = graph.nodes[u].id;
        trace.record(ColoringStep {
            node_id,
            color_index: color,
            description: if taken.is_empty() {
                format!("Node {node_id} has no colored neighbors. Assign color {color}.")
            } else {
                format!("Neighbors of node {node_id} use colors {taken:?}. Assign color {color}.")
            },
            colors: colors.clone(),
        });
    }

    let mut colored = graph.clone();
    for (node, color) in colored.nodes.iter_mut().zip(&colors) {
        node.color_index = *color;
    }
    let colors_used = colors.iter().flatten().collect::<BTreeSet<_>>().len();
    debug!(nodes = n, colors_used, "greedy coloring generated");

    Ok(ColoringResult {
        graph: colored,
        steps: trace.into_steps(),
        colors_used,
    })
}

/// Distinct colors among `neighbors`.
fn neighbor_colors(graph: &ColorGraph, neighbors: &[usize]) -> BTreeSet<usize> {
    neighbors
        .iter()
        .filter_map(|&nid| graph.node(nid).and_then(|n| n.color_index))
        .collect()
}

/// DSatur suggestion: the uncolored node with the most distinct neighbor
/// colors (ties to the higher degree, then the earlier node) and its
/// smallest free color. `None` once every node is colored.
pub fn next_best_move(graph: &ColorGraph) -> Result<Option<ColoringMove>, ValidationError> {
    validate_graph_ceiling(graph.nodes.len(), graph.edges.len())?;
    let mut best: Option<(usize, usize, usize, BTreeSet<usize>)> = None;

    for node in graph.nodes.iter().filter(|n| n.color_index.is_none()) {
        let neighbors = graph.neighbors(node.id);
        let used = neighbor_colors(graph, &neighbors);
        let (saturation, degree) = (used.len(), neighbors.len());

        let better = match &best {
            None => true,
            Some((_, best_sat, best_deg, _)) => {
                saturation > *best_sat || (saturation == *best_sat && degree > *best_deg)
            }
        };
        if better {
            best = Some((node.id, saturation, degree, used));
        }
    }

    let Some((node_id, _, _, used)) = best else {
        return Ok(None);
    };
    let color_index = (0..).find(|c| !used.contains(c)).unwrap_or(0);
    Ok(Some(ColoringMove {
        node_id,
        color_index,
    }))
}

/// One message per edge whose endpoints share a color.
pub fn check_conflicts(graph: &ColorGraph) -> Result<Vec<String>, ValidationError> {
    validate_graph_ceiling(graph.nodes.len(), graph.edges.len())?;
    Ok(graph
        .edges
        .iter()
        .filter_map(|edge| {
            let u = graph.node(edge.source)?;
            let v = graph.node(edge.target)?;
            match (u.color_index, v.color_index) {
                (Some(a), Some(b)) if a == b => Some(format!(
                    "Conflict between Node {} and Node {} (Color {a})",
                    u.id, v.id
                )),
                _ => None,
            }
        })
        .collect())
}

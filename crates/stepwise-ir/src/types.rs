use serde::{Deserialize, Serialize};

use crate::sentinel;

/// Identifier of a node in tree and graph inputs.
pub type NodeId = String;

// ── Trees ────────────────────────────────────────────────────────────

/// A valued node of a BST-shaped tree. Coordinates are layout only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: NodeId,
    pub value: i64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Depth-first visiting order for tree traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TraversalType {
    #[default]
    PreOrder,
    InOrder,
    PostOrder,
}

impl TraversalType {
    pub fn label(self) -> &'static str {
        match self {
            TraversalType::PreOrder => "Pre-order",
            TraversalType::InOrder => "In-order",
            TraversalType::PostOrder => "Post-order",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
    pub edges: Vec<Edge>,
}

// ── Graphs ───────────────────────────────────────────────────────────

/// An unvalued graph node. Coordinates are layout only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: NodeId,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl GraphNode {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
        }
    }
}

/// Parent -> child in trees, undirected in graphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Undirected edge with an integer weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: i64,
}

impl WeightedEdge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: i64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// The endpoint opposite `id`, if the edge touches `id` at all.
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(&self.target)
        } else if self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.source, self.target)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<WeightedEdge>,
}

// ── Coloring ─────────────────────────────────────────────────────────

/// Coloring node. `colorIndex` is `-1` on the wire while uncolored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorNode {
    pub id: usize,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, with = "sentinel::option")]
    pub color_index: Option<usize>,
}

impl ColorNode {
    pub fn uncolored(id: usize) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            color_index: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorEdge {
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorGraph {
    pub nodes: Vec<ColorNode>,
    pub edges: Vec<ColorEdge>,
}

impl ColorGraph {
    pub fn node(&self, id: usize) -> Option<&ColorNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Neighbor ids of `id`, one entry per incident edge.
    pub fn neighbors(&self, id: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter_map(|e| {
                if e.source == id {
                    Some(e.target)
                } else if e.target == id {
                    Some(e.source)
                } else {
                    None
                }
            })
            .collect()
    }
}

// ── Cities and boards ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(default)]
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A square on a chess board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

//! Request payloads, one per generator family.
//!
//! Field names are camelCase on the wire. Optional fields default the way
//! clients expect (ascending sorts, pre-order traversal, min-heap).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sentinel;
use crate::types::{City, ColorGraph, Edge, GraphNode, NodeId, TraversalType, TreeNode, WeightedEdge};

fn default_true() -> bool {
    true
}

fn default_queens() -> i64 {
    8
}

// ── Arrays ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub array: Vec<i64>,
    pub target: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortRequest {
    pub array: Vec<i64>,
    #[serde(default = "default_true")]
    pub ascending: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeapRequest {
    pub array: Vec<i64>,
    /// Build a max-heap instead of the default min-heap.
    #[serde(default)]
    pub max_heap: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BstRequest {
    pub array: Vec<i64>,
}

// ── Trees and graphs ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeTraversalRequest {
    pub nodes: Vec<TreeNode>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub start_node_id: NodeId,
    #[serde(default)]
    pub traversal_type: TraversalType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphTraversalRequest {
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub start_node_id: NodeId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MstRequest {
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<WeightedEdge>,
    #[serde(default)]
    pub start_node_id: Option<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathRequest {
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<WeightedEdge>,
    pub start_node_id: NodeId,
    pub target_node_id: NodeId,
}

// ── Puzzles ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueensSolveRequest {
    #[serde(default = "default_queens")]
    pub n: i64,
}

/// Queen column per row, `-1` for an empty row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueensHintRequest {
    #[serde(with = "sentinel::vec", alias = "board")]
    pub current_board: Vec<Option<usize>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnightSolveRequest {
    pub start_row: i64,
    pub start_col: i64,
}

/// Flattened 8x8 board, row-major, `-1` marks an unvisited square.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnightHintRequest {
    pub board: Vec<i64>,
    pub current_row: i64,
    pub current_col: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColoringRequest {
    pub graph: ColorGraph,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TspSolveRequest {
    pub cities: Vec<City>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TspHintRequest {
    pub cities: Vec<City>,
    #[serde(default)]
    pub current_path: Vec<usize>,
}

// ── Compression ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuffmanBuildRequest {
    pub text: String,
}

/// Live node labels and their frequencies during manual tree building.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeHintRequest {
    #[serde(default)]
    pub frequencies: BTreeMap<String, u64>,
}

// ── Fixtures ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRequest {
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub count: Option<usize>,
}

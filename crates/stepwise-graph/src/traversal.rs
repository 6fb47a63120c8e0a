//! Queue-based BFS and stack-based DFS over undirected graphs.
//!
//! DFS pushes every unvisited neighbor, so a node can sit on the stack
//! more than once; popping an already-visited node yields a `Discard`
//! step.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use stepwise_ir::types::{Edge, GraphNode, NodeId};
use stepwise_ir::validate::{validate_graph_size, ValidationError};
use stepwise_ir::Trace;
use tracing::debug;

use crate::adjacency::Adjacency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphStepKind {
    Enqueue,
    Visit,
    Push,
    Discard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStep {
    pub kind: GraphStepKind,
    pub description: String,
    pub current_node_id: NodeId,
    pub parent_node_id: Option<NodeId>,
    /// Discovered (BFS) or visited (DFS) ids so far.
    pub visited: Vec<NodeId>,
    /// Queue front first (BFS), or stack bottom to top (DFS).
    pub frontier: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphTraversalResult {
    pub steps: Vec<GraphStep>,
    pub traversal_order: Vec<NodeId>,
}

struct Walk {
    trace: Trace<GraphStep>,
    seen: HashSet<NodeId>,
    seen_order: Vec<NodeId>,
}

impl Walk {
    fn new() -> Self {
        Self {
            trace: Trace::new(),
            seen: HashSet::new(),
            seen_order: Vec::new(),
        }
    }

    fn mark(&mut self, id: &str) {
        if self.seen.insert(id.to_string()) {
            self.seen_order.push(id.to_string());
        }
    }

    fn record<'f>(
        &mut self,
        kind: GraphStepKind,
        description: String,
        current: &str,
        parent: Option<&str>,
        frontier: impl IntoIterator<Item = &'f NodeId>,
    ) {
        self.trace.record(GraphStep {
            kind,
            description,
            current_node_id: current.to_string(),
            parent_node_id: parent.map(str::to_string),
            visited: self.seen_order.clone(),
            frontier: frontier.into_iter().cloned().collect(),
        });
    }
}

/// Resolve the start id, falling back to the first node.
fn start_id<'a>(nodes: &'a [GraphNode], start_node_id: &'a str) -> &'a str {
    if nodes.iter().any(|n| n.id == start_node_id) {
        start_node_id
    } else {
        &nodes[0].id
    }
}

pub fn graph_bfs(
    nodes: &[GraphNode],
    edges: &[Edge],
    start_node_id: &str,
) -> Result<GraphTraversalResult, ValidationError> {
    validate_graph_size(nodes.len(), edges.len())?;
    let adjacency = Adjacency::undirected(nodes, edges, false);
    let start = start_id(nodes, start_node_id).to_string();
    let mut walk = Walk::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut order = Vec::new();

    queue.push_back(start.clone());
    walk.mark(&start);
    walk.record(
        GraphStepKind::Enqueue,
        format!("Start BFS at node {start}. Add to queue."),
        &start,
        None,
        &queue,
    );

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());
        walk.record(
            GraphStepKind::Visit,
            format!("Dequeue {current} and visit."),
            &current,
            None,
            &queue,
        );

        for neighbor in adjacency.neighbors(&current) {
            if walk.seen.contains(neighbor) {
                continue;
            }
            walk.mark(neighbor);
            queue.push_back(neighbor.clone());
            walk.record(
                GraphStepKind::Enqueue,
                format!("Found unvisited neighbor {neighbor} of {current}. Add to queue."),
                neighbor,
                Some(current.as_str()),
                &queue,
            );
        }
    }

    debug!(steps = walk.trace.len(), "graph bfs generated");
    Ok(GraphTraversalResult {
        steps: walk.trace.into_steps(),
        traversal_order: order,
    })
}

pub fn graph_dfs(
    nodes: &[GraphNode],
    edges: &[Edge],
    start_node_id: &str,
) -> Result<GraphTraversalResult, ValidationError> {
    validate_graph_size(nodes.len(), edges.len())?;
    // Descending lists pop back off the stack in ascending order.
    let adjacency = Adjacency::undirected(nodes, edges, true);
    let start = start_id(nodes, start_node_id).to_string();
    let mut walk = Walk::new();
    let mut stack: Vec<NodeId> = vec![start.clone()];
    let mut order = Vec::new();

    walk.record(
        GraphStepKind::Push,
        format!("Push start node {start} to stack."),
        &start,
        None,
        &stack,
    );

    while let Some(current) = stack.pop() {
        if walk.seen.contains(&current) {
            walk.record(
                GraphStepKind::Discard,
                format!("{current} already visited. Discarding."),
                &current,
                None,
                &stack,
            );
            continue;
        }

        walk.mark(&current);
        order.push(current.clone());
        walk.record(
            GraphStepKind::Visit,
            format!("Pop {current} from stack and visit it."),
            &current,
            None,
            &stack,
        );

        for neighbor in adjacency.neighbors(&current) {
            if walk.seen.contains(neighbor) {
                continue;
            }
            stack.push(neighbor.clone());
            walk.record(
                GraphStepKind::Push,
                format!("Found unvisited neighbor {neighbor} of {current}. Push to stack."),
                neighbor,
                Some(current.as_str()),
                &stack,
            );
        }
    }

    debug!(steps = walk.trace.len(), "graph dfs generated");
    Ok(GraphTraversalResult {
        steps: walk.trace.into_steps(),
        traversal_order: order,
    })
}

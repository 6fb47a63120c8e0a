//! Level-order and depth-first traversals of an explicit binary tree.
//!
//! The input is a flat node/edge list. Left and right children are
//! recovered from values: a child smaller than its parent is the left
//! child, anything else the right one.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use stepwise_ir::types::{Edge, NodeId, TraversalType, TreeNode};
use stepwise_ir::validate::{validate_graph_size, ValidationError};
use stepwise_ir::Trace;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeStepKind {
    Visit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeStep {
    pub kind: TreeStepKind,
    pub description: String,
    pub current_node_id: NodeId,
    /// Ids visited so far, in visiting order.
    pub visited: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeTraversalResult {
    pub steps: Vec<TreeStep>,
    pub traversal_order: Vec<NodeId>,
}

struct BinaryTree<'a> {
    nodes: &'a [TreeNode],
    index: HashMap<&'a str, usize>,
    children: Vec<(Option<usize>, Option<usize>)>,
    root: usize,
}

impl<'a> BinaryTree<'a> {
    fn new(nodes: &'a [TreeNode], edges: &[Edge]) -> Self {
        let index: HashMap<&str, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.as_str(), i))
            .collect();
        let mut children = vec![(None, None); nodes.len()];
        let mut has_parent = vec![false; nodes.len()];

        for edge in edges {
            let (Some(&parent), Some(&child)) = (
                index.get(edge.source.as_str()),
                index.get(edge.target.as_str()),
            ) else {
                warn!(source = %edge.source, target = %edge.target, "skipping tree edge with unknown endpoint");
                continue;
            };
            has_parent[child] = true;
            if nodes[child].value < nodes[parent].value {
                children[parent].0 = Some(child);
            } else {
                children[parent].1 = Some(child);
            }
        }

        let root = has_parent.iter().position(|p| !p).unwrap_or(0);
        Self {
            nodes,
            index,
            children,
            root,
        }
    }

    /// The requested start node, or the root when it is empty or unknown.
    fn start(&self, start_node_id: &str) -> usize {
        self.index.get(start_node_id).copied().unwrap_or(self.root)
    }

    fn id(&self, i: usize) -> &NodeId {
        &self.nodes[i].id
    }
}

struct Visitor<'t, 'a> {
    tree: &'t BinaryTree<'a>,
    trace: Trace<TreeStep>,
    order: Vec<NodeId>,
    seen: HashSet<usize>,
}

impl<'t, 'a> Visitor<'t, 'a> {
    fn new(tree: &'t BinaryTree<'a>) -> Self {
        Self {
            tree,
            trace: Trace::new(),
            order: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn visit(&mut self, i: usize, description: String) {
        let id = self.tree.id(i).clone();
        self.order.push(id.clone());
        self.trace.record(TreeStep {
            kind: TreeStepKind::Visit,
            description,
            current_node_id: id,
            visited: self.order.clone(),
        });
    }

    fn depth_first(&mut self, i: usize, traversal: TraversalType) {
        if !self.seen.insert(i) {
            return;
        }
        let (left, right) = self.tree.children[i];
        let description = format!(
            "Visit {} ({})",
            self.tree.nodes[i].value,
            traversal.label()
        );

        if traversal == TraversalType::PreOrder {
            self.visit(i, description.clone());
        }
        if let Some(l) = left {
            self.depth_first(l, traversal);
        }
        if traversal == TraversalType::InOrder {
            self.visit(i, description.clone());
        }
        if let Some(r) = right {
            self.depth_first(r, traversal);
        }
        if traversal == TraversalType::PostOrder {
            self.visit(i, description);
        }
    }

    fn finish(self) -> TreeTraversalResult {
        TreeTraversalResult {
            steps: self.trace.into_steps(),
            traversal_order: self.order,
        }
    }
}

/// Level-order traversal, left child before right.
pub fn tree_bfs(
    nodes: &[TreeNode],
    edges: &[Edge],
    start_node_id: &str,
) -> Result<TreeTraversalResult, ValidationError> {
    validate_graph_size(nodes.len(), edges.len())?;
    let tree = BinaryTree::new(nodes, edges);
    let start = tree.start(start_node_id);
    let mut visitor = Visitor::new(&tree);

    let mut queue = VecDeque::from([start]);
    visitor.seen.insert(start);
    while let Some(i) = queue.pop_front() {
        let description = if i == start {
            format!("Start BFS at node {}", tree.id(i))
        } else {
            format!("Visit node {} (value {})", tree.id(i), nodes[i].value)
        };
        visitor.visit(i, description);

        let (left, right) = tree.children[i];
        for child in [left, right].into_iter().flatten() {
            if visitor.seen.insert(child) {
                queue.push_back(child);
            }
        }
    }

    let result = visitor.finish();
    debug!(steps = result.steps.len(), "tree bfs generated");
    Ok(result)
}

/// Recursive pre-, in- or post-order traversal.
pub fn tree_dfs(
    nodes: &[TreeNode],
    edges: &[Edge],
    start_node_id: &str,
    traversal: TraversalType,
) -> Result<TreeTraversalResult, ValidationError> {
    validate_graph_size(nodes.len(), edges.len())?;
    let tree = BinaryTree::new(nodes, edges);
    let start = tree.start(start_node_id);
    let mut visitor = Visitor::new(&tree);
    visitor.depth_first(start, traversal);

    let result = visitor.finish();
    debug!(steps = result.steps.len(), traversal = traversal.label(), "tree dfs generated");
    Ok(result)
}

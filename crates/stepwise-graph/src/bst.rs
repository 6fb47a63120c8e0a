//! Binary search tree construction with a full layout snapshot per step.
//!
//! Equal values are skipped, never reinserted. Node ids are `n0`, `n1`, ...
//! in insertion order so identical inputs give identical traces.

use serde::{Deserialize, Serialize};
use stepwise_ir::types::{Edge, NodeId, TreeNode};
use stepwise_ir::validate::{validate_search_array, ValidationError};
use stepwise_ir::Trace;

const CANVAS_WIDTH: f64 = 800.0;
const TOP_Y: f64 = 50.0;
const LEVEL_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BstStepKind {
    InsertRoot,
    Compare,
    InsertLeft,
    InsertRight,
    Skip,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BstStep {
    pub kind: BstStepKind,
    pub description: String,
    pub nodes: Vec<TreeNode>,
    pub edges: Vec<Edge>,
    /// Value being inserted.
    pub highlight_value: Option<i64>,
    /// Value of the node it is compared against.
    pub compare_value: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BstResult {
    pub steps: Vec<BstStep>,
}

#[derive(Debug, Clone)]
struct Slot {
    value: i64,
    left: Option<usize>,
    right: Option<usize>,
}

/// Arena-backed BST; index 0 is the root once anything is inserted.
#[derive(Debug, Clone, Default)]
struct Arena {
    slots: Vec<Slot>,
}

impl Arena {
    fn push(&mut self, value: i64) -> usize {
        self.slots.push(Slot {
            value,
            left: None,
            right: None,
        });
        self.slots.len() - 1
    }

    fn id(index: usize) -> NodeId {
        format!("n{index}")
    }

    /// Pre-order node and edge lists, each node centered in its span.
    fn layout(&self) -> (Vec<TreeNode>, Vec<Edge>) {
        let mut nodes = Vec::with_capacity(self.slots.len());
        let mut edges = Vec::with_capacity(self.slots.len().saturating_sub(1));
        if !self.slots.is_empty() {
            self.place(0, 0.0, CANVAS_WIDTH, TOP_Y, &mut nodes, &mut edges);
        }
        (nodes, edges)
    }

    fn place(
        &self,
        index: usize,
        left: f64,
        right: f64,
        y: f64,
        nodes: &mut Vec<TreeNode>,
        edges: &mut Vec<Edge>,
    ) {
        let slot = &self.slots[index];
        let x = (left + right) / 2.0;
        nodes.push(TreeNode {
            id: Self::id(index),
            value: slot.value,
            x,
            y,
        });
        if let Some(child) = slot.left {
            edges.push(Edge::new(Self::id(index), Self::id(child)));
            self.place(child, left, x, y + LEVEL_HEIGHT, nodes, edges);
        }
        if let Some(child) = slot.right {
            edges.push(Edge::new(Self::id(index), Self::id(child)));
            self.place(child, x, right, y + LEVEL_HEIGHT, nodes, edges);
        }
    }
}

fn snapshot(
    arena: &Arena,
    kind: BstStepKind,
    description: String,
    highlight_value: Option<i64>,
    compare_value: Option<i64>,
) -> BstStep {
    let (nodes, edges) = arena.layout();
    BstStep {
        kind,
        description,
        nodes,
        edges,
        highlight_value,
        compare_value,
    }
}

pub fn bst_build(values: &[i64]) -> Result<BstResult, ValidationError> {
    validate_search_array(values)?;
    let mut arena = Arena::default();
    let mut trace = Trace::new();

    for &value in values {
        insert(&mut arena, value, &mut trace);
    }

    trace.record(snapshot(
        &arena,
        BstStepKind::Complete,
        "BST Construction Complete!".to_string(),
        None,
        None,
    ));
    Ok(BstResult {
        steps: trace.into_steps(),
    })
}

fn insert(arena: &mut Arena, value: i64, trace: &mut Trace<BstStep>) {
    if arena.slots.is_empty() {
        arena.push(value);
        trace.record(snapshot(
            arena,
            BstStepKind::InsertRoot,
            format!("Tree is empty. Inserting {value} as root."),
            Some(value),
            None,
        ));
        return;
    }

    let mut current = 0;
    loop {
        let here = arena.slots[current].value;
        trace.record(snapshot(
            arena,
            BstStepKind::Compare,
            format!("Comparing {value} with {here}."),
            Some(value),
            Some(here),
        ));

        if value == here {
            trace.record(snapshot(
                arena,
                BstStepKind::Skip,
                format!("{value} is already in the tree. Skipping duplicate."),
                Some(value),
                Some(here),
            ));
            return;
        }

        let goes_left = value < here;
        let next = if goes_left {
            arena.slots[current].left
        } else {
            arena.slots[current].right
        };
        match next {
            Some(child) => current = child,
            None => {
                let child = arena.push(value);
                let (kind, description) = if goes_left {
                    arena.slots[current].left = Some(child);
                    (
                        BstStepKind::InsertLeft,
                        format!("{value} < {here}. Inserting as left child."),
                    )
                } else {
                    arena.slots[current].right = Some(child);
                    (
                        BstStepKind::InsertRight,
                        format!("{value} > {here}. Inserting as right child."),
                    )
                };
                trace.record(snapshot(arena, kind, description, Some(value), Some(here)));
                return;
            }
        }
    }
}

//! Standalone binary-heap construction (bottom-up heapify).

use serde::{Deserialize, Serialize};
use stepwise_ir::validate::{validate_search_array, ValidationError};
use stepwise_ir::Trace;
use tracing::debug;

use crate::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeapKind {
    Min,
    Max,
}

impl HeapKind {
    pub fn from_max(max_heap: bool) -> Self {
        if max_heap {
            HeapKind::Max
        } else {
            HeapKind::Min
        }
    }

    /// Heap sort extracts from a max-heap to sort ascending.
    pub fn for_order(order: Order) -> Self {
        match order {
            Order::Ascending => HeapKind::Max,
            Order::Descending => HeapKind::Min,
        }
    }

    /// `a` must sit strictly above `b`.
    pub fn dominates(self, a: i64, b: i64) -> bool {
        match self {
            HeapKind::Max => a > b,
            HeapKind::Min => a < b,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeapKind::Min => "min",
            HeapKind::Max => "max",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeapStepKind {
    Info,
    Compare,
    Swap,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeapStep {
    pub kind: HeapStepKind,
    pub description: String,
    pub array: Vec<i64>,
    pub highlight: Vec<usize>,
    /// Set on `Swap` steps; `array` is the state before the swap.
    pub swap: Option<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeapResult {
    pub steps: Vec<HeapStep>,
    pub final_heap: Vec<i64>,
}

fn step(
    kind: HeapStepKind,
    description: String,
    array: &[i64],
    highlight: Vec<usize>,
    swap: Option<(usize, usize)>,
) -> HeapStep {
    HeapStep {
        kind,
        description,
        array: array.to_vec(),
        highlight,
        swap,
    }
}

pub fn build_heap(input: &[i64], kind: HeapKind) -> Result<HeapResult, ValidationError> {
    validate_search_array(input)?;
    let mut array = input.to_vec();
    let mut trace = Trace::new();

    trace.record(step(
        HeapStepKind::Info,
        format!("Starting to build a {} heap from {array:?}", kind.label()),
        &array,
        Vec::new(),
        None,
    ));

    for i in (0..array.len() / 2).rev() {
        sift_down(&mut array, i, kind, &mut trace);
    }

    trace.record(step(
        HeapStepKind::Complete,
        format!("{} heap built!", capitalized(kind.label())),
        &array,
        Vec::new(),
        None,
    ));

    debug!(steps = trace.len(), kind = kind.label(), "heap built");
    Ok(HeapResult {
        steps: trace.into_steps(),
        final_heap: array,
    })
}

fn sift_down(array: &mut [i64], start: usize, kind: HeapKind, trace: &mut Trace<HeapStep>) {
    let n = array.len();
    let mut i = start;
    loop {
        trace.record(step(
            HeapStepKind::Compare,
            format!("Heapifying at index {i} (value {})", array[i]),
            array,
            vec![i],
            None,
        ));

        let mut target = i;
        for child in [2 * i + 1, 2 * i + 2] {
            if child < n && kind.dominates(array[child], array[target]) {
                target = child;
            }
        }
        if target == i {
            return;
        }

        trace.record(step(
            HeapStepKind::Swap,
            format!("Swapping {} and {}", array[i], array[target]),
            array,
            vec![i, target],
            Some((i, target)),
        ));
        array.swap(i, target);
        trace.record(step(
            HeapStepKind::Compare,
            format!("Moved {} down to index {target}", array[target]),
            array,
            vec![target],
            None,
        ));
        i = target;
    }
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Heap property holds for every parent/child pair.
pub fn is_heap(array: &[i64], kind: HeapKind) -> bool {
    (1..array.len()).all(|child| !kind.dominates(array[child], array[(child - 1) / 2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_heap() {
        assert!(is_heap(&[1, 3, 2, 7], HeapKind::Min));
        assert!(!is_heap(&[1, 3, 2, 7], HeapKind::Max));
        assert!(is_heap(&[9, 9, 1], HeapKind::Max));
    }

    #[test]
    fn test_capitalized() {
        assert_eq!(capitalized("max"), "Max");
    }
}

use serde::{Deserialize, Serialize};
use stepwise_ir::validate::{validate_sort_array, ValidationError};
use stepwise_ir::Trace;
use tracing::debug;

use super::{mark_sorted, order_word};
use crate::heap::HeapKind;
use crate::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeapSortStepKind {
    Initial,
    BuildHeap,
    Compare,
    SwapPending,
    Swap,
    HeapBuilt,
    Extract,
    ExtractSwap,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeapSortStep {
    pub kind: HeapSortStepKind,
    pub description: String,
    pub array: Vec<i64>,
    pub compared: Option<(usize, usize)>,
    /// Number of leading elements still inside the heap.
    pub heap_size: usize,
    pub sorted_indices: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeapSortResult {
    pub steps: Vec<HeapSortStep>,
    pub total_comparisons: usize,
    pub total_swaps: usize,
}

struct HeapSort {
    trace: Trace<HeapSortStep>,
    kind: HeapKind,
    sorted: Vec<usize>,
    comparisons: usize,
    swaps: usize,
}

impl HeapSort {
    fn record(
        &mut self,
        kind: HeapSortStepKind,
        description: String,
        array: &[i64],
        compared: Option<(usize, usize)>,
        heap_size: usize,
    ) {
        self.trace.record(HeapSortStep {
            kind,
            description,
            array: array.to_vec(),
            compared,
            heap_size,
            sorted_indices: self.sorted.clone(),
        });
    }

    fn sift_down(&mut self, array: &mut [i64], size: usize, start: usize) {
        let mut i = start;
        loop {
            let mut extreme = i;
            for (side, child) in [("left", 2 * i + 1), ("right", 2 * i + 2)] {
                if child >= size {
                    continue;
                }
                self.comparisons += 1;
                self.record(
                    HeapSortStepKind::Compare,
                    format!(
                        "Comparing {} with {side} child {}",
                        array[extreme], array[child]
                    ),
                    array,
                    Some((extreme, child)),
                    size,
                );
                if self.kind.dominates(array[child], array[extreme]) {
                    extreme = child;
                }
            }
            if extreme == i {
                return;
            }

            self.record(
                HeapSortStepKind::SwapPending,
                format!(
                    "Swapping {} and {} to restore the heap",
                    array[i], array[extreme]
                ),
                array,
                Some((i, extreme)),
                size,
            );
            array.swap(i, extreme);
            self.swaps += 1;
            self.record(
                HeapSortStepKind::Swap,
                format!("Swapped {} and {}", array[extreme], array[i]),
                array,
                Some((i, extreme)),
                size,
            );
            i = extreme;
        }
    }
}

/// In-place heap sort: build, then repeatedly move the root to the end.
pub fn heap_sort(input: &[i64], order: Order) -> Result<HeapSortResult, ValidationError> {
    validate_sort_array(input)?;
    let mut array = input.to_vec();
    let n = array.len();
    let mut heap = HeapSort {
        trace: Trace::new(),
        kind: HeapKind::for_order(order),
        sorted: Vec::new(),
        comparisons: 0,
        swaps: 0,
    };
    let label = heap.kind.label();

    heap.record(
        HeapSortStepKind::Initial,
        format!("Initial array. Sorting in {} order.", order_word(order)),
        &array,
        None,
        n,
    );
    heap.record(
        HeapSortStepKind::BuildHeap,
        format!("Building {label} heap"),
        &array,
        None,
        n,
    );
    for i in (0..n / 2).rev() {
        heap.sift_down(&mut array, n, i);
    }
    heap.record(
        HeapSortStepKind::HeapBuilt,
        format!("Built the {label} heap. The root holds the next element to extract."),
        &array,
        None,
        n,
    );

    for end in (1..n).rev() {
        heap.comparisons += 1;
        heap.record(
            HeapSortStepKind::Extract,
            format!("Extracting root {} and swapping it with index {end}", array[0]),
            &array,
            Some((0, end)),
            end + 1,
        );
        array.swap(0, end);
        heap.swaps += 1;
        mark_sorted(&mut heap.sorted, end);
        heap.record(
            HeapSortStepKind::ExtractSwap,
            format!("Moved {} to its final position at index {end}", array[end]),
            &array,
            Some((0, end)),
            end,
        );
        heap.sift_down(&mut array, end, 0);
    }

    mark_sorted(&mut heap.sorted, 0);
    heap.record(
        HeapSortStepKind::Complete,
        "Sorting complete!".to_string(),
        &array,
        None,
        0,
    );

    debug!(steps = heap.trace.len(), comparisons = heap.comparisons, swaps = heap.swaps, "heap sort generated");
    Ok(HeapSortResult {
        steps: heap.trace.into_steps(),
        total_comparisons: heap.comparisons,
        total_swaps: heap.swaps,
    })
}

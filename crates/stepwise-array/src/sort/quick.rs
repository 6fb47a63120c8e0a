use serde::{Deserialize, Serialize};
use stepwise_ir::validate::{validate_sort_array, ValidationError};
use stepwise_ir::Trace;
use tracing::debug;

use super::{all_indices, mark_sorted, order_word};
use crate::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickStepKind {
    Initial,
    Partition,
    PivotSelected,
    Compare,
    Swap,
    PivotPlaced,
    SingleSorted,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStep {
    pub kind: QuickStepKind,
    pub description: String,
    pub array: Vec<i64>,
    pub compared: Option<(usize, usize)>,
    pub pivot_index: Option<usize>,
    /// Inclusive index range being worked on.
    pub range: Option<(usize, usize)>,
    pub sorted_indices: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickSortResult {
    pub steps: Vec<QuickStep>,
    pub total_comparisons: usize,
    pub total_swaps: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct Marks {
    compared: Option<(usize, usize)>,
    pivot_index: Option<usize>,
    range: Option<(usize, usize)>,
}

struct QuickSort {
    trace: Trace<QuickStep>,
    order: Order,
    sorted: Vec<usize>,
    comparisons: usize,
    swaps: usize,
}

impl QuickSort {
    fn record(&mut self, kind: QuickStepKind, description: String, array: &[i64], marks: Marks) {
        self.trace.record(QuickStep {
            kind,
            description,
            array: array.to_vec(),
            compared: marks.compared,
            pivot_index: marks.pivot_index,
            range: marks.range,
            sorted_indices: self.sorted.clone(),
        });
    }

    /// Sort the non-empty inclusive range `low..=high`.
    fn sort_range(&mut self, array: &mut [i64], low: usize, high: usize) {
        if low == high {
            mark_sorted(&mut self.sorted, low);
            self.record(
                QuickStepKind::SingleSorted,
                format!("Single element {} at index {low} is sorted.", array[low]),
                array,
                Marks::default(),
            );
            return;
        }

        self.record(
            QuickStepKind::Partition,
            format!("Partitioning range [{low}..{high}]"),
            array,
            Marks {
                range: Some((low, high)),
                ..Marks::default()
            },
        );

        let pivot = self.partition(array, low, high);
        mark_sorted(&mut self.sorted, pivot);
        self.record(
            QuickStepKind::PivotPlaced,
            format!(
                "Pivot {} placed at its final position (index {pivot}).",
                array[pivot]
            ),
            array,
            Marks {
                pivot_index: Some(pivot),
                ..Marks::default()
            },
        );

        if pivot > low {
            self.sort_range(array, low, pivot - 1);
        }
        if pivot < high {
            self.sort_range(array, pivot + 1, high);
        }
    }

    /// Lomuto partition with the last element as pivot.
    fn partition(&mut self, array: &mut [i64], low: usize, high: usize) -> usize {
        let pivot = array[high];
        self.record(
            QuickStepKind::PivotSelected,
            format!("Selected pivot: {pivot} (at index {high})"),
            array,
            Marks {
                pivot_index: Some(high),
                range: Some((low, high - 1)),
                ..Marks::default()
            },
        );

        // Next slot for an element that belongs before the pivot.
        let mut boundary = low;
        for j in low..high {
            self.comparisons += 1;
            let value = array[j];
            self.record(
                QuickStepKind::Compare,
                format!("Comparing {value} with pivot {pivot}"),
                array,
                Marks {
                    compared: Some((j, high)),
                    pivot_index: Some(high),
                    range: Some((low, high)),
                },
            );
            if self.order.precedes(value, pivot) {
                self.swap(array, boundary, j, Some(high));
                boundary += 1;
            }
        }

        self.swap(array, boundary, high, None);
        boundary
    }

    /// Only exchanges that change the array are counted or recorded, so
    /// `total_swaps` undercounts a plain Lomuto tally on inputs with
    /// duplicates or elements already in place.
    fn swap(&mut self, array: &mut [i64], a: usize, b: usize, pivot_index: Option<usize>) {
        if a == b || array[a] == array[b] {
            return;
        }
        let (x, y) = (array[a], array[b]);
        array.swap(a, b);
        self.swaps += 1;
        self.record(
            QuickStepKind::Swap,
            format!("Swapped {x} and {y}"),
            array,
            Marks {
                compared: Some((a, b)),
                pivot_index,
                ..Marks::default()
            },
        );
    }
}

/// Recursive quick sort over the Lomuto scheme.
pub fn quick_sort(input: &[i64], order: Order) -> Result<QuickSortResult, ValidationError> {
    validate_sort_array(input)?;
    let mut array = input.to_vec();
    let mut quick = QuickSort {
        trace: Trace::new(),
        order,
        sorted: Vec::new(),
        comparisons: 0,
        swaps: 0,
    };

    quick.record(
        QuickStepKind::Initial,
        format!("Initial array. Sorting in {} order.", order_word(order)),
        &array,
        Marks::default(),
    );

    let high = array.len() - 1;
    quick.sort_range(&mut array, 0, high);

    quick.sorted = all_indices(array.len());
    quick.record(
        QuickStepKind::Complete,
        "Sorting complete!".to_string(),
        &array,
        Marks::default(),
    );

    debug!(steps = quick.trace.len(), comparisons = quick.comparisons, swaps = quick.swaps, "quick sort generated");
    Ok(QuickSortResult {
        steps: quick.trace.into_steps(),
        total_comparisons: quick.comparisons,
        total_swaps: quick.swaps,
    })
}

use serde::{Deserialize, Serialize};
use stepwise_ir::validate::{validate_sort_array, ValidationError};
use stepwise_ir::Trace;
use tracing::debug;

use super::{all_indices, mark_sorted, order_word};
use crate::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeStepKind {
    Initial,
    Start,
    Divide,
    MergeStart,
    Compare,
    Place,
    CopyRemaining,
    Merged,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStep {
    pub kind: MergeStepKind,
    pub description: String,
    pub array: Vec<i64>,
    /// Left-run and right-run indices being compared.
    pub compared: Option<(usize, usize)>,
    /// Index just written during a merge.
    pub placed: Option<usize>,
    /// Inclusive range being divided.
    pub range: Option<(usize, usize)>,
    pub merging_range: Vec<usize>,
    pub sorted_indices: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSortResult {
    pub steps: Vec<MergeStep>,
    pub total_comparisons: usize,
    pub total_merges: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct Marks {
    compared: Option<(usize, usize)>,
    placed: Option<usize>,
    range: Option<(usize, usize)>,
    merging: Option<(usize, usize)>,
}

struct MergeSort {
    trace: Trace<MergeStep>,
    order: Order,
    sorted: Vec<usize>,
    comparisons: usize,
    merges: usize,
}

impl MergeSort {
    fn record(&mut self, kind: MergeStepKind, description: String, array: &[i64], marks: Marks) {
        let merging_range = marks
            .merging
            .map(|(left, right)| (left..=right).collect())
            .unwrap_or_default();
        self.trace.record(MergeStep {
            kind,
            description,
            array: array.to_vec(),
            compared: marks.compared,
            placed: marks.placed,
            range: marks.range,
            merging_range,
            sorted_indices: self.sorted.clone(),
        });
    }

    fn sort_range(&mut self, array: &mut [i64], left: usize, right: usize) {
        if left >= right {
            return;
        }
        let mid = left + (right - left) / 2;
        self.record(
            MergeStepKind::Divide,
            format!("Dividing array [{left}..{right}] at index {mid}"),
            array,
            Marks {
                range: Some((left, right)),
                ..Marks::default()
            },
        );
        self.sort_range(array, left, mid);
        self.sort_range(array, mid + 1, right);
        self.merge(array, left, mid, right);
    }

    fn merge(&mut self, array: &mut [i64], left: usize, mid: usize, right: usize) {
        let merging = Some((left, right));
        self.record(
            MergeStepKind::MergeStart,
            format!(
                "Merging subarrays [{left}..{mid}] and [{}..{right}]",
                mid + 1
            ),
            array,
            Marks {
                merging,
                ..Marks::default()
            },
        );

        let left_run = array[left..=mid].to_vec();
        let right_run = array[mid + 1..=right].to_vec();
        let (mut i, mut j, mut k) = (0, 0, left);

        while i < left_run.len() && j < right_run.len() {
            self.comparisons += 1;
            let (a, b) = (left_run[i], right_run[j]);
            self.record(
                MergeStepKind::Compare,
                format!("Comparing {a} and {b}"),
                array,
                Marks {
                    compared: Some((left + i, mid + 1 + j)),
                    merging,
                    ..Marks::default()
                },
            );

            // Ties take the left run, keeping the sort stable.
            if self.order.keeps(a, b) {
                array[k] = a;
                i += 1;
            } else {
                array[k] = b;
                j += 1;
            }
            self.merges += 1;
            self.record(
                MergeStepKind::Place,
                format!("Placed {} at index {k}", array[k]),
                array,
                Marks {
                    placed: Some(k),
                    merging,
                    ..Marks::default()
                },
            );
            k += 1;
        }

        for value in left_run[i..].iter().chain(&right_run[j..]) {
            array[k] = *value;
            self.record(
                MergeStepKind::CopyRemaining,
                format!("Copying remaining element {value} to index {k}"),
                array,
                Marks {
                    placed: Some(k),
                    merging,
                    ..Marks::default()
                },
            );
            k += 1;
        }

        if right - left + 1 <= 2 {
            for index in left..=right {
                mark_sorted(&mut self.sorted, index);
            }
        }
        self.record(
            MergeStepKind::Merged,
            format!("Merged subarray [{left}..{right}]"),
            array,
            Marks {
                merging,
                ..Marks::default()
            },
        );
    }
}

/// Top-down merge sort.
///
/// Sorted markers appear only on merged runs of length two or less until
/// the final step marks everything.
pub fn merge_sort(input: &[i64], order: Order) -> Result<MergeSortResult, ValidationError> {
    validate_sort_array(input)?;
    let mut array = input.to_vec();
    let mut merge = MergeSort {
        trace: Trace::new(),
        order,
        sorted: Vec::new(),
        comparisons: 0,
        merges: 0,
    };

    merge.record(
        MergeStepKind::Initial,
        format!("Initial array. Sorting in {} order.", order_word(order)),
        &array,
        Marks::default(),
    );
    merge.record(
        MergeStepKind::Start,
        "Starting merge sort: divide the array into halves.".to_string(),
        &array,
        Marks::default(),
    );

    let right = array.len() - 1;
    merge.sort_range(&mut array, 0, right);

    merge.sorted = all_indices(array.len());
    merge.record(
        MergeStepKind::Complete,
        "Sorting complete!".to_string(),
        &array,
        Marks::default(),
    );

    debug!(steps = merge.trace.len(), comparisons = merge.comparisons, merges = merge.merges, "merge sort generated");
    Ok(MergeSortResult {
        steps: merge.trace.into_steps(),
        total_comparisons: merge.comparisons,
        total_merges: merge.merges,
    })
}

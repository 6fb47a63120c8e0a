use serde::{Deserialize, Serialize};
use stepwise_ir::validate::{validate_sort_array, ValidationError};
use stepwise_ir::Trace;
use tracing::debug;

use super::{mark_sorted, order_word};
use crate::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BubbleStepKind {
    Initial,
    Compare,
    Swap,
    PassComplete,
    EarlyExit,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleStep {
    pub kind: BubbleStepKind,
    pub description: String,
    pub array: Vec<i64>,
    pub compared: Option<(usize, usize)>,
    /// 1-based pass number.
    pub pass: Option<usize>,
    pub sorted_indices: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleSortResult {
    pub steps: Vec<BubbleStep>,
    pub total_comparisons: usize,
    pub total_swaps: usize,
}

struct Bubble {
    trace: Trace<BubbleStep>,
    sorted: Vec<usize>,
}

impl Bubble {
    fn record(
        &mut self,
        kind: BubbleStepKind,
        description: String,
        array: &[i64],
        compared: Option<(usize, usize)>,
        pass: Option<usize>,
    ) {
        self.trace.record(BubbleStep {
            kind,
            description,
            array: array.to_vec(),
            compared,
            pass,
            sorted_indices: self.sorted.clone(),
        });
    }
}

/// Adjacent-pair passes; a pass without swaps ends the sort early.
pub fn bubble_sort(input: &[i64], order: Order) -> Result<BubbleSortResult, ValidationError> {
    validate_sort_array(input)?;
    let mut array = input.to_vec();
    let n = array.len();
    let mut bubble = Bubble {
        trace: Trace::new(),
        sorted: Vec::new(),
    };
    let mut comparisons = 0;
    let mut swaps = 0;

    bubble.record(
        BubbleStepKind::Initial,
        format!("Initial array. Sorting in {} order.", order_word(order)),
        &array,
        None,
        None,
    );

    for i in 0..n - 1 {
        let pass = i + 1;
        let mut swapped = false;

        for j in 0..n - i - 1 {
            comparisons += 1;
            let (a, b) = (array[j], array[j + 1]);
            bubble.record(
                BubbleStepKind::Compare,
                format!("Pass {pass}: Comparing {a} and {b}"),
                &array,
                Some((j, j + 1)),
                Some(pass),
            );

            if order.precedes(b, a) {
                array.swap(j, j + 1);
                swaps += 1;
                swapped = true;
                bubble.record(
                    BubbleStepKind::Swap,
                    format!("Swapped {a} and {b}"),
                    &array,
                    Some((j, j + 1)),
                    Some(pass),
                );
            }
        }

        mark_sorted(&mut bubble.sorted, n - i - 1);
        bubble.record(
            BubbleStepKind::PassComplete,
            format!(
                "Pass {pass} completed. Element {} is in its final position.",
                array[n - i - 1]
            ),
            &array,
            None,
            Some(pass),
        );

        if !swapped {
            for k in 0..n - i - 1 {
                mark_sorted(&mut bubble.sorted, k);
            }
            bubble.record(
                BubbleStepKind::EarlyExit,
                "No swaps in this pass. Array is already sorted!".to_string(),
                &array,
                None,
                Some(pass),
            );
            break;
        }
    }

    mark_sorted(&mut bubble.sorted, 0);
    bubble.record(
        BubbleStepKind::Complete,
        "Sorting complete!".to_string(),
        &array,
        None,
        None,
    );

    debug!(steps = bubble.trace.len(), comparisons, swaps, "bubble sort generated");
    Ok(BubbleSortResult {
        steps: bubble.trace.into_steps(),
        total_comparisons: comparisons,
        total_swaps: swaps,
    })
}

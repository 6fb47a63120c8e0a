use serde::{Deserialize, Serialize};
use stepwise_ir::validate::{validate_radix_array, ValidationError};
use stepwise_ir::Trace;
use tracing::debug;

use super::{all_indices, order_word};
use crate::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadixStepKind {
    Initial,
    Distribute,
    Collect,
    PassComplete,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadixStep {
    pub kind: RadixStepKind,
    pub description: String,
    pub array: Vec<i64>,
    /// 1, 10, 100, ...
    pub digit_place: Option<i64>,
    /// Elements per decimal digit for this pass; empty outside distribution.
    pub bucket_counts: Vec<usize>,
    pub sorted_indices: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadixSortResult {
    pub steps: Vec<RadixStep>,
    pub total_passthroughs: usize,
}

fn step(
    kind: RadixStepKind,
    description: String,
    array: &[i64],
    digit_place: Option<i64>,
    bucket_counts: Vec<usize>,
) -> RadixStep {
    RadixStep {
        kind,
        description,
        array: array.to_vec(),
        digit_place,
        bucket_counts,
        sorted_indices: Vec::new(),
    }
}

fn digit(value: i64, place: i64) -> usize {
    ((value / place) % 10) as usize
}

/// LSD radix sort over decimal digits.
///
/// Radix sort never compares elements: descending order comes from
/// accumulating bucket offsets right to left instead of left to right.
pub fn radix_sort(input: &[i64], order: Order) -> Result<RadixSortResult, ValidationError> {
    validate_radix_array(input)?;
    let mut array = input.to_vec();
    let mut trace = Trace::new();
    let max = array.iter().copied().max().unwrap_or(0);
    let mut passes = 0;

    trace.record(step(
        RadixStepKind::Initial,
        format!(
            "Initial array. Sorting in {} order, maximum value {max}.",
            order_word(order)
        ),
        &array,
        None,
        Vec::new(),
    ));

    let mut place: i64 = 1;
    while max / place > 0 {
        passes += 1;

        let mut counts = [0usize; 10];
        for &value in &array {
            counts[digit(value, place)] += 1;
        }
        trace.record(step(
            RadixStepKind::Distribute,
            format!("Pass {passes}: distributing elements into buckets by the {place}s digit"),
            &array,
            Some(place),
            counts.to_vec(),
        ));

        let mut offsets = counts;
        match order {
            Order::Ascending => {
                for d in 1..10 {
                    offsets[d] += offsets[d - 1];
                }
            }
            Order::Descending => {
                for d in (0..9).rev() {
                    offsets[d] += offsets[d + 1];
                }
            }
        }

        let mut output = vec![0; array.len()];
        for &value in array.iter().rev() {
            let d = digit(value, place);
            offsets[d] -= 1;
            output[offsets[d]] = value;
        }
        array = output;

        trace.record(step(
            RadixStepKind::Collect,
            format!("Collecting elements from buckets in {} digit order", order_word(order)),
            &array,
            Some(place),
            Vec::new(),
        ));
        trace.record(step(
            RadixStepKind::PassComplete,
            format!("Completed pass for the {place}s digit"),
            &array,
            Some(place),
            Vec::new(),
        ));

        place = match place.checked_mul(10) {
            Some(next) => next,
            None => break,
        };
    }

    let mut complete = step(
        RadixStepKind::Complete,
        "Sorting complete!".to_string(),
        &array,
        None,
        Vec::new(),
    );
    complete.sorted_indices = all_indices(array.len());
    trace.record(complete);

    debug!(steps = trace.len(), passes, "radix sort generated");
    Ok(RadixSortResult {
        steps: trace.into_steps(),
        total_passthroughs: passes,
    })
}

//! Linear, binary and interpolation search traces.
//!
//! Binary and interpolation search sort an unsorted input themselves and
//! say so in the trace before probing.

pub mod binary;
pub mod interpolation;
pub mod linear;

pub use binary::binary_search;
pub use interpolation::interpolation_search;
pub use linear::linear_search;

use serde::{Deserialize, Serialize};
use stepwise_ir::sentinel;
use stepwise_ir::Trace;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStepKind {
    Start,
    Unsorted,
    Sorted,
    Check,
    Narrow,
    Found,
    NotFound,
}

/// One moment of a search.
///
/// `low`/`high` are signed: a binary search window closes with
/// `high = low - 1`, which may be `-1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStep {
    pub kind: SearchStepKind,
    pub description: String,
    pub array: Vec<i64>,
    pub target: i64,
    pub low: Option<isize>,
    pub high: Option<isize>,
    /// Index being compared against the target.
    pub probe: Option<usize>,
}

impl SearchStep {
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, SearchStepKind::Found | SearchStepKind::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub steps: Vec<SearchStep>,
    pub comparisons: usize,
    #[serde(with = "sentinel::option")]
    pub found_index: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Window {
    pub low: Option<isize>,
    pub high: Option<isize>,
    pub probe: Option<usize>,
}

impl Window {
    pub fn range(low: isize, high: isize) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
            probe: None,
        }
    }

    pub fn probing(low: isize, high: isize, probe: usize) -> Self {
        Self {
            probe: Some(probe),
            ..Self::range(low, high)
        }
    }

    pub fn at(probe: usize) -> Self {
        Self {
            probe: Some(probe),
            ..Self::default()
        }
    }
}

pub(crate) struct SearchRecorder {
    trace: Trace<SearchStep>,
    target: i64,
    pub comparisons: usize,
}

impl SearchRecorder {
    pub fn new(target: i64) -> Self {
        Self {
            trace: Trace::new(),
            target,
            comparisons: 0,
        }
    }

    pub fn record(
        &mut self,
        kind: SearchStepKind,
        description: String,
        array: &[i64],
        window: Window,
    ) {
        self.trace.record(SearchStep {
            kind,
            description,
            array: array.to_vec(),
            target: self.target,
            low: window.low,
            high: window.high,
            probe: window.probe,
        });
    }

    pub fn finish(self, found_index: Option<usize>) -> SearchResult {
        debug!(steps = self.trace.len(), comparisons = self.comparisons, ?found_index, "search generated");
        SearchResult {
            steps: self.trace.into_steps(),
            comparisons: self.comparisons,
            found_index,
        }
    }
}

/// Return a sorted working copy, narrating the sort if one was needed.
pub(crate) fn sorted_working_copy(
    input: &[i64],
    algorithm: &str,
    recorder: &mut SearchRecorder,
) -> Vec<i64> {
    let mut array = input.to_vec();
    if array.windows(2).any(|w| w[0] > w[1]) {
        recorder.record(
            SearchStepKind::Unsorted,
            format!("Input array is unsorted. {algorithm} requires a sorted array."),
            &array,
            Window::default(),
        );
        array.sort_unstable();
        recorder.record(
            SearchStepKind::Sorted,
            format!("Array has been sorted. Now we can proceed with {algorithm}."),
            &array,
            Window::default(),
        );
    }
    array
}

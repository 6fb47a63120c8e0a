//! Comparison sorts (bubble, quick, merge, heap) and LSD radix sort.
//!
//! Each generator owns its step type so a renderer gets exactly the
//! highlights that algorithm has; [`SortSnapshot`] is the common view
//! over all of them.

pub mod bubble;
pub mod heap_sort;
pub mod merge;
pub mod quick;
pub mod radix;

pub use bubble::{bubble_sort, BubbleSortResult, BubbleStep, BubbleStepKind};
pub use heap_sort::{heap_sort, HeapSortResult, HeapSortStep, HeapSortStepKind};
pub use merge::{merge_sort, MergeSortResult, MergeStep, MergeStepKind};
pub use quick::{quick_sort, QuickSortResult, QuickStep, QuickStepKind};
pub use radix::{radix_sort, RadixSortResult, RadixStep, RadixStepKind};

/// Array state shared by every sort step.
pub trait SortSnapshot {
    fn array(&self) -> &[i64];
    fn sorted_indices(&self) -> &[usize];
    fn description(&self) -> &str;
}

macro_rules! impl_snapshot {
    ($($step:ty),* $(,)?) => {
        $(impl SortSnapshot for $step {
            fn array(&self) -> &[i64] {
                &self.array
            }

            fn sorted_indices(&self) -> &[usize] {
                &self.sorted_indices
            }

            fn description(&self) -> &str {
                &self.description
            }
        })*
    };
}

impl_snapshot!(BubbleStep, QuickStep, MergeStep, HeapSortStep, RadixStep);

pub(crate) fn order_word(order: crate::Order) -> &'static str {
    match order {
        crate::Order::Ascending => "ascending",
        crate::Order::Descending => "descending",
    }
}

/// Add `index` to a sorted-index list unless already present.
pub(crate) fn mark_sorted(sorted: &mut Vec<usize>, index: usize) {
    if !sorted.contains(&index) {
        sorted.push(index);
    }
}

pub(crate) fn all_indices(len: usize) -> Vec<usize> {
    (0..len).collect()
}

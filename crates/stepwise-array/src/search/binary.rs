use std::cmp::Ordering;

use stepwise_ir::validate::{validate_search_array, ValidationError};

use super::{sorted_working_copy, SearchRecorder, SearchResult, SearchStepKind, Window};

pub fn binary_search(input: &[i64], target: i64) -> Result<SearchResult, ValidationError> {
    validate_search_array(input)?;
    let mut recorder = SearchRecorder::new(target);
    let array = sorted_working_copy(input, "Binary Search", &mut recorder);

    let mut low: isize = 0;
    let mut high: isize = array.len() as isize - 1;
    recorder.record(
        SearchStepKind::Start,
        format!("Initial Range: Low={low}, High={high}. Target={target}"),
        &array,
        Window::range(low, high),
    );

    while low <= high {
        let mid = low + (high - low) / 2;
        let probe = mid as usize;
        let value = array[probe];
        recorder.comparisons += 1;
        recorder.record(
            SearchStepKind::Check,
            format!("Calculating Mid: ({low} + {high}) / 2 = {mid}. Value is {value}."),
            &array,
            Window::probing(low, high, probe),
        );

        match value.cmp(&target) {
            Ordering::Equal => {
                recorder.record(
                    SearchStepKind::Found,
                    format!("Match found! {value} equals target {target} at index {mid}."),
                    &array,
                    Window::probing(low, high, probe),
                );
                return Ok(recorder.finish(Some(probe)));
            }
            Ordering::Less => {
                recorder.record(
                    SearchStepKind::Narrow,
                    format!(
                        "{value} < {target}. Target must be in the RIGHT side. Moving Low to {}.",
                        mid + 1
                    ),
                    &array,
                    Window::probing(mid + 1, high, probe),
                );
                low = mid + 1;
            }
            Ordering::Greater => {
                recorder.record(
                    SearchStepKind::Narrow,
                    format!(
                        "{value} > {target}. Target must be in the LEFT side. Moving High to {}.",
                        mid - 1
                    ),
                    &array,
                    Window::probing(low, mid - 1, probe),
                );
                high = mid - 1;
            }
        }
    }

    recorder.record(
        SearchStepKind::NotFound,
        format!("Target {target} not found. Search space exhausted (Low > High)."),
        &array,
        Window::range(low, high),
    );
    Ok(recorder.finish(None))
}

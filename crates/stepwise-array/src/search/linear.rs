use stepwise_ir::validate::{validate_search_array, ValidationError};

use super::{SearchRecorder, SearchResult, SearchStepKind, Window};

/// Scan left to right, one `Check` step per index.
pub fn linear_search(input: &[i64], target: i64) -> Result<SearchResult, ValidationError> {
    validate_search_array(input)?;
    let array = input.to_vec();
    let mut recorder = SearchRecorder::new(target);

    recorder.record(
        SearchStepKind::Start,
        format!("Starting Linear Search for target {target}."),
        &array,
        Window::default(),
    );

    for (i, &value) in array.iter().enumerate() {
        recorder.comparisons += 1;
        recorder.record(
            SearchStepKind::Check,
            format!("Checking index {i}: is {value} equal to {target}?"),
            &array,
            Window::at(i),
        );
        if value == target {
            recorder.record(
                SearchStepKind::Found,
                format!("Found target {target} at index {i}!"),
                &array,
                Window::at(i),
            );
            return Ok(recorder.finish(Some(i)));
        }
    }

    recorder.record(
        SearchStepKind::NotFound,
        format!("Target {target} was not found in the array."),
        &array,
        Window::default(),
    );
    Ok(recorder.finish(None))
}

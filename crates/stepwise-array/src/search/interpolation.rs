use std::cmp::Ordering;

use stepwise_ir::validate::{validate_search_array, ValidationError};

use super::{sorted_working_copy, SearchRecorder, SearchResult, SearchStepKind, Window};

pub fn interpolation_search(input: &[i64], target: i64) -> Result<SearchResult, ValidationError> {
    validate_search_array(input)?;
    let mut recorder = SearchRecorder::new(target);
    let array = sorted_working_copy(input, "Interpolation Search", &mut recorder);

    let mut low: isize = 0;
    let mut high: isize = array.len() as isize - 1;
    recorder.record(
        SearchStepKind::Start,
        format!("Initial Range: Low={low}, High={high}. Target={target}"),
        &array,
        Window::range(low, high),
    );

    while low <= high
        && target >= array[low as usize]
        && target <= array[high as usize]
    {
        let (lo, hi) = (low as usize, high as usize);
        recorder.comparisons += 1;

        if lo == hi {
            // Loop guard pins the target to this single value.
            recorder.record(
                SearchStepKind::Found,
                format!("Only one element left. Match found at index {lo}!"),
                &array,
                Window::probing(low, high, lo),
            );
            return Ok(recorder.finish(Some(lo)));
        }

        let pos = estimate_position(&array, lo, hi, target);
        let value = array[pos];
        recorder.record(
            SearchStepKind::Check,
            format!(
                "Interpolating position: {lo} + (({target} - {}) * ({hi} - {lo}) / ({} - {})) = {pos}. Value is {value}.",
                array[lo], array[hi], array[lo]
            ),
            &array,
            Window::probing(low, high, pos),
        );

        let pos_i = pos as isize;
        match value.cmp(&target) {
            Ordering::Equal => {
                recorder.record(
                    SearchStepKind::Found,
                    format!("Match found! {value} equals target {target} at index {pos}."),
                    &array,
                    Window::probing(low, high, pos),
                );
                return Ok(recorder.finish(Some(pos)));
            }
            Ordering::Less => {
                recorder.record(
                    SearchStepKind::Narrow,
                    format!("{value} < {target}. Moving Low to {}.", pos_i + 1),
                    &array,
                    Window::probing(pos_i + 1, high, pos),
                );
                low = pos_i + 1;
            }
            Ordering::Greater => {
                recorder.record(
                    SearchStepKind::Narrow,
                    format!("{value} > {target}. Moving High to {}.", pos_i - 1),
                    &array,
                    Window::probing(low, pos_i - 1, pos),
                );
                high = pos_i - 1;
            }
        }
    }

    recorder.record(
        SearchStepKind::NotFound,
        format!("Target {target} not found within the range."),
        &array,
        Window::range(low, high),
    );
    Ok(recorder.finish(None))
}

/// Estimated index of `target` in `array[low..=high]`, truncated toward zero.
///
/// Equal endpoint values carry no slope; the estimate falls back to `low`.
fn estimate_position(array: &[i64], low: usize, high: usize, target: i64) -> usize {
    let span = i128::from(array[high]) - i128::from(array[low]);
    if span == 0 {
        return low;
    }
    let numerator = (i128::from(target) - i128::from(array[low])) as f64 * (high - low) as f64;
    let offset = (numerator / span as f64) as usize;
    (low + offset).min(high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_position_uniform() {
        let array = [10, 20, 30, 40, 50];
        assert_eq!(estimate_position(&array, 0, 4, 40), 3);
        assert_eq!(estimate_position(&array, 0, 4, 10), 0);
    }

    #[test]
    fn test_estimate_position_truncates() {
        let array = [0, 10, 100];
        // 0 + (9 * 2 / 100) = 0.18 -> 0
        assert_eq!(estimate_position(&array, 0, 2, 9), 0);
    }

    #[test]
    fn test_estimate_position_full_i64_span() {
        let array = [i64::MIN, 0, i64::MAX];
        assert_eq!(estimate_position(&array, 0, 2, 0), 1);
        assert_eq!(estimate_position(&array, 0, 2, i64::MAX), 2);
    }

    #[test]
    fn test_estimate_position_flat_span() {
        let array = [7, 7, 7];
        assert_eq!(estimate_position(&array, 0, 2, 7), 0);
    }
}

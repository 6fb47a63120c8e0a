//! Property tests: every search agrees with a plain scan.

use proptest::{collection::vec, prelude::prop_assert, prelude::prop_assert_eq, proptest};
use stepwise_array::search::{binary_search, interpolation_search, linear_search};

proptest! {
    #[test]
    fn test_linear_matches_position(array in vec(-50i64..50, 1..=20), target in -50i64..50) {
        let result = linear_search(&array, target).unwrap();
        prop_assert_eq!(result.found_index, array.iter().position(|v| *v == target));
        prop_assert!(result.steps.last().unwrap().is_terminal());
    }

    #[test]
    fn test_sorted_searches_find_present_targets(array in vec(-50i64..50, 1..=20), pick in 0usize..20) {
        let target = array[pick % array.len()];
        let mut sorted = array.clone();
        sorted.sort_unstable();

        for result in [binary_search(&array, target).unwrap(), interpolation_search(&array, target).unwrap()] {
            let index = result.found_index.unwrap();
            prop_assert_eq!(sorted[index], target);
            prop_assert_eq!(result.steps.iter().filter(|s| s.is_terminal()).count(), 1);
        }
    }

    #[test]
    fn test_sorted_searches_report_absent_targets(array in vec(-50i64..50, 1..=20), target in -60i64..60) {
        if !array.contains(&target) {
            prop_assert_eq!(binary_search(&array, target).unwrap().found_index, None);
            prop_assert_eq!(interpolation_search(&array, target).unwrap().found_index, None);
        }
    }
}

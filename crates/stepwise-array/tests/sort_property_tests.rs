//! Property tests: every sort yields a sorted permutation of its input,
//! and each exchange step changes only the positions it names.

use proptest::{
    collection::vec,
    prelude::{any, prop_assert, prop_assert_eq},
    proptest,
};
use stepwise_array::sort::{
    bubble_sort, heap_sort, merge_sort, quick_sort, radix_sort, BubbleStepKind,
    HeapSortStepKind, MergeStepKind, QuickStepKind, SortSnapshot,
};
use stepwise_array::Order;
use stepwise_fixture::{fixture_rng, random_array, stream};

fn expected(input: &[i64], order: Order) -> Vec<i64> {
    let mut sorted = input.to_vec();
    sorted.sort_unstable();
    if order == Order::Descending {
        sorted.reverse();
    }
    sorted
}

fn changed_positions(before: &[i64], after: &[i64]) -> Vec<usize> {
    (0..before.len()).filter(|&i| before[i] != after[i]).collect()
}

/// `after` is `before` with positions `a` and `b` exchanged.
fn is_exchange(before: &[i64], after: &[i64], (a, b): (usize, usize)) -> bool {
    let mut expected = before.to_vec();
    expected.swap(a, b);
    expected == after
}

fn finals(input: &[i64], order: Order) -> Vec<(&'static str, Vec<i64>, usize)> {
    fn last<S: SortSnapshot>(steps: &[S]) -> (Vec<i64>, usize) {
        let step = steps.last().unwrap();
        (step.array().to_vec(), step.sorted_indices().len())
    }
    let mut out = Vec::new();
    let (a, s) = last(&bubble_sort(input, order).unwrap().steps);
    out.push(("bubble", a, s));
    let (a, s) = last(&quick_sort(input, order).unwrap().steps);
    out.push(("quick", a, s));
    let (a, s) = last(&merge_sort(input, order).unwrap().steps);
    out.push(("merge", a, s));
    let (a, s) = last(&heap_sort(input, order).unwrap().steps);
    out.push(("heap", a, s));
    out
}

proptest! {
    #[test]
    fn test_comparison_sorts_agree(input in vec(-100i64..100, 2..=20), ascending in any::<bool>()) {
        let order = Order::from_ascending(ascending);
        let want = expected(&input, order);
        for (name, got, sorted_count) in finals(&input, order) {
            prop_assert_eq!(&got, &want, "{} sort", name);
            prop_assert_eq!(sorted_count, input.len(), "{} sorted markers", name);
        }
    }

    #[test]
    fn test_radix_sorts_non_negative(input in vec(0i64..10_000, 2..=20), ascending in any::<bool>()) {
        let order = Order::from_ascending(ascending);
        let result = radix_sort(&input, order).unwrap();
        prop_assert_eq!(result.steps.last().unwrap().array.clone(), expected(&input, order));
    }

    #[test]
    fn test_bubble_swap_steps_exchange_compared_pair(input in vec(-20i64..20, 2..=12)) {
        let result = bubble_sort(&input, Order::Ascending).unwrap();
        for pair in result.steps.windows(2) {
            if pair[1].kind == BubbleStepKind::Swap {
                let compared = pair[1].compared.unwrap();
                prop_assert!(is_exchange(&pair[0].array, &pair[1].array, compared));
                prop_assert_eq!(changed_positions(&pair[0].array, &pair[1].array).len(), 2);
            }
        }
    }

    #[test]
    fn test_heap_swap_steps_exchange_compared_pair(
        input in vec(-20i64..20, 2..=12),
        ascending in any::<bool>(),
    ) {
        let result = heap_sort(&input, Order::from_ascending(ascending)).unwrap();
        for pair in result.steps.windows(2) {
            match pair[1].kind {
                HeapSortStepKind::Swap | HeapSortStepKind::ExtractSwap => {
                    let (a, b) = pair[1].compared.unwrap();
                    prop_assert!(is_exchange(&pair[0].array, &pair[1].array, (a, b)));
                    let changed = changed_positions(&pair[0].array, &pair[1].array);
                    if pair[0].array[a] == pair[0].array[b] {
                        prop_assert!(changed.is_empty());
                    } else {
                        prop_assert_eq!(changed, vec![a.min(b), a.max(b)]);
                    }
                }
                _ => {
                    prop_assert_eq!(pair[0].array.len(), pair[1].array.len());
                }
            }
        }
    }

    #[test]
    fn test_merge_place_steps_write_one_position(
        input in vec(-20i64..20, 2..=12),
        ascending in any::<bool>(),
    ) {
        let result = merge_sort(&input, Order::from_ascending(ascending)).unwrap();
        for pair in result.steps.windows(2) {
            if matches!(pair[1].kind, MergeStepKind::Place | MergeStepKind::CopyRemaining) {
                let placed = pair[1].placed.unwrap();
                let changed = changed_positions(&pair[0].array, &pair[1].array);
                prop_assert!(changed.len() <= 1);
                prop_assert!(changed.iter().all(|&i| i == placed));
            }
        }
    }

    #[test]
    fn test_quick_swap_steps_touch_two_positions(input in vec(-20i64..20, 2..=12)) {
        let result = quick_sort(&input, Order::Ascending).unwrap();
        for pair in result.steps.windows(2) {
            if pair[1].kind == QuickStepKind::Swap {
                let changed = pair[0]
                    .array
                    .iter()
                    .zip(&pair[1].array)
                    .filter(|(a, b)| a != b)
                    .count();
                prop_assert_eq!(changed, 2);
            } else {
                prop_assert!(pair[0].array.len() == pair[1].array.len());
            }
        }
    }
}

#[test]
fn test_sorts_on_seeded_fixtures() {
    for seed in 0..25 {
        let input = random_array(&mut fixture_rng(seed, stream::ARRAY), 12, 0..=99);
        for order in [Order::Ascending, Order::Descending] {
            let want = expected(&input, order);
            for (name, got, _) in finals(&input, order) {
                assert_eq!(got, want, "{name} sort, seed {seed}");
            }
            let radix = radix_sort(&input, order).unwrap();
            assert_eq!(radix.steps.last().unwrap().array, want, "radix, seed {seed}");
        }
    }
}

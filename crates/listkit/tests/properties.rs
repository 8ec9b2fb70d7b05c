//! Property tests for the list and record combinators.
//!
//! These check the laws the combinators promise for arbitrary input:
//! - Duality: `pipe` and `compose` apply the same stages in opposite orders
//! - Lengths: zip, xprod, intersperse, insert and range produce the
//!   documented sizes
//! - Equivalences: `flat_map` is `flatten` after `map`
//! - Order: deduplication keeps first occurrences in their original order

use std::collections::HashSet;

use listkit::compose::Transform;
use listkit::{
    adjust, compose, deduplicate, deduplicate_by, deduplicate_coerced, flat_map, flatten,
    from_pairs, includes, insert, insert_all, intersperse, merge_all, pipe, range, repeat,
    reverse, times, xprod, zip,
};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn affine(scale: i64, offset: i64) -> Transform<'static, i64> {
    Box::new(move |x: i64| x.wrapping_mul(scale).wrapping_add(offset))
}

// ============================================================================
// Composition
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: pipe(f, g)(x) == g(f(x)) and compose(f, g)(x) == f(g(x))
    #[test]
    fn prop_pipe_compose_duality(
        x in -1_000i64..1_000,
        (a, b) in (-10i64..10, -10i64..10),
        (c, d) in (-10i64..10, -10i64..10),
    ) {
        init_tracing();
        let f = affine(a, b);
        let g = affine(c, d);
        let expected_pipe = g(f(x));
        let expected_compose = f(g(x));

        prop_assert_eq!(pipe(vec![affine(a, b), affine(c, d)])(x), expected_pipe);
        prop_assert_eq!(compose(vec![affine(a, b), affine(c, d)])(x), expected_compose);
    }

    /// Property: compose over reversed stages equals pipe over the originals
    #[test]
    fn prop_compose_is_reversed_pipe(
        x in any::<i64>(),
        params in prop::collection::vec((-5i64..5, -5i64..5), 0..6),
    ) {
        let forward: Vec<_> = params.iter().map(|&(s, o)| affine(s, o)).collect();
        let backward: Vec<_> = params.iter().rev().map(|&(s, o)| affine(s, o)).collect();

        prop_assert_eq!(pipe(forward)(x), compose(backward)(x));
    }

    /// Property: macro forms agree with the runtime forms
    #[test]
    fn prop_macros_match_functions(x in -1_000i64..1_000) {
        let piped = listkit::pipe!(|n: i64| n + 1, |n: i64| n * 3);
        let composed = listkit::compose!(|n: i64| n + 1, |n: i64| n * 3);

        prop_assert_eq!(piped(x), pipe(vec![affine(1, 1), affine(3, 0)])(x));
        prop_assert_eq!(composed(x), compose(vec![affine(1, 1), affine(3, 0)])(x));
    }
}

// ============================================================================
// Pairing
// ============================================================================

proptest! {
    /// Property: zip has the shorter list's length and preserves positions
    #[test]
    fn prop_zip_length_is_min(
        a in prop::collection::vec(any::<i32>(), 0..30),
        b in prop::collection::vec(any::<u8>(), 0..30),
    ) {
        let zipped = zip(&a, &b);
        prop_assert_eq!(zipped.len(), a.len().min(b.len()));
        for (i, (x, y)) in zipped.iter().enumerate() {
            prop_assert_eq!(*x, a[i]);
            prop_assert_eq!(*y, b[i]);
        }
    }

    /// Property: xprod has |A| * |B| pairs in A-major order
    #[test]
    fn prop_xprod_length_and_order(
        a in prop::collection::vec(any::<i16>(), 0..12),
        b in prop::collection::vec(any::<i16>(), 0..12),
    ) {
        let product = xprod(&a, &b);
        prop_assert_eq!(product.len(), a.len() * b.len());
        for (i, pair) in product.iter().enumerate() {
            prop_assert_eq!(*pair, (a[i / b.len()], b[i % b.len()]));
        }
    }
}

// ============================================================================
// Shape
// ============================================================================

proptest! {
    /// Property: intersperse yields 2n - 1 elements, separators at odd slots
    #[test]
    fn prop_intersperse_length(list in prop::collection::vec(1i32..100, 0..30)) {
        let result = intersperse(&0, &list);
        let expected_len = if list.is_empty() { 0 } else { 2 * list.len() - 1 };
        prop_assert_eq!(result.len(), expected_len);

        for (i, value) in result.iter().enumerate() {
            if i % 2 == 1 {
                prop_assert_eq!(*value, 0);
            } else {
                prop_assert_eq!(*value, list[i / 2]);
            }
        }
    }

    /// Property: insert past the end is append; otherwise the item lands at index
    #[test]
    fn prop_insert_positions(
        list in prop::collection::vec(any::<i32>(), 0..20),
        index in 0usize..40,
        item in any::<i32>(),
    ) {
        init_tracing();
        let result = insert(index, item, &list);
        prop_assert_eq!(result.len(), list.len() + 1);

        if index >= list.len() {
            let mut appended = list.clone();
            appended.push(item);
            prop_assert_eq!(result, appended);
        } else {
            prop_assert_eq!(result[index], item);
            prop_assert_eq!(&result[..index], &list[..index]);
            prop_assert_eq!(&result[index + 1..], &list[index..]);
        }
    }

    /// Property: insert_all of one item agrees with insert
    #[test]
    fn prop_insert_all_single_is_insert(
        list in prop::collection::vec(any::<i32>(), 0..20),
        index in 0usize..40,
        item in any::<i32>(),
    ) {
        prop_assert_eq!(insert_all(index, &[item], &list), insert(index, item, &list));
    }

    /// Property: reverse is an involution and leaves the input intact
    #[test]
    fn prop_reverse_involution(list in prop::collection::vec(any::<i32>(), 0..40)) {
        let snapshot = list.clone();
        prop_assert_eq!(reverse(&reverse(&list)), list.clone());
        prop_assert_eq!(list, snapshot);
    }

    /// Property: flat_map(f, L) == flatten(map(f, L))
    #[test]
    fn prop_flat_map_is_flatten_of_map(list in prop::collection::vec(0u8..6, 0..20)) {
        let f = |n: &u8| vec![*n; usize::from(*n)];
        let mapped: Vec<Vec<u8>> = list.iter().map(f).collect();

        prop_assert_eq!(flat_map(f, &list), flatten(&mapped));
    }

    /// Property: flatten's length is the sum of the inner lengths
    #[test]
    fn prop_flatten_length(lists in prop::collection::vec(prop::collection::vec(any::<i8>(), 0..5), 0..10)) {
        let total: usize = lists.iter().map(Vec::len).sum();
        prop_assert_eq!(flatten(&lists).len(), total);
    }
}

// ============================================================================
// Membership
// ============================================================================

proptest! {
    /// Property: includes agrees with a linear scan
    #[test]
    fn prop_includes_matches_contains(
        list in prop::collection::vec(0i32..20, 0..20),
        item in 0i32..20,
    ) {
        prop_assert_eq!(includes(&item, &list), list.contains(&item));
    }

    /// Property: dedup output is unique, a subsequence, and covers every input value
    #[test]
    fn prop_deduplicate_first_seen(list in prop::collection::vec(0i32..10, 0..40)) {
        let deduped = deduplicate(&list);

        let unique: HashSet<_> = deduped.iter().collect();
        prop_assert_eq!(unique.len(), deduped.len());

        let all: HashSet<_> = list.iter().collect();
        prop_assert_eq!(unique, all);

        // each kept value sits where it first appeared, relative to the others
        let first_positions: Vec<usize> = deduped
            .iter()
            .map(|v| list.iter().position(|x| x == v).unwrap_or(usize::MAX))
            .collect();
        prop_assert!(first_positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: dedup is idempotent
    #[test]
    fn prop_deduplicate_idempotent(list in prop::collection::vec(any::<u8>(), 0..40)) {
        let once = deduplicate(&list);
        prop_assert_eq!(deduplicate(&once), once.clone());
    }

    /// Property: for integers, coerced and structural dedup agree
    #[test]
    fn prop_coerced_matches_structural_for_integers(list in prop::collection::vec(-5i64..5, 0..30)) {
        prop_assert_eq!(deduplicate_coerced(&list), deduplicate(&list));
        prop_assert_eq!(deduplicate_by(|n: &i64| *n, &list), deduplicate(&list));
    }
}

// ============================================================================
// Records, generators, updates
// ============================================================================

proptest! {
    /// Property: from_pairs keeps the last value for each key
    #[test]
    fn prop_from_pairs_last_wins(pairs in prop::collection::vec((0u8..5, any::<i32>()), 0..20)) {
        let record = from_pairs(&pairs);
        for (key, _) in &pairs {
            let last = pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v);
            prop_assert_eq!(record.get(&key.to_string()), last);
        }
    }

    /// Property: merge_all of records built from pairs equals from_pairs of all pairs
    #[test]
    fn prop_merge_all_is_concatenated_pairs(
        chunks in prop::collection::vec(prop::collection::vec((0u8..6, any::<i32>()), 0..5), 0..6),
    ) {
        let records: Vec<_> = chunks.iter().map(|chunk| from_pairs(chunk)).collect();
        let all_pairs: Vec<(u8, i32)> = chunks.concat();
        prop_assert_eq!(merge_all(&records), from_pairs(&all_pairs));
    }

    /// Property: range has to - from + 1 elements, or none when to < from
    #[test]
    fn prop_range_length(from in -500i64..500, to in -500i64..500) {
        init_tracing();
        let values = range(from, to);
        let expected = if to < from { 0 } else { (to - from + 1) as usize };
        prop_assert_eq!(values.len(), expected);
        if let (Some(first), Some(last)) = (values.first(), values.last()) {
            prop_assert_eq!(*first, from);
            prop_assert_eq!(*last, to);
        }
    }

    /// Property: repeat and times produce exactly n elements
    #[test]
    fn prop_repeat_and_times_lengths(n in 0usize..50, item in any::<i32>()) {
        let repeated = repeat(&item, n);
        prop_assert_eq!(repeated.len(), n);
        prop_assert!(repeated.iter().all(|x| *x == item));
        prop_assert_eq!(times(|i| i, n), (0..n).collect::<Vec<_>>());
    }

    /// Property: adjust changes at most the element at index
    #[test]
    fn prop_adjust_touches_only_index(
        list in prop::collection::vec(any::<i32>(), 0..20),
        index in 0usize..30,
    ) {
        init_tracing();
        let adjusted = adjust(index, |x| x.wrapping_add(1), &list);
        prop_assert_eq!(adjusted.len(), list.len());
        for (i, (before, after)) in list.iter().zip(&adjusted).enumerate() {
            if i == index {
                prop_assert_eq!(*after, before.wrapping_add(1));
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}

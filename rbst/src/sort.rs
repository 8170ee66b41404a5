//! In-place sorts over a sequence of records, ordered by title.
//!
//! Neither sort is stable. Equal titles end up in whatever order the swaps leave them.

use std::cmp::Ordering;

use tracing::trace;

use crate::record::Titled;

fn by_title<T: Titled>(a: &T, b: &T) -> Ordering {
    a.title().cmp(b.title())
}

/// Sort `seq` by title with quicksort.
///
/// Average O(n log n). The fixed middle pivot degrades to O(n²) on some inputs.
///
/// ```rust
/// use rbst::{Record, Titled, quick_sort};
///
/// let mut records = vec![
///     Record::new("1", "pear", "", 0.0),
///     Record::new("2", "apple", "", 0.0),
///     Record::new("3", "fig", "", 0.0),
/// ];
/// quick_sort(&mut records);
/// let titles: Vec<&str> = records.iter().map(|r| r.title()).collect();
/// assert_eq!(titles, ["apple", "fig", "pear"]);
/// ```
pub fn quick_sort<T: Titled>(seq: &mut [T]) {
    quick_sort_by(seq, by_title);
}

/// Sort the inclusive index range `begin..=end` of `seq` by title.
///
/// Does nothing when `begin >= end`. Panics if `end` is out of bounds and `begin < end`.
pub fn quick_sort_range<T: Titled>(seq: &mut [T], begin: usize, end: usize) {
    quick_sort_range_by(seq, begin, end, &mut by_title::<T>);
}

/// Quicksort with a caller supplied comparison.
pub fn quick_sort_by<T, F>(seq: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() < 2 {
        return;
    }
    trace!(len = seq.len(), "quick sort");
    quick_sort_range_by(seq, 0, seq.len() - 1, &mut compare);
}

fn quick_sort_range_by<T, F>(seq: &mut [T], begin: usize, end: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if begin >= end {
        return;
    }

    // Everything in begin..=mid is <= pivot, everything after is >= pivot.
    let mid = partition(seq, begin, end, compare);
    quick_sort_range_by(seq, begin, mid, compare);
    quick_sort_range_by(seq, mid + 1, end, compare);
}

/// Hoare partition of `begin..=end` around the element at the middle index. Returns the index
/// of the last element of the low group, which is always `< end`.
///
/// The pivot is compared by position; if a swap moves it, its new position is followed.
pub(crate) fn partition<T, F>(seq: &mut [T], begin: usize, end: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut pivot = begin + (end - begin) / 2;
    let mut low = begin;
    let mut high = end;

    loop {
        while compare(&seq[low], &seq[pivot]) == Ordering::Less {
            low += 1;
        }
        while compare(&seq[pivot], &seq[high]) == Ordering::Less {
            high -= 1;
        }

        if low >= high {
            return high;
        }

        seq.swap(low, high);
        if pivot == low {
            pivot = high;
        } else if pivot == high {
            pivot = low;
        }
        low += 1;
        high -= 1;
    }
}

/// Sort `seq` by title with selection sort. Always O(n²).
pub fn selection_sort<T: Titled>(seq: &mut [T]) {
    selection_sort_by(seq, by_title);
}

/// Selection sort with a caller supplied comparison.
pub fn selection_sort_by<T, F>(seq: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    trace!(len, "selection sort");
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..len {
            if compare(&seq[j], &seq[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            seq.swap(i, min);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;
    use rand::{Rng, rng};

    use super::*;
    use crate::record::{Keyed, Record};

    fn records(titles: &[&str]) -> Vec<Record> {
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| Record::new(i.to_string(), *t, "", 0.0))
            .collect()
    }

    fn titles(seq: &[Record]) -> Vec<&str> {
        seq.iter().map(|r| r.title()).collect()
    }

    fn random_records(len: usize) -> Vec<Record> {
        let mut rng = rng();
        (0..len)
            .map(|i| {
                let title: String = (0..rng.random_range(0..4))
                    .map(|_| rng.random_range(b'a'..=b'e') as char)
                    .collect();
                Record::new(i.to_string(), title, "", i as f64)
            })
            .collect()
    }

    fn assert_sorted_permutation(original: &[Record], sorted: &[Record]) {
        assert!(sorted.windows(2).all(|w| w[0].title() <= w[1].title()));

        let mut expected_keys: Vec<&str> = original.iter().map(|r| r.key()).collect();
        let mut actual_keys: Vec<&str> = sorted.iter().map(|r| r.key()).collect();
        expected_keys.sort_unstable();
        actual_keys.sort_unstable();
        assert_eq!(actual_keys, expected_keys);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<Record> = Vec::new();
        quick_sort(&mut empty);
        selection_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = records(&["only"]);
        quick_sort(&mut one);
        selection_sort(&mut one);
        assert_eq!(titles(&one), ["only"]);

        quick_sort_range(&mut one, 0, 0);
        quick_sort_range(&mut empty, 3, 1);
    }

    #[test]
    fn test_quick_sort_small() {
        let mut seq = records(&["delta", "alpha", "echo", "charlie", "bravo"]);
        quick_sort(&mut seq);
        assert_eq!(titles(&seq), ["alpha", "bravo", "charlie", "delta", "echo"]);
    }

    #[test]
    fn test_selection_sort_small() {
        let mut seq = records(&["delta", "alpha", "echo", "charlie", "bravo"]);
        selection_sort(&mut seq);
        assert_eq!(titles(&seq), ["alpha", "bravo", "charlie", "delta", "echo"]);
    }

    #[test]
    fn test_sorted_reversed_and_equal_inputs() {
        for input in [
            vec!["a", "b", "c", "d", "e", "f"],
            vec!["f", "e", "d", "c", "b", "a"],
            vec!["x", "x", "x", "x", "x"],
            vec!["b", "a"],
            vec!["a", "b"],
        ] {
            let original = records(&input);
            let mut expected: Vec<&str> = input.clone();
            expected.sort_unstable();

            let mut q = original.clone();
            quick_sort(&mut q);
            assert_eq!(titles(&q), expected);

            let mut s = original.clone();
            selection_sort(&mut s);
            assert_eq!(titles(&s), expected);
        }
    }

    #[test]
    fn test_quick_sort_range_leaves_outside_alone() {
        let mut seq = records(&["z", "d", "c", "b", "a", "y"]);
        quick_sort_range(&mut seq, 1, 4);
        assert_eq!(titles(&seq), ["z", "a", "b", "c", "d", "y"]);
    }

    #[test]
    fn test_partition_point() {
        let mut seq = vec![5, 1, 4, 2, 3, 9, 0];
        let mut cmp = |a: &i32, b: &i32| a.cmp(b);
        let end = seq.len() - 1;
        let mid = partition(&mut seq, 0, end, &mut cmp);
        assert!(mid < end);
        let (low, high) = seq.split_at(mid + 1);
        let low_max = low.iter().max().copied();
        let high_min = high.iter().min().copied();
        assert!(low_max <= high_min);
    }

    #[test]
    fn test_random_against_std_sort() {
        for len in [2, 3, 10, 100, 1_000] {
            let original = random_records(len);
            let mut expected = titles(&original);
            expected.sort();

            let mut q = original.clone();
            quick_sort(&mut q);
            assert_eq!(titles(&q), expected);
            assert_sorted_permutation(&original, &q);

            let mut s = original.clone();
            selection_sort(&mut s);
            assert_eq!(titles(&s), expected);
            assert_sorted_permutation(&original, &s);
        }
    }

    #[test]
    fn test_sorting_twice_is_stable_state() {
        let mut seq = random_records(200);
        seq.shuffle(&mut rng());

        quick_sort(&mut seq);
        let once = seq.clone();
        quick_sort(&mut seq);
        assert_eq!(titles(&seq), titles(&once));

        selection_sort(&mut seq);
        let once = seq.clone();
        selection_sort(&mut seq);
        assert_eq!(seq, once);
    }

    #[test]
    fn test_sort_by_custom_order() {
        let mut values = vec![3, 1, 2, 5, 4];
        quick_sort_by(&mut values, |a, b| b.cmp(a));
        assert_eq!(values, [5, 4, 3, 2, 1]);

        let mut values = vec![3, 1, 2, 5, 4];
        selection_sort_by(&mut values, |a, b| b.cmp(a));
        assert_eq!(values, [5, 4, 3, 2, 1]);
    }
}

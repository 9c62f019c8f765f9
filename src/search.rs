//! Linear and binary search with a common interface.
//!
//! Both return the index of a matching element, or `s.len()` if there is none. The length of the
//! slice is the not-found sentinel: it is never a valid index, so callers test `idx == s.len()`
//! (or use `s.get(idx)`) instead of unwrapping an `Option`.

use contracts::*;
use std::cmp::Ordering;

/// Returns the index of the first element equal to `key`, or `s.len()` if there is none.
pub fn linear_search<T: Ord>(s: &[T], key: &T) -> usize {
    linear_search_by(s, key, Ord::cmp)
}

/// Returns the index of the first element for which `cmp(el, key)` is `Equal`, or `s.len()` if
/// no such element exists.
///
/// Elements are visited in order, so on duplicates the leftmost match wins.
#[debug_ensures(ret <= s.len())]
pub fn linear_search_by<T>(
    s: &[T],
    key: &T,
    mut cmp: impl FnMut(&T, &T) -> Ordering,
) -> usize {
    s.iter()
        .position(|el| cmp(el, key).is_eq())
        .unwrap_or(s.len())
}

/// Returns the index of an element equal to `key`, or `s.len()` if there is none.
///
/// `s` must be sorted in ascending order.
pub fn binary_search<T: Ord>(s: &[T], key: &T) -> usize {
    binary_search_by(s, key, Ord::cmp)
}

/// Returns the index of an element for which `cmp(el, key)` is `Equal`, or `s.len()` if no such
/// element exists.
///
/// `s` must be sorted in ascending order according to `cmp`. This is not checked: on unsorted
/// input the result is some index in `0..=s.len()`, but not necessarily a match.
///
/// If several elements match, the one returned is whichever bisection lands on first. It is not
/// necessarily the first or the last of the run.
#[debug_ensures(ret <= s.len())]
pub fn binary_search_by<T>(
    s: &[T],
    key: &T,
    mut cmp: impl FnMut(&T, &T) -> Ordering,
) -> usize {
    // Half-open candidate range `[lo, hi)`.
    let mut lo = 0;
    let mut hi = s.len();

    while lo < hi {
        // Compute `lo + hi` / 2 without overflow.
        let mid = lo + (hi - lo) / 2;

        match cmp(&s[mid], key) {
            Ordering::Equal => return mid,
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    s.len()
}

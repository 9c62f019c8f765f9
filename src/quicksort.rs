//! Quicksort with a midpoint pivot and a Hoare partition.

use std::cmp::Ordering;
use std::mem;

pub fn quicksort<T: Ord>(v: &mut [T]) {
    quicksort_by(v, Ord::cmp)
}

/// Sorts `v` with quicksort, taking the element at the midpoint of each range as the pivot.
///
/// Recursion always descends into the smaller partition and loops on the larger one, so stack
/// depth stays logarithmic in `v.len()` even when the pivot is a poor splitter. The midpoint is
/// only a deterministic anchor, not a median estimate, so some inputs take quadratic time.
///
/// Not stable.
pub fn quicksort_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    recurse(v, &mut cmp);
}

fn recurse<T>(mut v: &mut [T], cmp: &mut impl FnMut(&T, &T) -> Ordering) {
    while v.len() > 1 {
        let (left_end, right_start) = match partition(v, cmp) {
            Some(bounds) => bounds,
            // Only possible if `cmp` is not a total preorder.
            None => return,
        };

        let (left, rest) = mem::take(&mut v).split_at_mut(left_end);
        let right = &mut rest[right_start - left_end..];

        if left.len() < right.len() {
            recurse(left, cmp);
            v = right;
        } else {
            recurse(right, cmp);
            v = left;
        }
    }
}

/// Partitions `v` around the value of its midpoint element.
///
/// Returns `(left_end, right_start)` such that `v[..left_end]` holds nothing greater than the
/// pivot, `v[right_start..]` holds nothing less than it, and `left_end <= right_start`. Anything
/// in between equals the pivot and is already in its final place.
///
/// Returns `None` if no swap was performed. With a valid comparator the first pass always swaps,
/// since the pivot stops both scans, so this only happens when `cmp(pivot, pivot)` is not
/// `Equal`. Bailing out keeps the caller from looping forever on a range that never shrinks.
fn partition<T>(
    v: &mut [T],
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> Option<(usize, usize)> {
    let len = v.len();

    // Index of the pivot. A swap can move it, so it is followed rather than copied out, and
    // every comparison sees the element that actually lives in `v`.
    let mut pivot = (len - 1) / 2;

    // `lo` is the left cursor. `hi` is one past the right cursor, which keeps it from going
    // below zero when the right cursor runs off the front.
    let mut lo = 0;
    let mut hi = len;
    let mut swapped = false;

    while lo < hi {
        while lo < len && cmp(&v[lo], &v[pivot]).is_lt() {
            lo += 1;
        }
        while hi > 0 && cmp(&v[hi - 1], &v[pivot]).is_gt() {
            hi -= 1;
        }

        if lo < hi {
            v.swap(lo, hi - 1);
            if pivot == lo {
                pivot = hi - 1;
            } else if pivot == hi - 1 {
                pivot = lo;
            }

            lo += 1;
            hi -= 1;
            swapped = true;
        }
    }

    swapped.then_some((hi, lo))
}

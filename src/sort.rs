//! A common entry point for every comparison sort.

use crate::{heapsort, quadratic_sort, quicksort};
use std::cmp::Ordering;
use std::fmt;

/// One of the in-place comparison sorts in this crate.
///
/// Every algorithm sorts in ascending order according to the comparator, never allocates, and
/// leaves slices of length 0 or 1 untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`bubble_sort_by`](crate::bubble_sort_by).
    Bubble,
    /// [`selection_sort_by`](crate::selection_sort_by).
    Selection,
    /// [`insertion_sort_by`](crate::insertion_sort_by).
    Insertion,
    /// [`shell_sort_by`](crate::shell_sort_by).
    Shell,
    /// [`quicksort_by`](crate::quicksort_by).
    Quick,
    /// [`heapsort_by`](crate::heapsort_by).
    Heap,
}

impl Algorithm {
    /// Every algorithm, in roughly increasing order of sophistication.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// A short lowercase name, also used by `Display`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Shell => "shell",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
        }
    }

    /// Returns `true` if equal elements always keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Bubble | Algorithm::Insertion)
    }

    /// Sorts `v` in ascending order with this algorithm.
    pub fn sort<T: Ord>(self, v: &mut [T]) {
        self.sort_by(v, Ord::cmp)
    }

    /// Sorts `v` with this algorithm according to `cmp`.
    pub fn sort_by<T>(self, v: &mut [T], cmp: impl FnMut(&T, &T) -> Ordering) {
        match self {
            Algorithm::Bubble => quadratic_sort::bubble_sort_by(v, cmp),
            Algorithm::Selection => quadratic_sort::selection_sort_by(v, cmp),
            Algorithm::Insertion => quadratic_sort::insertion_sort_by(v, cmp),
            Algorithm::Shell => quadratic_sort::shell_sort_by(v, cmp),
            Algorithm::Quick => quicksort::quicksort_by(v, cmp),
            Algorithm::Heap => heapsort::heapsort_by(v, cmp),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

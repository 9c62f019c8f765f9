//! Comparison-driven sorting and searching over mutable slices.
//!
//! Every algorithm comes in two forms: one bounded on `T: Ord`, and a `_by` form taking a
//! three-way comparator `FnMut(&T, &T) -> Ordering`. The comparator must impose a total preorder.
//! If it doesn't, the output order is unspecified, but the slice is still a permutation of the
//! input.
//!
//! Counting sort is the exception: it works only on fixed-width signed integers and takes an
//! [`Order`] instead of a comparator.

#![cfg_attr(not(test), no_std)]

#[cfg(not(test))]
extern crate core as std;

extern crate alloc;

#[cfg(test)]
#[macro_use]
mod test_utils;

mod counting_sort;
mod error;
mod heapsort;
mod quadratic_sort;
mod quicksort;
mod search;
mod sort;

pub use counting_sort::{counting_sort, CountingKey, Order};
pub use error::Error;
pub use heapsort::{heapsort, heapsort_by};
pub use quadratic_sort::{
    bubble_sort, bubble_sort_by, insertion_sort, insertion_sort_by, selection_sort,
    selection_sort_by, shell_sort, shell_sort_by,
};
pub use quicksort::{quicksort, quicksort_by};
pub use search::{binary_search, binary_search_by, linear_search, linear_search_by};
pub use sort::Algorithm;

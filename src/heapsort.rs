//! Heap sort over an implicit binary max-heap.

use contracts::*;
use std::cmp::Ordering;

pub fn heapsort<T: Ord>(v: &mut [T]) {
    heapsort_by(v, Ord::cmp)
}

/// Sorts `v` by building a max-heap in place and repeatedly moving its root behind the heap.
///
/// Not stable.
pub fn heapsort_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    let len = v.len();
    if len <= 1 {
        return;
    }

    // Build the heap bottom-up, starting from the last node with a child.
    for node in (0..len / 2).rev() {
        sift_down(v, node, &mut cmp);
    }

    // `v[..end]` is a heap, `v[end..]` is sorted and holds the largest elements.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, &mut cmp);
    }
}

/// Moves `v[node]` down the heap until neither of its children is greater than it.
///
/// The subtrees below `node` must already be heaps.
#[debug_requires(node < v.len())]
fn sift_down<T>(v: &mut [T], mut node: usize, cmp: &mut impl FnMut(&T, &T) -> Ordering) {
    let len = v.len();

    loop {
        let mut largest = node;
        let left = 2 * node + 1;
        let right = left + 1;

        if left < len && cmp(&v[left], &v[largest]).is_gt() {
            largest = left;
        }
        if right < len && cmp(&v[right], &v[largest]).is_gt() {
            largest = right;
        }

        if largest == node {
            return;
        }

        v.swap(node, largest);
        node = largest;
    }
}

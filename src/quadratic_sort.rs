//! In-place sorting algorithms that take quadratic time.
//!
//! Shell sort lives here too. Its running time depends on the gap sequence, and with the halving
//! sequence used here the worst case is still quadratic.

use std::cmp::Ordering;

pub fn bubble_sort<T: Ord>(v: &mut [T]) {
    bubble_sort_by(v, Ord::cmp)
}

/// Sorts `v` by repeatedly swapping adjacent out-of-order pairs.
///
/// Each pass moves the largest remaining element to the end of the unsorted prefix, so the next
/// pass can stop one element earlier. A pass without swaps means the prefix is already sorted.
///
/// Stable.
pub fn bubble_sort_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    let mut unsorted = v.len();
    let mut swapped = unsorted > 1;

    while swapped {
        swapped = false;
        for i in 1..unsorted {
            if cmp(&v[i - 1], &v[i]).is_gt() {
                v.swap(i - 1, i);
                swapped = true;
            }
        }
        unsorted -= 1;
    }
}

pub fn selection_sort<T: Ord>(v: &mut [T]) {
    selection_sort_by(v, Ord::cmp)
}

/// Sorts `v` by swapping the minimum of each suffix into place.
///
/// The first of several equal minima is selected, but the swap that moves it can carry another
/// element past its equals, so this sort is not stable.
pub fn selection_sort_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    let len = v.len();
    if len <= 1 {
        return;
    }

    for i in 0..len - 1 {
        let mut min = i;
        for j in i + 1..len {
            if cmp(&v[j], &v[min]).is_lt() {
                min = j;
            }
        }

        if min != i {
            v.swap(i, min);
        }
    }
}

pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    insertion_sort_by(v, Ord::cmp)
}

/// Sorts `v` by shifting each element left past every greater element before it.
///
/// Linear on already-sorted input. Stable: an element never moves past an equal one.
pub fn insertion_sort_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    for i in 1..v.len() {
        hole::shift_tail(v, i, 1, &mut cmp);
    }
}

pub fn shell_sort<T: Ord>(v: &mut [T]) {
    shell_sort_by(v, Ord::cmp)
}

/// Sorts `v` with gapped insertion sorts, halving the gap from `len / 2` down to 1.
///
/// The final pass is a plain insertion sort, so the result is sorted whatever gaps come before
/// it. Not stable.
pub fn shell_sort_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    let len = v.len();
    let mut gap = len / 2;

    while gap > 0 {
        for i in gap..len {
            hole::shift_tail(v, i, gap, &mut cmp);
        }
        gap /= 2;
    }
}

/// Moving a single element through a slice by leaving a "hole" behind it.
///
/// Adapted from the insertion step of the standard library's sort.
mod hole {
    use contracts::*;
    use std::cmp::Ordering;
    use std::mem::ManuallyDrop;
    use std::ptr;

    /// When dropped, copies from `src` into `dest`.
    struct CopyOnDrop<T> {
        src: *const T,
        dest: *mut T,
    }

    impl<T> Drop for CopyOnDrop<T> {
        fn drop(&mut self) {
            // SAFETY: `shift_tail` only builds this with `src` pointing at its stack copy and
            //         `dest` at the open hole in the slice, which never overlap.
            unsafe {
                ptr::copy_nonoverlapping(self.src, self.dest, 1);
            }
        }
    }

    /// Shifts `v[i]` left in steps of `gap` until the element `gap` places before it is not
    /// greater than it.
    ///
    /// If the elements at `i % gap, i % gap + gap, .., i - gap` were sorted, then after this call
    /// the elements at `i % gap, .., i` are sorted.
    #[debug_requires(gap > 0)]
    #[debug_requires(i < v.len())]
    pub fn shift_tail<T>(
        v: &mut [T],
        i: usize,
        gap: usize,
        cmp: &mut impl FnMut(&T, &T) -> Ordering,
    ) {
        if i < gap || !cmp(&v[i - gap], &v[i]).is_gt() {
            return;
        }

        let base = v.as_mut_ptr();

        // SAFETY: Every index we touch is `i` or `i - k * gap` for some `k` with `k * gap <= i`,
        // so all of them lie in `0..v.len()`, and since `gap > 0` any two of them are distinct,
        // which makes each `copy_nonoverlapping` sound.
        //
        // `tmp` is a bitwise copy of `v[i]` that we never drop. From the first copy onwards, the
        // slice holds one duplicate and one hole. `hole` always points at that hole, and when it
        // is dropped (at the end of this block, or during unwinding if `cmp` panics) it writes
        // `tmp` into it, so `v` is a permutation of its original contents again.
        unsafe {
            let tmp = ManuallyDrop::new(ptr::read(base.add(i)));
            let mut hole = CopyOnDrop {
                src: &*tmp,
                dest: base.add(i - gap),
            };
            ptr::copy_nonoverlapping(base.add(i - gap), base.add(i), 1);

            let mut j = i - gap;
            while j >= gap {
                if !cmp(&*base.add(j - gap), &*tmp).is_gt() {
                    break;
                }

                // Move the greater element one gap to the right, shifting the hole to the left.
                ptr::copy_nonoverlapping(base.add(j - gap), base.add(j), 1);
                j -= gap;
                hole.dest = base.add(j);
            }
            // `hole` gets dropped and thus copies `tmp` into the remaining hole in `v`.
        }
    }
}

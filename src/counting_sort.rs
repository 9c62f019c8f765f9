//! Counting sort for fixed-width signed integers.

use crate::Error;
use alloc::vec::Vec;
use static_assertions::const_assert;
use std::mem::size_of;

// Every key widens losslessly into an `i64`.
const_assert!(size_of::<isize>() <= size_of::<i64>());

/// The arrangement produced by [`counting_sort`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

mod private {
    pub trait Sealed {}
}

/// A fixed-width signed integer that [`counting_sort`] can sort.
///
/// This trait is sealed. It is implemented for `i8`, `i16`, `i32`, `i64` and `isize`.
pub trait CountingKey: Copy + Ord + private::Sealed {
    /// Widens `self` losslessly into an `i64`.
    fn to_i64(self) -> i64;
}

macro_rules! impl_counting_key {
    ($($t:ty),*) => {$(
        impl private::Sealed for $t {}

        impl CountingKey for $t {
            #[inline]
            fn to_i64(self) -> i64 {
                self as i64
            }
        }
    )*};
}

impl_counting_key!(i8, i16, i32, i64, isize);

/// Sorts `v` in place by counting occurrences of each value.
///
/// Takes `O(n + k)` time and space, where `k = max - min + 1` is the width of the value range
/// found in `v`. The counting table has one slot per value in that range, so a sparse input with
/// a wide spread is expensive. Bounding the range is up to the caller.
///
/// [`Order::Descending`] runs the same placement pass as ascending order, front to back instead
/// of back to front, and then reverses the output.
///
/// # Errors
///
/// Fails without touching `v` if the range needs more slots than fit in a `usize`, or if the
/// counting table or output buffer cannot be reserved.
pub fn counting_sort<T: CountingKey>(v: &mut [T], order: Order) -> Result<(), Error> {
    let (min, max) = match min_max(v) {
        Some(bounds) => bounds,
        None => return Ok(()),
    };

    let (lo, hi) = (min.to_i64(), max.to_i64());
    let range = match usize::try_from(i128::from(hi) - i128::from(lo) + 1) {
        Ok(range) => range,
        Err(_) => {
            let err = Error::RangeTooLarge { min: lo, max: hi };
            log::debug!("counting sort: {}", err);
            return Err(err);
        }
    };

    log::trace!(
        "counting sort: {} elements in [{}, {}], {} slots",
        v.len(),
        lo,
        hi,
        range
    );

    let mut counts = zeroed_table(range)?;
    let mut output = scratch_copy(v.len(), min)?;

    for &x in v.iter() {
        counts[slot(x.to_i64(), lo)] += 1;
    }

    // `counts[i]` becomes the number of elements less than or equal to `lo + i`.
    for i in 1..range {
        counts[i] += counts[i - 1];
    }

    let mut place = |x: T| {
        let s = slot(x.to_i64(), lo);
        counts[s] -= 1;
        output[counts[s]] = x;
    };

    match order {
        Order::Ascending => v.iter().rev().for_each(|&x| place(x)),
        Order::Descending => {
            v.iter().for_each(|&x| place(x));
            output.reverse();
        }
    }

    v.copy_from_slice(&output);
    Ok(())
}

fn min_max<T: CountingKey>(v: &[T]) -> Option<(T, T)> {
    let (&first, rest) = v.split_first()?;
    Some(rest.iter().fold((first, first), |(min, max), &x| {
        (min.min(x), max.max(x))
    }))
}

/// The offset of `x` from `lo` in the counting table.
///
/// `x` lies in `[lo, hi]` and `hi - lo + 1` fits in a `usize`, so the cast is lossless. The
/// subtraction is done in `i128` since `hi - lo` can overflow an `i64`.
#[inline]
fn slot(x: i64, lo: i64) -> usize {
    (i128::from(x) - i128::from(lo)) as usize
}

fn zeroed_table(len: usize) -> Result<Vec<usize>, Error> {
    let mut table = Vec::new();
    reserve(&mut table, len)?;
    table.resize(len, 0);
    Ok(table)
}

fn scratch_copy<T: Copy>(len: usize, fill: T) -> Result<Vec<T>, Error> {
    let mut buf = Vec::new();
    reserve(&mut buf, len)?;
    buf.resize(len, fill);
    Ok(buf)
}

fn reserve<T>(buf: &mut Vec<T>, len: usize) -> Result<(), Error> {
    buf.try_reserve_exact(len).map_err(|source| {
        log::debug!("counting sort: failed to reserve {} slots: {}", len, source);
        Error::Alloc { len, source }
    })
}

use proptest::prelude::*;
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

#[cfg(test)]
macro_rules! prop_unwrap {
    ($e:expr) => {
        match $e {
            Err(::proptest::prelude::TestCaseError::Reject(s)) => {
                panic!("Helper function rejected input: {}", s)
            }
            Err(::proptest::prelude::TestCaseError::Fail(s)) => panic!("{}", s),
            Ok(x) => x,
        }
    };
}

pub fn is_sorted_by<T>(s: &[T], cmp: &mut impl FnMut(&T, &T) -> Ordering) -> bool {
    s.windows(2).all(|pair| cmp(&pair[0], &pair[1]).is_le())
}

pub fn is_sorted<T: Ord>(s: &[T]) -> bool {
    is_sorted_by(s, &mut Ord::cmp)
}

pub fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    v.sort_unstable();
    v
}

/// Input shapes that stress pivot selection and early-exit paths.
#[derive(Clone, Copy, Debug)]
pub enum Pattern {
    Ascending,
    Descending,
    AllEqual,
    /// Repeating ascending runs of the given length.
    Sawtooth(usize),
    /// Ascending first half, descending second half.
    Organ,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Ascending,
        Pattern::Descending,
        Pattern::AllEqual,
        Pattern::Sawtooth(7),
        Pattern::Sawtooth(64),
        Pattern::Organ,
    ];

    pub fn generate(self, len: usize) -> Vec<i32> {
        let len_i = len as i32;
        (0..len_i)
            .map(|i| match self {
                Pattern::Ascending => i,
                Pattern::Descending => len_i - i,
                Pattern::AllEqual => 42,
                Pattern::Sawtooth(run) => i % run as i32,
                Pattern::Organ if i < len_i / 2 => i,
                Pattern::Organ => len_i - i,
            })
            .collect()
    }
}

/// An element coupled with its index in some container.
///
/// Used to test the stability of sorting algorithms.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyAndIndex<T> {
    pub key: T,
    pub idx: u32, // `u32` cuts the amount of memory required in half on 64-bit systems.
}

impl<T: fmt::Debug> fmt::Debug for KeyAndIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn to_string_subscript(mut i: usize) -> String {
            if i == 0 {
                return "₀".to_owned();
            }

            let mut ret = Vec::new();
            while i != 0 {
                let digit = i % 10;
                ret.push(char::from_u32('₀' as u32 + digit as u32).unwrap());
                i /= 10;
            }

            ret.into_iter().rev().collect()
        }

        if self.idx == u32::MAX {
            return write!(f, "{:?}", self.key);
        }

        let sub = to_string_subscript(self.idx as usize);
        write!(f, "{:?}{}", self.key, sub)
    }
}

impl<T> KeyAndIndex<T> {
    pub fn new(key: T, idx: usize) -> Self {
        let idx = idx.try_into().expect("Index overflowed a u32");
        KeyAndIndex { key, idx }
    }

    pub fn without_index(key: T) -> Self {
        KeyAndIndex { key, idx: u32::MAX }
    }

    pub fn map_vec(v: Vec<T>) -> Vec<KeyAndIndex<T>> {
        v.into_iter()
            .enumerate()
            .map(|(idx, key)| KeyAndIndex::new(key, idx))
            .collect()
    }
}

pub fn cmp_ignore_idx<T: Ord>(a: &KeyAndIndex<T>, b: &KeyAndIndex<T>) -> Ordering {
    a.key.cmp(&b.key)
}

/// Strategy for vectors of small keys, so that equal elements are common.
pub fn keys(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        proptest::collection::vec(0u8..4, len.clone()),
        proptest::collection::vec(0u8..32, len.clone()),
        proptest::collection::vec(any::<u8>(), len),
    ]
}

/// An element that counts how many of its kind are alive.
///
/// Sorting a slice of these and then dropping it must bring the count back to zero. A sort that
/// duplicates or leaks an element (including on a comparator panic) breaks that.
#[derive(Debug)]
pub struct Tracked {
    pub key: u32,
    live: Rc<Cell<isize>>,
}

impl Tracked {
    pub fn new(key: u32, live: &Rc<Cell<isize>>) -> Self {
        live.set(live.get() + 1);
        Tracked {
            key,
            live: Rc::clone(live),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

/// Returns a comparator on `Tracked` keys that panics once it has been called `limit` times.
pub fn panic_after(limit: usize) -> impl FnMut(&Tracked, &Tracked) -> Ordering {
    let mut calls = 0;
    move |a, b| {
        calls += 1;
        if calls > limit {
            panic!("comparator budget exhausted");
        }
        a.key.cmp(&b.key)
    }
}

//! Error types for the `sortkit` crate

use alloc::collections::TryReserveError;

/// Errors that can occur while sorting.
///
/// Only [`crate::counting_sort`] can fail. The comparison sorts keep their scratch element on the
/// stack and never allocate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The observed value range needs more counting slots than this platform can address.
    #[error("counting table for values in [{min}, {max}] does not fit in the address space")]
    RangeTooLarge {
        /// Smallest value in the input.
        min: i64,
        /// Largest value in the input.
        max: i64,
    },

    /// Reserving transient scratch storage failed.
    #[error("failed to reserve scratch storage for {len} elements: {source}")]
    Alloc {
        /// Number of elements that were requested.
        len: usize,
        #[source]
        source: TryReserveError,
    },
}

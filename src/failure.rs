//! The Failure and Result types of this library.
//!
//! Two families of failures are distinguished:
//!
//! -   Logical failures, `OutOfRange` and `EmptyContainer`, signalled by checked accessors to their immediate caller.
//! -   Allocation failures, `BytesOverflow`, `ElementsOverflow` and `OutOfMemory`, signalled by any method which
//!     attempts to allocate memory.
//!
//! All allocating methods come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.

use super::root::result;

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, thiserror::Error)]
pub enum Failure {
    /// The index is not within the live elements of the array.
    #[error("index {index} is out of range for length {length}")]
    OutOfRange {
        /// The index requested.
        index: usize,
        /// The length of the array at the time of the request.
        length: usize,
    },
    /// The array holds no element.
    #[error("the array is empty")]
    EmptyContainer,
    /// The number of bytes to allocate cannot be represented.
    #[error("the number of bytes to allocate overflows")]
    BytesOverflow,
    /// The number of elements cannot be calculated due to overflowing.
    #[error("the number of elements overflows")]
    ElementsOverflow,
    /// The allocator could not allocate memory.
    #[error("the allocator could not allocate memory")]
    OutOfMemory,
}

impl Failure {
    /// Returns whether the failure stems from allocating memory, rather than from a logical error.
    ///
    /// #   Example
    ///
    /// ```
    /// use dynamic_array::failure::Failure;
    ///
    /// assert!(Failure::OutOfMemory.is_allocation_failure());
    /// assert!(!Failure::EmptyContainer.is_allocation_failure());
    /// ```
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Failure::BytesOverflow | Failure::ElementsOverflow | Failure::OutOfMemory)
    }
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn failure_display() {
        assert_eq!("the array is empty", format!("{}", Failure::EmptyContainer));
        assert_eq!(
            "index 3 is out of range for length 0",
            format!("{}", Failure::OutOfRange { index: 3, length: 0 })
        );
    }

    #[test]
    fn failure_allocation() {
        assert!(Failure::BytesOverflow.is_allocation_failure());
        assert!(Failure::ElementsOverflow.is_allocation_failure());
        assert!(Failure::OutOfMemory.is_allocation_failure());

        assert!(!Failure::OutOfRange { index: 0, length: 0 }.is_allocation_failure());
        assert!(!Failure::EmptyContainer.is_allocation_failure());
    }

    #[cfg(feature = "with-std")]
    #[test]
    fn failure_error() {
        fn source_of<E: std::error::Error>(error: &E) -> bool { error.source().is_some() }

        assert!(!source_of(&Failure::OutOfMemory));
    }
}

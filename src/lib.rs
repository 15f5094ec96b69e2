#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Dynamic Array Library
//!
//! A growable, contiguous, generic array: the `DynamicArray`.
//!
//! -   Capacity grows geometrically, doubling whenever an append finds the array full.
//! -   Elements live in a single exclusively owned buffer, allocated to the exact capacity requested.
//! -   Checked accessors report a `Failure` rather than panicking, allocating methods come in a faillible `try_xxx`
//!     version and a panicking `xxx` version.
//!
//! ```
//! use dynamic_array::dynamic_array;
//!
//! let mut array = dynamic_array![5, 2, 8, 1, 9];
//! array.sort();
//!
//! assert_eq!(array, [1, 2, 5, 8, 9]);
//! assert_eq!("1 2 5 8 9 ", array.to_string());
//! ```

extern crate alloc as alloc_crate;

pub mod array;
pub mod failure;

mod allocator;
mod utils;

use self::utils::raw;
use self::utils::root;

/// Creates a `DynamicArray`, in the manner of `vec!`.
///
/// -   `dynamic_array![]` creates an empty array.
/// -   `dynamic_array![a, b, c]` creates an array from a list of elements, with exactly as much capacity.
/// -   `dynamic_array![value; n]` creates an array of `n` clones of `value`, with exactly `n` capacity.
///
/// ```
/// use dynamic_array::dynamic_array;
/// use dynamic_array::array::DynamicArray;
///
/// let empty: DynamicArray<i32> = dynamic_array![];
/// assert!(empty.is_empty());
///
/// let list = dynamic_array![1, 2, 3];
/// assert_eq!(3, list.capacity());
///
/// let filled = dynamic_array!["x"; 4];
/// assert_eq!(filled, ["x", "x", "x", "x"]);
/// ```
#[macro_export]
macro_rules! dynamic_array {
    () => {
        $crate::array::DynamicArray::new()
    };
    ($value:expr; $n:expr) => {
        $crate::array::DynamicArray::from_elem($value, $n)
    };
    ($($element:expr),+ $(,)?) => {
        <$crate::array::DynamicArray<_>>::from([$($element),+])
    };
}

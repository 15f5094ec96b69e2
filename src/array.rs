//! #   The DynamicArray.
//!
//! The `DynamicArray` is a growable, contiguous, array of elements exclusively owned by the array.
//!
//! ##  Under the covers.
//!
//! Under the covers the `DynamicArray` is a single buffer of `capacity` slots, of which the first `length` hold live
//! elements, and the others are uninitialized.
//!
//! The main consequences are:
//!
//! -   The elements are contiguous, and can be viewed as a slice at any time.
//! -   Appending to a full array reallocates the buffer, doubling its capacity, and moves every element into the new
//!     buffer: references, and cursors, are invalidated.
//! -   Explicit reservations, and resizes, allocate exactly the requested capacity, without rounding.
//!
//! #   Example: basic
//!
//! General usage of `DynamicArray` involves appending elements, either using `push`, to append one element at a
//! time, or `extend`, to append multiple elements at once.
//!
//! The faillible equivalent exist too: `try_push` and `try_extend` will return a `Result` indicating whether the
//! operation succeeded, and the cause of its failure if it did not.
//!
//! ```
//! use dynamic_array::array::DynamicArray;
//!
//! let mut array: DynamicArray<_> = DynamicArray::new();
//! array.push(1);
//! array.push(2);
//!
//! assert_eq!(2, array.len());
//! assert_eq!(2, array.capacity());
//! assert_eq!(1, array[0]);
//!
//! array.extend([3, 4, 5]);
//!
//! assert_eq!(5, array.len());
//! assert_eq!(4, array[3]);
//!
//! for x in &array {
//!     println!("{}", x);
//! }
//! ```
//!
//! #   Example: accessing elements
//!
//! `DynamicArray` provides multiple ways to access elements:
//!
//! -   The `at` and `at_mut` methods allow checked scalar access, reporting a `Failure` on out of range access.
//! -   The `front` and `back` methods, and their mutable equivalents, allow checked access to either end.
//! -   Indexing, and all other slice operations, are available through `Deref<Target = [T]>`; indexing panics on out
//!     of range access while the `unsafe` `get_unchecked` performs no check.
//!
//! ```
//! use dynamic_array::dynamic_array;
//! use dynamic_array::failure::Failure;
//!
//! let mut array = dynamic_array![1, 2, 3, 4, 5];
//!
//! assert_eq!(Ok(&1), array.at(0));
//! assert_eq!(Err(Failure::OutOfRange { index: 5, length: 5 }), array.at(5));
//!
//! assert_eq!(Ok(&5), array.back());
//! *array.front_mut().unwrap() = 0;
//!
//! assert_eq!(3, array[2]);
//! array[2] = 9;
//!
//! assert_eq!(4, unsafe { *array.get_unchecked(3) });
//! assert_eq!(array, [0, 2, 9, 4, 5]);
//! ```
//!
//! #   Example: cursors
//!
//! Random-access cursors designate positions within `[begin, end]`, and can be used to traverse the array in the
//! manner of indices.
//!
//! ```
//! use dynamic_array::dynamic_array;
//!
//! let array = dynamic_array![5, 2, 8, 1, 9];
//!
//! let mut cursor = array.begin();
//!
//! while cursor != array.end() && *cursor != 8 {
//!     cursor.increment();
//! }
//!
//! assert_eq!(2, cursor.position());
//! assert_eq!(3, array.end() - cursor);
//! ```

mod array;
mod buffer;
mod cursor;
mod display;
mod growth;
mod hooks;
mod iterator;

pub use self::array::DynamicArray;
pub use self::cursor::{Cursor, CursorMut};
pub use self::display::write_elements;
pub use self::hooks::{ArrayEvent, ArrayHooks, DefaultArrayHooks, TracingArrayHooks};
pub use self::iterator::{IntoIter, Iter, IterMut};

#[cfg(feature = "with-std")]
pub use self::display::write_elements_io;

use super::allocator;
use super::failure;
use super::raw;
use super::root;

//! The DynamicArray growth policy.
//!
//! Apart from the policy itself, assembles the computations relating a capacity, in elements, to the layout of the
//! buffer backing it.

use super::allocator::Layout;
use super::failure::{Failure, Result};
use super::root::{cmp, mem};

//  Returns the capacity to grow to when appending to a full array of `capacity`.
//
//  The capacity doubles, starting from 1, to guarantee amortized O(1) appends.
//
//  #   Fails
//
//  -   If doubling overflows.
pub fn grown(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Ok(1);
    }

    capacity.checked_mul(2).ok_or(Failure::ElementsOverflow)
}

//  Returns the capacity necessary to hold `length + extra` elements.
//
//  #   Fails
//
//  -   If the addition overflows.
pub fn required(length: usize, extra: usize) -> Result<usize> {
    length.checked_add(extra).ok_or(Failure::ElementsOverflow)
}

//  Returns the capacity to reserve to append `extra` elements to an array of `length` elements and `capacity`.
//
//  Follows the doubling sequence, unless `extra` requires jumping further ahead.
pub fn amortized(length: usize, capacity: usize, extra: usize) -> Result<usize> {
    let required = required(length, extra)?;

    if required <= capacity {
        return Ok(capacity);
    }

    //  Doubling may overflow where the required capacity does not, in which case it is not worth failing.
    let doubled = grown(capacity).unwrap_or(required);

    Ok(cmp::max(required, doubled))
}

//  Returns the maximum number of elements of type T an array can hold.
pub fn max_capacity<T>() -> usize {
    match mem::size_of::<T>() {
        0 => usize::MAX,
        size => isize::MAX as usize / size,
    }
}

//  Computes the layout of a buffer of `capacity` elements.
//
//  The layout may be zero-sized, either because `capacity` is 0 or because `T` is zero-sized.
//
//  #   Fails
//
//  -   If the necessary size overflows, or exceeds `isize::MAX`.
pub fn layout<T>(capacity: usize) -> Result<Layout> {
    Layout::array::<T>(capacity).map_err(|_| Failure::BytesOverflow)
}

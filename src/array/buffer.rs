//! The owned buffer of the DynamicArray.
//!
//! All raw memory manipulations of the DynamicArray are confined to this module:
//!
//! -   Allocating a buffer of exactly the requested capacity, and releasing it.
//! -   Transferring elements from one buffer to another.
//! -   Constructing, and dropping, a range of elements.
//!
//! The buffer does not track which of its slots are initialized: the length is owned by its user, and passed in.

use super::root::{hint, iter, marker, mem, ptr, slice};

use super::allocator::Allocator;
use super::failure::{Failure, Result};
use super::growth;
use super::raw::Raw;

//  An exclusively owned buffer of `capacity` slots.
//
//  Invariants:
//  -   If `capacity` is 0, no memory is allocated.
//  -   If `T` is zero-sized, no memory is ever allocated, whatever the capacity.
pub struct RawBuffer<T> {
    pointer: ptr::NonNull<Raw<T>>,
    capacity: usize,
    _marker: marker::PhantomData<T>,
}

impl<T> RawBuffer<T> {
    //  Creates an empty buffer, without allocating.
    pub const fn empty() -> Self {
        Self { pointer: ptr::NonNull::dangling(), capacity: 0, _marker: marker::PhantomData }
    }

    //  Allocates a buffer of exactly `capacity` slots.
    //
    //  #   Fails
    //
    //  -   If the size of the buffer, in bytes, overflows.
    //  -   If the allocator fails to allocate.
    pub fn allocate<A: Allocator>(capacity: usize, allocator: &A) -> Result<Self> {
        if capacity == 0 {
            return Ok(Self::empty());
        }

        let layout = growth::layout::<T>(capacity)?;

        if layout.size() == 0 {
            return Ok(Self { pointer: ptr::NonNull::dangling(), capacity, _marker: marker::PhantomData });
        }

        //  Safety:
        //  -   The size of the layout is non-zero.
        let pointer = unsafe { allocator.allocate(layout) };

        let pointer = ptr::NonNull::new(pointer as *mut Raw<T>).ok_or(Failure::OutOfMemory)?;

        Ok(Self { pointer, capacity, _marker: marker::PhantomData })
    }

    //  Returns the number of slots.
    pub fn capacity(&self) -> usize { self.capacity }

    //  Returns a pointer to the first slot.
    //
    //  The pointer is dangling, yet well-aligned, if nothing is allocated.
    pub fn as_ptr(&self) -> *const T { self.pointer.as_ptr() as *const T }

    //  Returns a mutable pointer to the first slot.
    //
    //  The pointer is dangling, yet well-aligned, if nothing is allocated.
    pub fn as_mut_ptr(&mut self) -> *mut T { self.pointer.as_ptr() as *mut T }

    //  Returns a slice of the first `length` elements.
    //
    //  #   Safety
    //
    //  -   Assumes that the first `length` elements are initialized.
    pub unsafe fn slice(&self, length: usize) -> &[T] {
        //  Safety:
        //  -   Forwarding pre-conditions.
        unsafe { self.range(0, length) }
    }

    //  Returns a mutable slice of the first `length` elements.
    //
    //  #   Safety
    //
    //  -   Assumes that the first `length` elements are initialized.
    pub unsafe fn slice_mut(&mut self, length: usize) -> &mut [T] {
        //  Safety:
        //  -   Forwarding pre-conditions.
        unsafe { self.range_mut(0, length) }
    }

    //  Returns a slice of the elements `[from, to)`.
    //
    //  #   Safety
    //
    //  -   Assumes that `from <= to`.
    //  -   Assumes that the elements `[from, to)` are initialized.
    pub unsafe fn range(&self, from: usize, to: usize) -> &[T] {
        debug_assert!(from <= to);
        debug_assert!(to <= self.capacity);

        //  Safety:
        //  -   The pointer is non-null and aligned, even when dangling.
        //  -   The elements `[from, to)` are assumed to be initialized.
        unsafe { slice::from_raw_parts(self.as_ptr().add(from), to - from) }
    }

    //  Returns a mutable slice of the elements `[from, to)`.
    //
    //  #   Safety
    //
    //  -   Assumes that `from <= to`.
    //  -   Assumes that the elements `[from, to)` are initialized.
    pub unsafe fn range_mut(&mut self, from: usize, to: usize) -> &mut [T] {
        debug_assert!(from <= to);
        debug_assert!(to <= self.capacity);

        //  Safety:
        //  -   The pointer is non-null and aligned, even when dangling.
        //  -   The elements `[from, to)` are assumed to be initialized.
        //  -   Exclusive access, as per &mut self.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr().add(from), to - from) }
    }

    //  Moves the element at `index` out.
    //
    //  #   Safety
    //
    //  -   Assumes that the element at `index` is initialized.
    //  -   Assumes that the slot will be considered uninitialized afterwards.
    pub unsafe fn read(&self, index: usize) -> T {
        //  Safety:
        //  -   Forwarding pre-conditions.
        unsafe { self.slot(index).read() }
    }

    //  Writes `value` into the slot at `index`.
    //
    //  #   Safety
    //
    //  -   Assumes that `index` is less than the capacity.
    //
    //  #   Warning
    //
    //  Does not drop the former value, if any.
    pub unsafe fn write(&mut self, index: usize, value: T) {
        //  Safety:
        //  -   `index` is within bounds, as per pre-condition.
        unsafe { self.slot_mut(index) }.write(value);
    }

    //  Constructs the elements of slots `[*length, capacity)`, in order, taking them from `elements`.
    //
    //  Stops either when the buffer is full, or when `elements` is exhausted, whichever comes first. Returns whether
    //  `elements` was exhausted; it is not polled again once the buffer is full.
    //
    //  `*length` is incremented as each element is written, so that it always accounts exactly for the initialized
    //  elements, even if `elements` panics.
    //
    //  #   Safety
    //
    //  -   Assumes that `*length` is exactly the number of initialized elements.
    pub unsafe fn fill_from<I>(&mut self, length: &mut usize, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        debug_assert!(*length <= self.capacity);

        let mut elements = elements.into_iter();

        while *length < self.capacity {
            let Some(value) = elements.next() else { return true };

            //  Safety:
            //  -   `*length` is less than the capacity, hence within bounds.
            unsafe { self.write(*length, value) };

            *length += 1;
        }

        false
    }

    //  Constructs the elements of slots `[*length, target)`, in order, using `make`.
    //
    //  Does nothing if `target` is less than, or equal to, `*length`.
    //
    //  #   Safety
    //
    //  -   Assumes that `*length` is exactly the number of initialized elements.
    //  -   Assumes that `target` is less than, or equal to, the capacity.
    pub unsafe fn fill_to<F>(&mut self, length: &mut usize, target: usize, make: F)
    where
        F: FnMut() -> T,
    {
        debug_assert!(target <= self.capacity);

        let missing = target.saturating_sub(*length);

        //  Safety:
        //  -   Forwarding pre-conditions.
        unsafe { self.fill_from(length, iter::repeat_with(make).take(missing)) };
    }

    //  Drops the elements of slots `[target, *length)`, and sets `*length` to `target`.
    //
    //  `*length` is set prior to dropping, so that if a Drop panics the elements are not dropped twice; the remaining
    //  elements of the range are still dropped.
    //
    //  #   Safety
    //
    //  -   Assumes that `*length` is exactly the number of initialized elements.
    pub unsafe fn truncate_to(&mut self, length: &mut usize, target: usize) {
        debug_assert!(*length <= self.capacity);

        if target >= *length {
            return;
        }

        let former = *length;

        //  Pre-pooping our pants in case a Drop panics.
        *length = target;

        //  Safety:
        //  -   The elements `[target, former)` are initialized, as per pre-condition.
        //  -   They are no longer accounted for by `*length`.
        unsafe { self.drop_range(target, former) };
    }

    //  Drops the elements `[from, to)`.
    //
    //  If a Drop panics, the remaining elements of the range are still dropped.
    //
    //  #   Safety
    //
    //  -   Assumes that `from <= to`.
    //  -   Assumes that the elements `[from, to)` are initialized.
    //  -   Assumes that the elements `[from, to)` are considered uninitialized afterwards.
    pub unsafe fn drop_range(&mut self, from: usize, to: usize) {
        //  Safety:
        //  -   Forwarding pre-conditions.
        let range: *mut [T] = unsafe { self.range_mut(from, to) };

        //  Safety:
        //  -   The elements are initialized, and never dropped again, as per pre-conditions.
        unsafe { ptr::drop_in_place(range) };
    }

    //  Transfers the first `length` elements into `target`.
    //
    //  The elements are moved bitwise, without clone nor drop, and are logically uninitialized in `self` afterwards.
    //
    //  #   Safety
    //
    //  -   Assumes that the first `length` elements of `self` are initialized.
    //  -   Assumes that the first `length` slots of `target` are uninitialized.
    //  -   Assumes that `length` is less than, or equal to, the capacity of `target`.
    pub unsafe fn transfer(&mut self, target: &mut Self, length: usize) {
        debug_assert!(length <= self.capacity);
        debug_assert!(length <= target.capacity);

        //  Safety:
        //  -   Both buffers hold at least `length` slots, as per pre-conditions.
        //  -   Distinct buffers never overlap, being exclusively owned.
        unsafe { ptr::copy_nonoverlapping(self.as_ptr(), target.as_mut_ptr(), length) };
    }

    //  Replaces the buffer by a buffer of exactly `capacity` slots, transferring the first `length` elements.
    //
    //  On failure, the buffer is left untouched.
    //
    //  #   Safety
    //
    //  -   Assumes that the first `length` elements are initialized.
    //  -   Assumes that `length` is less than, or equal to, `capacity`.
    //  -   Assumes that `allocator` allocated the current buffer.
    pub unsafe fn reallocate<A: Allocator>(&mut self, length: usize, capacity: usize, allocator: &A) -> Result<()> {
        debug_assert!(length <= capacity);

        let mut buffer = Self::allocate(capacity, allocator)?;

        //  Safety:
        //  -   `buffer` is freshly allocated, with `capacity` slots.
        unsafe { self.transfer(&mut buffer, length) };

        let mut former = mem::replace(self, buffer);

        //  Safety:
        //  -   No element is left in `former`, all were transferred.
        //  -   `allocator` allocated `former`, as per pre-condition.
        unsafe { former.release(allocator) };

        Ok(())
    }

    //  Releases the memory, leaving an empty buffer behind.
    //
    //  #   Safety
    //
    //  -   Assumes that no element is initialized, either because they were dropped or transferred.
    //  -   Assumes that `allocator` allocated the buffer.
    pub unsafe fn release<A: Allocator>(&mut self, allocator: &A) {
        let former = mem::replace(self, Self::empty());

        if former.capacity == 0 {
            return;
        }

        let layout = match growth::layout::<T>(former.capacity) {
            Ok(layout) => layout,
            Err(_) => {
                //  Safety:
                //  -   Cannot error, it succeeded during the allocation.
                debug_assert!(false, "{} succeeded in allocation!", former.capacity);
                unsafe { hint::unreachable_unchecked() }
            },
        };

        if layout.size() == 0 {
            return;
        }

        //  Safety:
        //  -   The pointer matches the pointer of the allocation.
        //  -   The layout matches the layout of the allocation.
        unsafe { allocator.deallocate(former.pointer.as_ptr() as *mut u8, layout) };
    }

    //  Gets a reference to the slot at index.
    //
    //  #   Safety
    //
    //  -   Assumes that `index` is less than the capacity.
    unsafe fn slot(&self, index: usize) -> &Raw<T> {
        debug_assert!(index < self.capacity);

        //  Safety:
        //  -   `index` is within bounds, as per pre-condition.
        unsafe { &*self.pointer.as_ptr().add(index) }
    }

    //  Gets a mutable reference to the slot at index.
    //
    //  #   Safety
    //
    //  -   Assumes that `index` is less than the capacity.
    unsafe fn slot_mut(&mut self, index: usize) -> &mut Raw<T> {
        debug_assert!(index < self.capacity);

        //  Safety:
        //  -   `index` is within bounds, as per pre-condition.
        //  -   Exclusive access, as per &mut self.
        unsafe { &mut *self.pointer.as_ptr().add(index) }
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self { Self::empty() }
}

#[cfg(test)]
mod tests {

use super::*;

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::utils::tester::*;

#[test]
fn buffer_allocate_failure() {
    let allocator = TestAllocator::default();

    let buffer = RawBuffer::<SpyElement<'_>>::allocate(1, &allocator);

    assert_eq!(Some(Failure::OutOfMemory), buffer.err());
}

#[test]
fn buffer_allocate_overflow() {
    let allocator = TestAllocator::allowing(1);

    let buffer = RawBuffer::<u64>::allocate(usize::MAX / 4, &allocator);

    assert_eq!(Some(Failure::BytesOverflow), buffer.err());
    assert!(allocator.allocations().is_empty());
}

#[test]
fn buffer_allocate_success() {
    let allocator = TestAllocator::allowing(1);

    let mut buffer = RawBuffer::<SpyElement<'_>>::allocate(3, &allocator).unwrap();

    assert_eq!(3, buffer.capacity());

    let allocation = allocator.allocations().last().copied().unwrap();

    assert_eq!(3 * mem::size_of::<usize>(), allocation.size);
    assert_eq!(mem::align_of::<usize>(), allocation.alignment);
    assert_eq!(buffer.as_ptr() as *mut u8, allocation.pointer);

    unsafe { buffer.release(&allocator) };

    assert_eq!(0, buffer.capacity());
    assert!(allocator.allocations().is_empty());
}

#[test]
fn buffer_allocate_zero() {
    let allocator = TestAllocator::default();

    let mut buffer = RawBuffer::<u32>::allocate(0, &allocator).unwrap();

    assert_eq!(0, buffer.capacity());

    unsafe { buffer.release(&allocator) };
}

#[test]
fn buffer_allocate_zero_sized() {
    let allocator = TestAllocator::default();

    let mut buffer = RawBuffer::<()>::allocate(usize::MAX, &allocator).unwrap();

    assert_eq!(usize::MAX, buffer.capacity());

    let mut length = 0;
    unsafe { buffer.fill_to(&mut length, 1000, || ()) };

    assert_eq!(1000, length);
    assert_eq!(1000, unsafe { buffer.slice(length) }.len());

    unsafe { buffer.truncate_to(&mut length, 0) };
    unsafe { buffer.release(&allocator) };

    assert!(allocator.allocations().is_empty());
}

#[test]
fn buffer_fill_truncate() {
    let allocator = TestAllocator::allowing(1);
    let count = SpyCount::zero();

    let mut buffer = RawBuffer::allocate(4, &allocator).unwrap();
    let mut length = 0;

    unsafe { buffer.fill_to(&mut length, 3, || SpyElement::new(&count)) };

    assert_eq!(3, length);
    assert_eq!(3, count.get());

    //  No-op: fill never shrinks, truncate never grows.
    unsafe { buffer.fill_to(&mut length, 2, || SpyElement::new(&count)) };
    unsafe { buffer.truncate_to(&mut length, 3) };

    assert_eq!(3, length);
    assert_eq!(3, count.get());

    unsafe { buffer.truncate_to(&mut length, 1) };

    assert_eq!(1, length);
    assert_eq!(1, count.get());

    unsafe { buffer.truncate_to(&mut length, 0) };
    unsafe { buffer.release(&allocator) };

    assert_eq!(0, count.get());
}

#[test]
fn buffer_fill_from() {
    let allocator = TestAllocator::allowing(1);

    let mut buffer = RawBuffer::allocate(3, &allocator).unwrap();
    let mut length = 0;

    let exhausted = unsafe { buffer.fill_from(&mut length, vec![1, 2]) };

    assert!(exhausted);
    assert_eq!(&[1, 2], unsafe { buffer.slice(length) });

    let mut elements = 3..;
    let exhausted = unsafe { buffer.fill_from(&mut length, elements.by_ref()) };

    assert!(!exhausted);
    assert_eq!(&[1, 2, 3], unsafe { buffer.slice(length) });
    assert_eq!(Some(4), elements.next());

    unsafe { buffer.release(&allocator) };
}

#[test]
fn buffer_fill_panic() {
    let allocator = TestAllocator::allowing(1);

    let mut buffer = RawBuffer::allocate(4, &allocator).unwrap();
    let mut length = 0;
    let mut next = 0;

    let panicked = catch_unwind(AssertUnwindSafe(|| {
        unsafe {
            buffer.fill_to(&mut length, 4, || {
                assert_ne!(2, next);
                next += 1;
                next
            })
        };
    }));

    assert!(panicked.is_err());
    assert_eq!(2, length);
    assert_eq!(&[1, 2], unsafe { buffer.slice(length) });

    unsafe { buffer.release(&allocator) };
}

#[test]
fn buffer_truncate_panic() {
    let allocator = TestAllocator::allowing(1);
    let count = SpyCount::zero();

    let mut buffer = RawBuffer::allocate(4, &allocator).unwrap();
    let mut length = 0;

    let mut elements = vec![
        (SpyElement::new(&count), PanickyDrop::new(0)),
        (SpyElement::new(&count), PanickyDrop::panicky(1)),
        (SpyElement::new(&count), PanickyDrop::new(2)),
        (SpyElement::new(&count), PanickyDrop::new(3)),
    ].into_iter();

    unsafe { buffer.fill_to(&mut length, 4, || elements.next().unwrap()) };

    assert_eq!(4, count.get());

    let panicked = catch_unwind(AssertUnwindSafe(|| {
        unsafe { buffer.truncate_to(&mut length, 0) };
    }));

    assert!(panicked.is_err());
    assert_eq!(0, length);
    assert_eq!(0, count.get());

    unsafe { buffer.release(&allocator) };
}

#[test]
fn buffer_reallocate() {
    let allocator = TestAllocator::allowing(2);

    let mut buffer = RawBuffer::allocate(2, &allocator).unwrap();
    let mut length = 0;
    let mut next = 0;

    unsafe { buffer.fill_to(&mut length, 2, || { next += 1; next.to_string() }) };

    unsafe { buffer.reallocate(length, 5, &allocator) }.unwrap();

    assert_eq!(5, buffer.capacity());
    assert_eq!(vec![5 * mem::size_of::<String>()], allocator.allocation_sizes());
    assert_eq!(&["1", "2"], unsafe { buffer.slice(length) });

    unsafe { buffer.truncate_to(&mut length, 0) };
    unsafe { buffer.release(&allocator) };

    assert!(allocator.allocations().is_empty());
}

#[test]
fn buffer_reallocate_failure() {
    let allocator = TestAllocator::allowing(1);

    let mut buffer = RawBuffer::allocate(2, &allocator).unwrap();
    let mut length = 0;

    unsafe { buffer.fill_to(&mut length, 2, || 7u32) };

    let reallocated = unsafe { buffer.reallocate(length, 4, &allocator) };

    assert_eq!(Err(Failure::OutOfMemory), reallocated);
    assert_eq!(2, buffer.capacity());
    assert_eq!(&[7, 7], unsafe { buffer.slice(length) });

    unsafe { buffer.release(&allocator) };
}

#[test]
fn buffer_read_write() {
    let allocator = TestAllocator::allowing(1);

    let mut buffer = RawBuffer::allocate(2, &allocator).unwrap();

    unsafe { buffer.write(0, String::from("Hello")) };
    let elements = unsafe { buffer.slice_mut(1) };
    elements[0].push('!');

    assert_eq!("Hello!", unsafe { buffer.read(0) });

    unsafe { buffer.release(&allocator) };
}

}

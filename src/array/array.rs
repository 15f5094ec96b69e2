//! The DynamicArray

use super::root::{borrow, cmp, fmt, hash, iter, mem, ops, slice};

use super::allocator::ArrayAllocator;
use super::buffer::RawBuffer;
use super::cursor::{Cursor, CursorMut};
use super::display;
use super::failure::{Failure, Result};
use super::growth;
use super::hooks::{ArrayEvent, ArrayHooks, DefaultArrayHooks};
use super::iterator::{IntoIter, Iter, IterMut};

/// `DynamicArray`
///
/// A growable, contiguous, array exclusively owning its elements.
///
/// The array performs no internal synchronization: a `&DynamicArray` may be shared across threads, for reading, while
/// any modification requires a `&mut DynamicArray`, and thus exclusive access.
pub struct DynamicArray<T, H: ArrayHooks = DefaultArrayHooks> {
    //  Hooks of the array.
    hooks: H,
    //  The number of live elements, which occupy the first `length` slots of `buffer`.
    length: usize,
    buffer: RawBuffer<T>,
}

impl<T> DynamicArray<T> {
    /// Creates a new, empty, instance of the `DynamicArray`.
    ///
    /// No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::array::DynamicArray;
    /// let array: DynamicArray<i32> = DynamicArray::new();
    ///
    /// assert_eq!(0, array.len());
    /// assert_eq!(0, array.capacity());
    /// ```
    pub fn new() -> Self {
        Self::with_hooks(DefaultArrayHooks)
    }

    /// Creates a new, empty, instance of the `DynamicArray` with exactly `capacity` slots.
    ///
    /// #   Errors
    ///
    /// Returns an error if the buffer cannot be allocated, which may happen either:
    ///
    /// -   If the number of bytes necessary overflows.
    /// -   Or if the allocator fails to allocate memory.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::array::DynamicArray;
    /// #   use dynamic_array::failure::Failure;
    /// let array = DynamicArray::<u64>::try_with_capacity(5).unwrap();
    /// assert_eq!(5, array.capacity());
    ///
    /// assert_eq!(Err(Failure::BytesOverflow), DynamicArray::<u64>::try_with_capacity(usize::MAX).map(|_| ()));
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Self::try_with_capacity_and_hooks(capacity, DefaultArrayHooks)
    }

    /// Creates a new, empty, instance of the `DynamicArray` with exactly `capacity` slots.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(panic_from_failure)
    }

    /// Creates a new instance of the `DynamicArray` holding `count` clones of `value`.
    ///
    /// Exactly `count` slots are allocated.
    ///
    /// #   Errors
    ///
    /// Returns an error if the buffer cannot be allocated.
    pub fn try_from_elem(value: T, count: usize) -> Result<Self>
    where
        T: Clone,
    {
        let mut result = Self::try_with_capacity(count)?;

        //  Safety:
        //  -   `length` is 0, and no slot is initialized.
        //  -   `count` is the capacity.
        unsafe { result.buffer.fill_to(&mut result.length, count, || value.clone()) };

        Ok(result)
    }

    /// Creates a new instance of the `DynamicArray` holding `count` clones of `value`.
    ///
    /// Calling this method is equivalent to calling `try_from_elem` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the buffer cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::array::DynamicArray;
    /// let array = DynamicArray::from_elem('a', 3);
    ///
    /// assert_eq!(3, array.capacity());
    /// assert_eq!(array, ['a', 'a', 'a']);
    /// ```
    pub fn from_elem(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Self::try_from_elem(value, count).unwrap_or_else(panic_from_failure)
    }
}

impl<T, H: ArrayHooks> DynamicArray<T, H> {
    /// Creates a new, empty, instance of the `DynamicArray` reporting to `hooks`.
    ///
    /// No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::array::{DynamicArray, TracingArrayHooks};
    /// let mut array = DynamicArray::with_hooks(TracingArrayHooks);
    /// array.push(1);
    ///
    /// assert_eq!(1, array.len());
    /// ```
    pub fn with_hooks(hooks: H) -> Self {
        Self { hooks, length: 0, buffer: RawBuffer::empty() }
    }

    /// Creates a new, empty, instance of the `DynamicArray` reporting to `hooks`, with exactly `capacity` slots.
    ///
    /// #   Errors
    ///
    /// Returns an error if the buffer cannot be allocated.
    pub fn try_with_capacity_and_hooks(capacity: usize, hooks: H) -> Result<Self> {
        let mut result = Self::with_hooks(hooks);
        result.try_reserve(capacity)?;

        Ok(result)
    }

    /// Creates a new, empty, instance of the `DynamicArray` reporting to `hooks`, with exactly `capacity` slots.
    ///
    /// #   Panics
    ///
    /// Panics if the buffer cannot be allocated.
    pub fn with_capacity_and_hooks(capacity: usize, hooks: H) -> Self {
        Self::try_with_capacity_and_hooks(capacity, hooks).unwrap_or_else(panic_from_failure)
    }

    /// Returns a reference to the hooks.
    pub fn hooks(&self) -> &H { &self.hooks }

    /// Returns whether the array holds no element.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::array::DynamicArray;
    /// let mut array = DynamicArray::new();
    /// assert!(array.is_empty());
    ///
    /// array.push(1);
    /// assert!(!array.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.length == 0 }

    /// Returns the number of elements.
    pub fn len(&self) -> usize { self.length }

    /// Returns the number of elements the array can hold without reallocating.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::array::DynamicArray;
    /// let mut array = DynamicArray::new();
    ///
    /// for (i, capacity) in [1, 2, 4, 4, 8].into_iter().enumerate() {
    ///     array.push(i);
    ///     assert_eq!(capacity, array.capacity());
    /// }
    /// ```
    pub fn capacity(&self) -> usize { self.buffer.capacity() }

    /// Returns the maximum number of elements an array of `T` could theoretically hold.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::array::DynamicArray;
    /// let array: DynamicArray<u32> = DynamicArray::new();
    ///
    /// assert_eq!(isize::MAX as usize / 4, array.max_len());
    /// ```
    pub fn max_len(&self) -> usize { growth::max_capacity::<T>() }

    /// Returns the elements, as a slice.
    pub fn as_slice(&self) -> &[T] {
        //  Safety:
        //  -   The first `length` elements are initialized.
        unsafe { self.buffer.slice(self.length) }
    }

    /// Returns the elements, as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        //  Safety:
        //  -   The first `length` elements are initialized.
        unsafe { self.buffer.slice_mut(self.length) }
    }

    /// Returns a pointer to the first element.
    ///
    /// The pointer is dangling, yet well-aligned, if no memory is allocated. It is invalidated by any operation which
    /// reallocates.
    pub fn as_ptr(&self) -> *const T { self.buffer.as_ptr() }

    /// Returns a mutable pointer to the first element.
    ///
    /// The pointer is dangling, yet well-aligned, if no memory is allocated. It is invalidated by any operation which
    /// reallocates.
    pub fn as_mut_ptr(&mut self) -> *mut T { self.buffer.as_mut_ptr() }

    /// Returns a reference to the element at `index`.
    ///
    /// #   Errors
    ///
    /// Returns `OutOfRange` if `index` is greater than, or equal to, the length.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::dynamic_array;
    /// #   use dynamic_array::failure::Failure;
    /// let array = dynamic_array![1, 2, 3];
    ///
    /// assert_eq!(Ok(&2), array.at(1));
    /// assert_eq!(Err(Failure::OutOfRange { index: 3, length: 3 }), array.at(3));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        let length = self.length;

        self.as_slice().get(index).ok_or(Failure::OutOfRange { index, length })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// #   Errors
    ///
    /// Returns `OutOfRange` if `index` is greater than, or equal to, the length.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let length = self.length;

        self.as_mut_slice().get_mut(index).ok_or(Failure::OutOfRange { index, length })
    }

    /// Returns a reference to the first element.
    ///
    /// #   Errors
    ///
    /// Returns `EmptyContainer` if the array is empty.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::array::DynamicArray;
    /// #   use dynamic_array::failure::Failure;
    /// let mut array = DynamicArray::new();
    /// assert_eq!(Err(Failure::EmptyContainer), array.front());
    ///
    /// array.extend([1, 2]);
    /// assert_eq!(Ok(&1), array.front());
    /// ```
    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(Failure::EmptyContainer)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// #   Errors
    ///
    /// Returns `EmptyContainer` if the array is empty.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().first_mut().ok_or(Failure::EmptyContainer)
    }

    /// Returns a reference to the last element.
    ///
    /// #   Errors
    ///
    /// Returns `EmptyContainer` if the array is empty.
    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(Failure::EmptyContainer)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// #   Errors
    ///
    /// Returns `EmptyContainer` if the array is empty.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().last_mut().ok_or(Failure::EmptyContainer)
    }

    /// Returns a cursor to the first element, or to the end if empty.
    pub fn begin(&self) -> Cursor<'_, T> { Cursor::new(self.as_slice(), 0) }

    /// Returns a cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, T> { Cursor::new(self.as_slice(), self.length) }

    /// Returns a mutable cursor to the first element, or to the end if empty.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::dynamic_array;
    /// let mut array = dynamic_array![1, 2, 3];
    ///
    /// let mut cursor = array.begin_mut();
    ///
    /// while !cursor.is_end() {
    ///     *cursor *= 10;
    ///     cursor.increment();
    /// }
    ///
    /// assert_eq!(array, [10, 20, 30]);
    /// ```
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> { CursorMut::new(self.as_mut_slice(), 0) }

    /// Returns a mutable cursor one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let length = self.length;

        CursorMut::new(self.as_mut_slice(), length)
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> { self.as_slice().iter() }

    /// Returns an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> { self.as_mut_slice().iter_mut() }

    /// Drops all elements.
    ///
    /// The capacity is unchanged, no memory is released.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::dynamic_array;
    /// let mut array = dynamic_array![1, 2, 3];
    /// array.clear();
    ///
    /// assert_eq!(0, array.len());
    /// assert_eq!(3, array.capacity());
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements past the first `length`.
    ///
    /// Has no effect if `length` is greater than, or equal to, the current length. The capacity is unchanged.
    pub fn truncate(&mut self, length: usize) {
        //  Safety:
        //  -   `self.length` is exactly the number of initialized elements.
        unsafe { self.buffer.truncate_to(&mut self.length, length) };
    }

    /// Ensures a capacity of at least `capacity`.
    ///
    /// If the current capacity is insufficient, a buffer of exactly `capacity` slots is allocated, the elements are
    /// moved into it, and the former buffer is released.
    ///
    /// #   Errors
    ///
    /// Returns an error if the buffer cannot be allocated, which may happen either:
    ///
    /// -   If the number of bytes necessary overflows.
    /// -   Or if the allocator fails to allocate memory.
    ///
    /// In case of error, the array is unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::array::DynamicArray;
    /// #   use dynamic_array::failure::Failure;
    /// //  BytesOverflow signals that the number of bytes to allocate cannot be represented.
    /// let mut array: DynamicArray<u64> = DynamicArray::new();
    /// assert_eq!(Err(Failure::BytesOverflow), array.try_reserve(usize::MAX));
    ///
    /// //  OutOfMemory signals that the allocator failed to provide the requested memory; here because the amount
    /// //  requested is too large.
    /// assert_eq!(Err(Failure::OutOfMemory), array.try_reserve(usize::MAX / 32));
    ///
    /// //  Fortunately, in general, `try_reserve` should succeed.
    /// assert_eq!(Ok(()), array.try_reserve(6));
    /// assert_eq!(6, array.capacity());
    ///
    /// //  And reserving less than the current capacity does nothing.
    /// assert_eq!(Ok(()), array.try_reserve(2));
    /// assert_eq!(6, array.capacity());
    /// ```
    pub fn try_reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.buffer.capacity() {
            return Ok(());
        }

        self.try_reallocate(capacity)
    }

    /// Ensures a capacity of at least `capacity`.
    ///
    /// Calling this method is equivalent to calling `try_reserve` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the buffer cannot be allocated.
    pub fn reserve(&mut self, capacity: usize) {
        self.try_reserve(capacity).unwrap_or_else(panic_from_failure);
    }

    /// Resizes the array to `length` elements, creating new elements with `make` if necessary.
    ///
    /// -   If `length` is less than the current length, the surplus elements are dropped.
    /// -   If `length` is greater, exactly `length` slots are reserved and the new elements are created in order.
    ///
    /// #   Errors
    ///
    /// Returns an error if the buffer cannot be allocated.
    pub fn try_resize_with<F>(&mut self, length: usize, make: F) -> Result<()>
    where
        F: FnMut() -> T,
    {
        if length <= self.length {
            self.truncate(length);
            return Ok(());
        }

        self.try_reserve(length)?;

        //  Safety:
        //  -   `self.length` is exactly the number of initialized elements.
        //  -   `length` is less than, or equal to, the capacity, as just reserved.
        unsafe { self.buffer.fill_to(&mut self.length, length, make) };

        Ok(())
    }

    /// Resizes the array to `length` elements, creating new elements with `make` if necessary.
    ///
    /// Calling this method is equivalent to calling `try_resize_with` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the buffer cannot be allocated.
    pub fn resize_with<F>(&mut self, length: usize, make: F)
    where
        F: FnMut() -> T,
    {
        self.try_resize_with(length, make).unwrap_or_else(panic_from_failure);
    }

    /// Resizes the array to `length` elements, cloning `value` into the new slots if necessary.
    ///
    /// #   Errors
    ///
    /// Returns an error if the buffer cannot be allocated.
    pub fn try_resize(&mut self, length: usize, value: T) -> Result<()>
    where
        T: Clone,
    {
        self.try_resize_with(length, || value.clone())
    }

    /// Resizes the array to `length` elements, cloning `value` into the new slots if necessary.
    ///
    /// Calling this method is equivalent to calling `try_resize` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the buffer cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::dynamic_array;
    /// let mut array = dynamic_array![1, 2, 3];
    ///
    /// array.resize(5, 0);
    /// assert_eq!(array, [1, 2, 3, 0, 0]);
    /// assert_eq!(5, array.capacity());
    ///
    /// array.resize(2, 0);
    /// assert_eq!(array, [1, 2]);
    /// assert_eq!(5, array.capacity());
    /// ```
    pub fn resize(&mut self, length: usize, value: T)
    where
        T: Clone,
    {
        self.try_resize(length, value).unwrap_or_else(panic_from_failure);
    }

    /// Resizes the array to `length` elements, filling the new slots with default values if necessary.
    ///
    /// #   Errors
    ///
    /// Returns an error if the buffer cannot be allocated.
    pub fn try_resize_default(&mut self, length: usize) -> Result<()>
    where
        T: Default,
    {
        self.try_resize_with(length, T::default)
    }

    /// Resizes the array to `length` elements, filling the new slots with default values if necessary.
    ///
    /// #   Panics
    ///
    /// Panics if the buffer cannot be allocated.
    pub fn resize_default(&mut self, length: usize)
    where
        T: Default,
    {
        self.try_resize_default(length).unwrap_or_else(panic_from_failure);
    }

    /// Appends an element to the back.
    ///
    /// If the array is full, its capacity is doubled first, starting from 1.
    ///
    /// #   Errors
    ///
    /// Returns an error if the array is full and a larger buffer cannot be allocated, in which case `value` is
    /// dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::array::DynamicArray;
    /// let mut array = DynamicArray::new();
    /// assert_eq!(Ok(()), array.try_push(3));
    /// assert_eq!(3, array[0]);
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<()> {
        self.try_push_with(move || value)
    }

    /// Appends an element to the back.
    ///
    /// Calling this method is equivalent to calling `try_push` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the value cannot be pushed.
    pub fn push(&mut self, value: T) {
        self.try_push(value).unwrap_or_else(panic_from_failure);
    }

    /// Appends the element created by `make` to the back.
    ///
    /// The array is grown, if necessary, before `make` is invoked; its result is written directly into its slot.
    ///
    /// #   Errors
    ///
    /// Returns an error if the array is full and a larger buffer cannot be allocated, in which case `make` is not
    /// invoked.
    pub fn try_push_with<F>(&mut self, make: F) -> Result<()>
    where
        F: FnOnce() -> T,
    {
        if self.length == self.buffer.capacity() {
            let capacity = growth::grown(self.buffer.capacity())?;
            self.try_reallocate(capacity)?;
        }

        //  Safety:
        //  -   `self.length` is less than the capacity.
        unsafe { self.buffer.write(self.length, make()) };

        self.length += 1;
        self.hooks.on_event(ArrayEvent::Appended { length: self.length });

        Ok(())
    }

    /// Appends the element created by `make` to the back.
    ///
    /// Calling this method is equivalent to calling `try_push_with` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the element cannot be pushed.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::array::DynamicArray;
    /// let mut array = DynamicArray::new();
    /// array.push_with(|| String::from("Hello"));
    ///
    /// assert_eq!("Hello", array[0]);
    /// ```
    pub fn push_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        self.try_push_with(make).unwrap_or_else(panic_from_failure);
    }

    /// Drops the last element, if any.
    ///
    /// Does nothing if the array is empty.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::dynamic_array;
    /// let mut array = dynamic_array![1, 2];
    ///
    /// array.remove_last();
    /// assert_eq!(array, [1]);
    ///
    /// array.remove_last();
    /// array.remove_last();
    /// assert!(array.is_empty());
    /// ```
    pub fn remove_last(&mut self) {
        if let Some(length) = self.length.checked_sub(1) {
            self.truncate(length);
        }
    }

    /// Removes the last element, and returns it, if any.
    pub fn pop(&mut self) -> Option<T> {
        if self.length == 0 {
            return None;
        }

        self.length -= 1;

        //  Safety:
        //  -   The element at `self.length` is initialized, and no longer accounted for.
        Some(unsafe { self.buffer.read(self.length) })
    }

    /// Appends multiple elements to the back.
    ///
    /// Capacity is reserved ahead according to the lower bound of the size hint of the collection, then grows as if
    /// each remaining element were pushed.
    ///
    /// #   Errors
    ///
    /// Returns an error if any of the values cannot be pushed. The elements appended up to that point are kept.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::array::DynamicArray;
    /// let mut array = DynamicArray::new();
    /// assert_eq!(Ok(()), array.try_extend([1, 2, 3]));
    ///
    /// assert_eq!(3, array.len());
    /// assert_eq!(3, array.capacity());
    /// ```
    pub fn try_extend<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = T>,
    {
        let mut elements = collection.into_iter();

        let (lower, _) = elements.size_hint();
        let capacity = growth::amortized(self.length, self.buffer.capacity(), lower)?;

        self.try_reserve(capacity)?;

        loop {
            let length = self.length;

            //  Safety:
            //  -   `self.length` is exactly the number of initialized elements.
            let exhausted = unsafe { self.buffer.fill_from(&mut self.length, elements.by_ref()) };

            for length in (length + 1)..=self.length {
                self.hooks.on_event(ArrayEvent::Appended { length });
            }

            if exhausted {
                return Ok(());
            }

            let Some(element) = elements.next() else { return Ok(()) };

            self.try_push(element)?;
        }
    }

    /// Moves the content of the array out, leaving it empty.
    ///
    /// The buffer changes owner, no element is cloned nor moved, and no memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::dynamic_array;
    /// let mut array = dynamic_array![1, 2, 3];
    /// let taken = array.take();
    ///
    /// assert_eq!(taken, [1, 2, 3]);
    /// assert_eq!(0, array.len());
    /// assert_eq!(0, array.capacity());
    /// ```
    pub fn take(&mut self) -> Self
    where
        H: Clone,
    {
        let length = mem::replace(&mut self.length, 0);
        let buffer = mem::take(&mut self.buffer);

        self.hooks.on_event(ArrayEvent::Moved { length });

        Self { hooks: self.hooks.clone(), length, buffer }
    }

    /// Replaces the content of the array by the content of `other`, leaving `other` empty.
    ///
    /// The current elements are dropped, and the current buffer released, then the buffer of `other` changes owner.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynamic_array::dynamic_array;
    /// let mut array = dynamic_array![1, 2, 3];
    /// let mut other = dynamic_array![4, 5];
    ///
    /// array.move_from(&mut other);
    ///
    /// assert_eq!(array, [4, 5]);
    /// assert!(other.is_empty());
    /// assert_eq!(0, other.capacity());
    /// ```
    pub fn move_from<G: ArrayHooks>(&mut self, other: &mut DynamicArray<T, G>) {
        self.clear();
        self.release();

        self.length = mem::replace(&mut other.length, 0);
        self.buffer = mem::take(&mut other.buffer);

        self.hooks.on_event(ArrayEvent::Moved { length: self.length });
    }

    //  Clones `elements` into the array, allocating exactly enough slots for them.
    //
    //  #   Panics
    //
    //  Panics if the buffer cannot be allocated.
    fn assign_clones(&mut self, elements: &[T])
    where
        T: Clone,
    {
        debug_assert_eq!(0, self.length);
        debug_assert_eq!(0, self.buffer.capacity());

        self.reserve(elements.len());

        //  Safety:
        //  -   `self.length` is exactly the number of initialized elements.
        unsafe { self.buffer.fill_from(&mut self.length, elements.iter().cloned()) };
    }

    //  Replaces the buffer by a buffer of exactly `capacity` slots.
    fn try_reallocate(&mut self, capacity: usize) -> Result<()> {
        let from = self.buffer.capacity();

        //  Safety:
        //  -   The first `self.length` elements are initialized.
        //  -   `self.length` is less than `capacity`, as the array only ever grows.
        //  -   All buffers of the array are allocated by the `ArrayAllocator`.
        unsafe { self.buffer.reallocate(self.length, capacity, &ArrayAllocator)? };

        self.hooks.on_event(ArrayEvent::Reallocated { length: self.length, from, to: capacity });

        Ok(())
    }

    //  Releases the buffer.
    //
    //  The array should not hold any element.
    fn release(&mut self) {
        debug_assert_eq!(0, self.length);

        let capacity = self.buffer.capacity();

        //  Safety:
        //  -   No element is initialized.
        //  -   All buffers of the array are allocated by the `ArrayAllocator`.
        unsafe { self.buffer.release(&ArrayAllocator) };

        if capacity > 0 {
            self.hooks.on_event(ArrayEvent::Released { capacity });
        }
    }
}

/// A `DynamicArray<T>` can be sent across threads whenever `T` can.
///
/// #   Example of not Send.
///
/// ```compile_fail
/// # use std::rc::Rc;
/// # use dynamic_array::array::DynamicArray;
/// fn ensure_send<T: Send>(_: T) {}
///
/// let mut array = DynamicArray::new();
/// array.push(Rc::new(3));
///
/// ensure_send(array);
/// ```
unsafe impl<T: Send, H: ArrayHooks + Send> Send for DynamicArray<T, H> {}

/// A `DynamicArray<T>` can be shared across threads whenever `T` can; it only hands out `&T` through `&self`.
///
/// #   Example of Sync.
///
/// ```
/// # use dynamic_array::dynamic_array;
/// fn ensure_sync<T: Sync>(_: T) {}
///
/// let array = dynamic_array![String::from("Hello")];
///
/// ensure_sync(&array);
/// ```
unsafe impl<T: Sync, H: ArrayHooks + Sync> Sync for DynamicArray<T, H> {}

impl<T, H: ArrayHooks> Drop for DynamicArray<T, H> {
    fn drop(&mut self) {
        self.clear();
        self.release();
    }
}

impl<T, H: ArrayHooks + Default> Default for DynamicArray<T, H> {
    fn default() -> Self {
        Self::with_hooks(H::default())
    }
}

impl<T: Clone, H: ArrayHooks + Clone> Clone for DynamicArray<T, H> {
    fn clone(&self) -> Self {
        let mut result = Self::with_hooks(self.hooks.clone());
        result.assign_clones(self.as_slice());

        self.hooks.on_event(ArrayEvent::Cloned { length: self.length });

        result
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.release();

        self.assign_clones(source.as_slice());

        source.hooks.on_event(ArrayEvent::Cloned { length: source.length });
    }
}

impl<T: fmt::Debug, H: ArrayHooks> fmt::Debug for DynamicArray<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("capacity", &self.capacity())
            .field("length", &self.length)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: fmt::Display, H: ArrayHooks> fmt::Display for DynamicArray<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        display::write_elements(f, self.as_slice())
    }
}

impl<T, H: ArrayHooks> ops::Deref for DynamicArray<T, H> {
    type Target = [T];

    fn deref(&self) -> &[T] { self.as_slice() }
}

impl<T, H: ArrayHooks> ops::DerefMut for DynamicArray<T, H> {
    fn deref_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T, H: ArrayHooks, I: slice::SliceIndex<[T]>> ops::Index<I> for DynamicArray<T, H> {
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output {
        ops::Index::index(self.as_slice(), index)
    }
}

impl<T, H: ArrayHooks, I: slice::SliceIndex<[T]>> ops::IndexMut<I> for DynamicArray<T, H> {
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        ops::IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, H: ArrayHooks> AsRef<[T]> for DynamicArray<T, H> {
    fn as_ref(&self) -> &[T] { self.as_slice() }
}

impl<T, H: ArrayHooks> AsMut<[T]> for DynamicArray<T, H> {
    fn as_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T, H: ArrayHooks> borrow::Borrow<[T]> for DynamicArray<T, H> {
    fn borrow(&self) -> &[T] { self.as_slice() }
}

impl<T, H: ArrayHooks> borrow::BorrowMut<[T]> for DynamicArray<T, H> {
    fn borrow_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T, U, H, G> PartialEq<DynamicArray<U, G>> for DynamicArray<T, H>
where
    T: PartialEq<U>,
    H: ArrayHooks,
    G: ArrayHooks,
{
    fn eq(&self, other: &DynamicArray<U, G>) -> bool { self.as_slice() == other.as_slice() }
}

impl<T: PartialEq<U>, U, H: ArrayHooks> PartialEq<[U]> for DynamicArray<T, H> {
    fn eq(&self, other: &[U]) -> bool { self.as_slice() == other }
}

impl<T: PartialEq<U>, U, H: ArrayHooks> PartialEq<&[U]> for DynamicArray<T, H> {
    fn eq(&self, other: &&[U]) -> bool { self.as_slice() == *other }
}

impl<T: PartialEq<U>, U, H: ArrayHooks, const N: usize> PartialEq<[U; N]> for DynamicArray<T, H> {
    fn eq(&self, other: &[U; N]) -> bool { self.as_slice() == &other[..] }
}

impl<T: Eq, H: ArrayHooks> Eq for DynamicArray<T, H> {}

impl<T: PartialOrd, H: ArrayHooks> PartialOrd for DynamicArray<T, H> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> { self.as_slice().partial_cmp(other.as_slice()) }
}

impl<T: Ord, H: ArrayHooks> Ord for DynamicArray<T, H> {
    fn cmp(&self, other: &Self) -> cmp::Ordering { self.as_slice().cmp(other.as_slice()) }
}

impl<T: hash::Hash, H: ArrayHooks> hash::Hash for DynamicArray<T, H> {
    fn hash<S: hash::Hasher>(&self, state: &mut S) { hash::Hash::hash(self.as_slice(), state) }
}

impl<T, H: ArrayHooks + Default, const N: usize> From<[T; N]> for DynamicArray<T, H> {
    fn from(elements: [T; N]) -> Self {
        let mut result = Self::default();
        result.reserve(N);

        //  Safety:
        //  -   `length` is 0, and no slot is initialized.
        unsafe { result.buffer.fill_from(&mut result.length, elements) };

        result
    }
}

impl<T: Clone, H: ArrayHooks + Default> From<&[T]> for DynamicArray<T, H> {
    fn from(elements: &[T]) -> Self {
        let mut result = Self::default();
        result.assign_clones(elements);
        result
    }
}

impl<T, H: ArrayHooks + Default> iter::FromIterator<T> for DynamicArray<T, H> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        let mut result = Self::default();
        result.extend(collection);
        result
    }
}

impl<T, H: ArrayHooks> iter::Extend<T> for DynamicArray<T, H> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.try_extend(collection).unwrap_or_else(panic_from_failure);
    }
}

impl<'a, T: Copy + 'a, H: ArrayHooks> iter::Extend<&'a T> for DynamicArray<T, H> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = &'a T>,
    {
        self.try_extend(collection.into_iter().copied()).unwrap_or_else(panic_from_failure);
    }
}

impl<T, H: ArrayHooks> IntoIterator for DynamicArray<T, H> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let length = mem::replace(&mut self.length, 0);
        let buffer = mem::take(&mut self.buffer);

        //  Safety:
        //  -   The first `length` elements of `buffer` are initialized.
        unsafe { IntoIter::new(buffer, length) }
    }
}

impl<'a, T, H: ArrayHooks> IntoIterator for &'a DynamicArray<T, H> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<'a, T, H: ArrayHooks> IntoIterator for &'a mut DynamicArray<T, H> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> { self.iter_mut() }
}

#[cold]
#[inline(never)]
fn panic_from_failure<R>(failure: Failure) -> R {
    panic!("{}", failure);
}

//  mod tests

//! Iterators over a DynamicArray.

use super::root::{fmt, iter, slice};

use super::allocator::ArrayAllocator;
use super::buffer::RawBuffer;

/// Iterator over references to the elements of a DynamicArray.
pub type Iter<'a, T> = slice::Iter<'a, T>;

/// Iterator over mutable references to the elements of a DynamicArray.
pub type IterMut<'a, T> = slice::IterMut<'a, T>;

/// IntoIter
///
/// An iterator moving the elements out of a DynamicArray.
///
/// The elements not yielded are dropped, along with the buffer, when the iterator is dropped.
///
/// #   Example
///
/// ```
/// use dynamic_array::dynamic_array;
///
/// let array = dynamic_array![String::from("a"), String::from("b"), String::from("c")];
///
/// let mut elements = array.into_iter();
/// assert_eq!(Some(String::from("a")), elements.next());
/// assert_eq!(Some(String::from("c")), elements.next_back());
/// assert_eq!(&[String::from("b")], elements.as_slice());
/// ```
pub struct IntoIter<T> {
    buffer: RawBuffer<T>,
    //  The elements `[front, back)` are initialized, all others are not.
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    //  Creates an instance.
    //
    //  #   Safety
    //
    //  -   Assumes that the first `length` elements of `buffer` are initialized.
    pub(crate) unsafe fn new(buffer: RawBuffer<T>, length: usize) -> Self {
        debug_assert!(length <= buffer.capacity());

        Self { buffer, front: 0, back: length }
    }

    /// Returns the elements not yet yielded, as a slice.
    pub fn as_slice(&self) -> &[T] {
        //  Safety:
        //  -   The elements `[front, back)` are initialized.
        unsafe { self.buffer.range(self.front, self.back) }
    }

    /// Returns the elements not yet yielded, as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        //  Safety:
        //  -   The elements `[front, back)` are initialized.
        unsafe { self.buffer.range_mut(self.front, self.back) }
    }
}

impl<T> iter::Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        let index = self.front;
        self.front += 1;

        //  Safety:
        //  -   The element at `index` is initialized, and no longer accounted for.
        Some(unsafe { self.buffer.read(index) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = self.back - self.front;
        (length, Some(length))
    }
}

impl<T> iter::DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;

        //  Safety:
        //  -   The element at `back` is initialized, and no longer accounted for.
        Some(unsafe { self.buffer.read(self.back) })
    }
}

impl<T> iter::ExactSizeIterator for IntoIter<T> {}

impl<T> iter::FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);

        //  Pre-pooping our pants in case a Drop panics.
        self.front = back;

        //  Safety:
        //  -   The elements `[front, back)` are initialized, and no longer accounted for.
        unsafe { self.buffer.drop_range(front, back) };

        //  Safety:
        //  -   No element is initialized any longer.
        //  -   The buffer was allocated by the `ArrayAllocator`, as all buffers of `DynamicArray`.
        unsafe { self.buffer.release(&ArrayAllocator) };
    }
}

//  A `IntoIter<T>` owns its elements, just like `DynamicArray<T>`.
unsafe impl<T: Send> Send for IntoIter<T> {}

unsafe impl<T: Sync> Sync for IntoIter<T> {}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::*;

fn buffer_of<T>(elements: Vec<T>) -> (RawBuffer<T>, usize) {
    let mut buffer = RawBuffer::allocate(elements.len(), &ArrayAllocator).unwrap();
    let mut length = 0;

    unsafe { buffer.fill_from(&mut length, elements) };

    (buffer, length)
}

#[test]
fn into_iter_both_ends() {
    let (buffer, length) = buffer_of(vec![1, 2, 3, 4, 5]);
    let mut iterator = unsafe { IntoIter::new(buffer, length) };

    assert_eq!((5, Some(5)), iterator.size_hint());

    assert_eq!(Some(1), iterator.next());
    assert_eq!(Some(5), iterator.next_back());
    assert_eq!(Some(4), iterator.next_back());

    assert_eq!(&[2, 3], iterator.as_slice());
    assert_eq!(2, iterator.len());

    iterator.as_mut_slice()[0] = 9;

    assert_eq!(vec![9, 3], iterator.by_ref().collect::<Vec<_>>());
    assert_eq!(None, iterator.next());
    assert_eq!(None, iterator.next_back());
}

#[test]
fn into_iter_drop_remaining() {
    let count = SpyCount::zero();

    let (buffer, length) = buffer_of(vec![SpyElement::new(&count), SpyElement::new(&count), SpyElement::new(&count)]);
    let mut iterator = unsafe { IntoIter::new(buffer, length) };

    assert_eq!(3, count.get());

    let first = iterator.next();
    assert_eq!(3, count.get());

    drop(iterator);
    assert_eq!(1, count.get());

    drop(first);
    assert_eq!(0, count.get());
}

#[test]
fn into_iter_empty() {
    let mut iterator = unsafe { IntoIter::<String>::new(RawBuffer::empty(), 0) };

    assert_eq!(None, iterator.next());
    assert!(iterator.as_slice().is_empty());
}

#[test]
fn into_iter_debug() {
    let (buffer, length) = buffer_of(vec![1, 2]);
    let iterator = unsafe { IntoIter::new(buffer, length) };

    assert_eq!("IntoIter([1, 2])", format!("{:?}", iterator));
}

}

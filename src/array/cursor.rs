//! Random-access cursors over the live elements of a DynamicArray.
//!
//! A cursor designates a position within `[begin, end]`, where `end` is one past the last live element. Cursors can
//! be moved by any offset, compared, and subtracted from one another to obtain the number of elements between them.
//!
//! Cursors borrow the array they are created from, hence any operation which may reallocate or shrink the array
//! (`reserve`, `push`, `resize`, `clear`, ...) cannot be invoked while a cursor is alive: invalidation is ruled out at
//! compile time.
//!
//! ```compile_fail
//! use dynamic_array::dynamic_array;
//!
//! let mut array = dynamic_array![1, 2, 3];
//! let begin = array.begin();
//!
//! array.push(4);
//!
//! assert_eq!(1, *begin);
//! ```

use super::root::{cmp, fmt, hash, ops};

/// Cursor
///
/// A read-only random-access cursor.
///
/// #   Example
///
/// ```
/// use dynamic_array::dynamic_array;
///
/// let array = dynamic_array![1, 2, 3, 4];
///
/// let (begin, end) = (array.begin(), array.end());
/// assert_eq!(4, end - begin);
///
/// let mut cursor = begin + 1;
/// assert_eq!(2, *cursor);
///
/// cursor += 2;
/// assert_eq!(4, *cursor);
///
/// cursor.increment();
/// assert_eq!(end, cursor);
/// assert_eq!(None, cursor.get());
/// ```
///
/// #   Comparison
///
/// Cursors are only meaningfully compared, or subtracted, when created from the same array. A cursor identifies its
/// array by the address of its elements, and all empty arrays, as well as all arrays of zero-sized elements, share
/// the same dangling address: cursors of distinct such arrays may compare equal. Comparing, or subtracting, cursors of
/// distinct arrays is a violation of pre-conditions, with unspecified results.
pub struct Cursor<'a, T> {
    elements: &'a [T],
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    //  Creates a cursor at `position`.
    pub(crate) fn new(elements: &'a [T], position: usize) -> Self {
        debug_assert!(position <= elements.len());

        Self { elements, position }
    }

    /// Returns the position of the cursor, from the beginning of the array.
    pub fn position(&self) -> usize { self.position }

    /// Returns whether the cursor is one past the last element.
    pub fn is_end(&self) -> bool { self.position == self.elements.len() }

    /// Returns a reference to the element designated, or `None` at the end.
    pub fn get(&self) -> Option<&'a T> { self.elements.get(self.position) }

    /// Returns a reference to the element designated.
    ///
    /// #   Safety
    ///
    /// -   Assumes that the cursor is not at the end.
    pub unsafe fn get_unchecked(&self) -> &'a T {
        debug_assert!(!self.is_end());

        //  Safety:
        //  -   The position is within bounds, as per pre-condition.
        unsafe { self.elements.get_unchecked(self.position) }
    }

    /// Moves the cursor forward by one, and returns it.
    ///
    /// #   Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn increment(&mut self) -> &mut Self {
        self.position = offset(self.position, self.elements.len(), 1);
        self
    }

    /// Moves the cursor forward by one, and returns its former value.
    ///
    /// #   Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn post_increment(&mut self) -> Self {
        let result = *self;
        self.increment();
        result
    }

    /// Moves the cursor backward by one, and returns it.
    ///
    /// #   Panics
    ///
    /// Panics if the cursor is already at the beginning.
    pub fn decrement(&mut self) -> &mut Self {
        self.position = offset(self.position, self.elements.len(), -1);
        self
    }

    /// Moves the cursor backward by one, and returns its former value.
    ///
    /// #   Panics
    ///
    /// Panics if the cursor is already at the beginning.
    pub fn post_decrement(&mut self) -> Self {
        let result = *self;
        self.decrement();
        result
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("length", &self.elements.len())
            .finish()
    }
}

impl<'a, T> ops::Deref for Cursor<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get().unwrap_or_else(|| panic_dereference_end())
    }
}

impl<'a, T> ops::Add<isize> for Cursor<'a, T> {
    type Output = Self;

    fn add(mut self, k: isize) -> Self {
        self += k;
        self
    }
}

impl<'a, T> ops::Sub<isize> for Cursor<'a, T> {
    type Output = Self;

    fn sub(mut self, k: isize) -> Self {
        self -= k;
        self
    }
}

impl<'a, T> ops::AddAssign<isize> for Cursor<'a, T> {
    fn add_assign(&mut self, k: isize) {
        self.position = offset(self.position, self.elements.len(), k);
    }
}

impl<'a, T> ops::SubAssign<isize> for Cursor<'a, T> {
    fn sub_assign(&mut self, k: isize) {
        self.position = offset(self.position, self.elements.len(), negate(k));
    }
}

/// The number of elements from `other` to `self`, negative if `self` is before `other`.
///
/// Both cursors are assumed to be created from the same array.
impl<'a, T> ops::Sub for Cursor<'a, T> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        debug_assert!(self.elements.as_ptr() == other.elements.as_ptr(), "Cursors of distinct arrays");

        distance(other.position, self.position)
    }
}

/// Two cursors are equal if they designate the same position.
///
/// Both cursors are assumed to be created from the same array.
impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool { self.key() == other.key() }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> { Some(self.cmp(other)) }
}

impl<'a, T> Ord for Cursor<'a, T> {
    fn cmp(&self, other: &Self) -> cmp::Ordering { self.key().cmp(&other.key()) }
}

impl<'a, T> hash::Hash for Cursor<'a, T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) { hash::Hash::hash(&self.key(), state) }
}

impl<'a, T> Cursor<'a, T> {
    //  Identity of the position: the array, and the position within.
    fn key(&self) -> (*const T, usize) { (self.elements.as_ptr(), self.position) }
}

/// CursorMut
///
/// A read-write random-access cursor.
///
/// A `CursorMut` is unique: while it lives, no other cursor over the same array may exist. As a result, there is no
/// pair of `CursorMut` to compare, or subtract from one another, and `CursorMut` implements neither. Use `position`,
/// or `as_cursor`, instead.
///
/// #   Example
///
/// ```
/// use dynamic_array::dynamic_array;
///
/// let mut array = dynamic_array![1, 2, 3, 4];
///
/// let mut cursor = array.begin_mut();
///
/// while !cursor.is_end() {
///     *cursor *= 10;
///     cursor.increment();
/// }
///
/// assert_eq!(array, [10, 20, 30, 40]);
/// ```
pub struct CursorMut<'a, T> {
    elements: &'a mut [T],
    position: usize,
}

impl<'a, T> CursorMut<'a, T> {
    //  Creates a cursor at `position`.
    pub(crate) fn new(elements: &'a mut [T], position: usize) -> Self {
        debug_assert!(position <= elements.len());

        Self { elements, position }
    }

    /// Returns a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> { Cursor::new(&*self.elements, self.position) }

    /// Returns the position of the cursor, from the beginning of the array.
    pub fn position(&self) -> usize { self.position }

    /// Returns whether the cursor is one past the last element.
    pub fn is_end(&self) -> bool { self.position == self.elements.len() }

    /// Returns a reference to the element designated, or `None` at the end.
    pub fn get(&self) -> Option<&T> { self.elements.get(self.position) }

    /// Returns a mutable reference to the element designated, or `None` at the end.
    pub fn get_mut(&mut self) -> Option<&mut T> { self.elements.get_mut(self.position) }

    /// Returns a mutable reference to the element designated.
    ///
    /// #   Safety
    ///
    /// -   Assumes that the cursor is not at the end.
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_end());

        //  Safety:
        //  -   The position is within bounds, as per pre-condition.
        unsafe { self.elements.get_unchecked_mut(self.position) }
    }

    /// Swaps the element designated with the element `k` positions away.
    ///
    /// #   Panics
    ///
    /// Panics if either position is at, or beyond, the end.
    pub fn swap(&mut self, k: isize) {
        let other = offset(self.position, self.elements.len(), k);
        self.elements.swap(self.position, other);
    }

    /// Moves the cursor forward by one, and returns it.
    ///
    /// #   Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn increment(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Moves the cursor backward by one, and returns it.
    ///
    /// #   Panics
    ///
    /// Panics if the cursor is already at the beginning.
    pub fn decrement(&mut self) -> &mut Self {
        *self -= 1;
        self
    }
}

impl<'a, T> fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("length", &self.elements.len())
            .finish()
    }
}

impl<'a, T> ops::Deref for CursorMut<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get().unwrap_or_else(|| panic_dereference_end())
    }
}

impl<'a, T> ops::DerefMut for CursorMut<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut().unwrap_or_else(|| panic_dereference_end())
    }
}

impl<'a, T> ops::Add<isize> for CursorMut<'a, T> {
    type Output = Self;

    fn add(mut self, k: isize) -> Self {
        self += k;
        self
    }
}

impl<'a, T> ops::Sub<isize> for CursorMut<'a, T> {
    type Output = Self;

    fn sub(mut self, k: isize) -> Self {
        self -= k;
        self
    }
}

impl<'a, T> ops::AddAssign<isize> for CursorMut<'a, T> {
    fn add_assign(&mut self, k: isize) {
        self.position = offset(self.position, self.elements.len(), k);
    }
}

impl<'a, T> ops::SubAssign<isize> for CursorMut<'a, T> {
    fn sub_assign(&mut self, k: isize) {
        self.position = offset(self.position, self.elements.len(), negate(k));
    }
}

//  Returns `position + k`.
//
//  #   Panics
//
//  Panics if the result is not within `[0, length]`.
fn offset(position: usize, length: usize, k: isize) -> usize {
    match position.checked_add_signed(k) {
        Some(result) if result <= length => result,
        _ => panic_out_of_bounds(position, length, k),
    }
}

//  Returns `to - from`.
fn distance(from: usize, to: usize) -> isize {
    if to >= from {
        (to - from) as isize
    } else {
        -((from - to) as isize)
    }
}

fn negate(k: isize) -> isize {
    k.checked_neg().unwrap_or_else(|| panic!("Cannot negate offset {}", k))
}

#[cold]
#[inline(never)]
fn panic_dereference_end() -> ! {
    panic!("Cannot dereference the end cursor");
}

#[cold]
#[inline(never)]
fn panic_out_of_bounds(position: usize, length: usize, k: isize) -> ! {
    panic!("Cannot move cursor at {} by {}: out of [0, {}]", position, k, length);
}

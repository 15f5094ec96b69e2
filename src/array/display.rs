//! Diagnostic output of the elements of a DynamicArray.

use super::root::fmt;

#[cfg(feature = "with-std")]
use super::root::io;

/// Writes each element into `out`, in order, each followed by a single space.
///
/// Only a read-only view of the elements is necessary, hence any slice may be written.
///
/// #   Example
///
/// ```
/// use dynamic_array::array::write_elements;
/// use dynamic_array::dynamic_array;
///
/// let array = dynamic_array![1, 2, 3];
///
/// let mut out = String::new();
/// write_elements(&mut out, &array).unwrap();
///
/// assert_eq!("1 2 3 ", out);
/// ```
pub fn write_elements<W, T>(out: &mut W, elements: &[T]) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    T: fmt::Display,
{
    for element in elements {
        write!(out, "{} ", element)?;
    }

    Ok(())
}

/// Writes each element into `out`, in order, each followed by a single space.
///
/// The byte-oriented equivalent of `write_elements`.
///
/// #   Example
///
/// ```
/// use dynamic_array::array::write_elements_io;
/// use dynamic_array::dynamic_array;
///
/// let array = dynamic_array!["a", "b"];
///
/// let mut out = Vec::new();
/// write_elements_io(&mut out, &array).unwrap();
///
/// assert_eq!(b"a b ", &out[..]);
/// ```
#[cfg(feature = "with-std")]
pub fn write_elements_io<W, T>(out: &mut W, elements: &[T]) -> io::Result<()>
where
    W: io::Write + ?Sized,
    T: fmt::Display,
{
    for element in elements {
        write!(out, "{} ", element)?;
    }

    Ok(())
}

//! Raw memory, maybe uninitialized.

use super::root::{mem, ptr};

//  Raw memory, suitably sized for T.
//
//  The building block of the buffer of a DynamicArray, it may be uninitialized.
//
//  Being `repr(transparent)`, a slice of initialized `Raw<T>` can be viewed as a slice of `T`.
//
//  Here be dragons...
#[repr(transparent)]
pub struct Raw<T>(mem::MaybeUninit<T>);

impl<T> Raw<T> {
    //  Initializes the value.
    //
    //  #   Warning
    //
    //  Does not drop the former value, if any.
    pub fn write(&mut self, value: T) { self.0.write(value); }

    //  Moves the value out, leaving the slot logically uninitialized.
    //
    //  #   Safety
    //
    //  -   Assumes that the value is initialized.
    //  -   Assumes that the slot is not read again before being re-initialized.
    pub unsafe fn read(&self) -> T {
        //  Safety:
        //  -   The value is assumed to be initialized.
        unsafe { ptr::read(self.0.as_ptr()) }
    }
}

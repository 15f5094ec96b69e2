//! Allocator.
//!
//! The `Allocator` trait is the single seam through which the buffer of a `DynamicArray` obtains and releases memory,
//! allowing tests to inject allocation failures and to check that every allocation is released.
use super::root::alloc;

/// Layout, re-exported.
pub type Layout = alloc::Layout;

/// Allocator
pub trait Allocator {
    /// Allocates memory as per the size and alignment requirements.
    ///
    /// May return a null pointer if the allocation cannot be satisfied.
    ///
    /// #   Safety
    ///
    /// -   Assumes that the size of the Layout is non-zero.
    unsafe fn allocate(&self, layout: Layout) -> *mut u8;

    /// Deallocates memory.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `ptr` was allocated by `self.allocate`.
    /// -   Assumes that `ptr` was not already deallocated.
    /// -   Assumes that `layout` matches the layout with which `ptr` was allocated.
    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout);
}

/// DefaultAllocator
///
/// A default implementation of the `Allocator` trait, relying on the `alloc` crate global allocator.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DefaultAllocator;

impl Allocator for DefaultAllocator {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        debug_assert_ne!(0, layout.size());

        //  Safety:
        //  -   The size of the layout is non-zero, as per pre-condition.
        unsafe { alloc::alloc(layout) }
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        //  Safety:
        //  -   Forwarding pre-conditions.
        unsafe { alloc::dealloc(ptr, layout) }
    }
}

//  The allocator of every buffer of a DynamicArray.
#[cfg(not(test))]
pub use self::DefaultAllocator as ArrayAllocator;

//  The allocator of every buffer of a DynamicArray, keeping a ledger of allocations under test.
#[cfg(test)]
pub use crate::utils::tester::LedgerAllocator as ArrayAllocator;

//! Internal testing utilities

use crate::root::{cell, iter, ptr};
use crate::root::sync::atomic::{AtomicUsize, Ordering};

use crate::allocator::{Allocator, DefaultAllocator, Layout};
use crate::array::{ArrayEvent, ArrayHooks};

//  Allocation
//
//  Description of an allocation.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Allocation {
    //  The size of the allocation, in bytes.
    pub size: usize,
    //  The alignment of the allocation, in bytes.
    pub alignment: usize,
    //  The pointer allocated.
    pub pointer: *mut u8,
}

impl Allocation {
    pub fn new(pointer: *mut u8, layout: Layout) -> Self {
        Allocation {
            size: layout.size(),
            alignment: layout.align(),
            pointer,
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::from_size_align(self.size, self.alignment).unwrap()
    }
}

//  Test Allocator
//
//  An allocator specifically for testing:
//  -   Allows injecting allocation failures.
//  -   Checks that allocations and deallocations match.
#[derive(Default)]
pub struct TestAllocator {
    //  The actual allocator.
    pub allocator: DefaultAllocator,
    //  The number of allocations allowed.
    pub allowed: cell::Cell<usize>,
    //  The allocations performed, and not yet released; to check deallocation requests.
    pub allocations: cell::RefCell<Vec<Allocation>>,
}

impl TestAllocator {
    //  Creates an instance allowing `allowed` allocations.
    pub fn allowing(allowed: usize) -> Self {
        let result = Self::default();
        result.allowed.set(allowed);
        result
    }

    pub fn allocations(&self) -> Vec<Allocation> {
        self.allocations.borrow().clone()
    }

    pub fn allocation_sizes(&self) -> Vec<usize> {
        self.allocations.borrow().iter()
            .map(|&a| a.size)
            .collect()
    }

    pub fn clear(&self) {
        for a in self.allocations.borrow_mut().drain(..) {
            //  Safety:
            //  -   Were allocated, and not deallocated.
            unsafe { self.allocator.deallocate(a.pointer, a.layout()) };
        }
    }

    fn locate(&self, allocation: Allocation) -> Option<usize> {
        self.allocations.borrow().iter().position(|a| *a == allocation)
    }
}

impl Allocator for TestAllocator {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        if self.allowed.get() == 0 {
            return ptr::null_mut();
        }

        self.allowed.set(self.allowed.get() - 1);

        let result = unsafe { self.allocator.allocate(layout) };
        assert_ne!(ptr::null_mut(), result);

        let allocation = Allocation::new(result, layout);
        self.allocations.borrow_mut().push(allocation);

        result
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        let allocation = Allocation::new(ptr, layout);

        if let Some(index) = self.locate(allocation) {
            self.allocations.borrow_mut().remove(index);
        } else {
            panic!("Could not find {:?} in {:?}",
                allocation, &*self.allocations.borrow());
        }

        unsafe { self.allocator.deallocate(ptr, layout) };
    }
}

impl Drop for TestAllocator {
    fn drop(&mut self) { self.clear() }
}

thread_local! {
    //  The next sequence number, and the allocations not yet deallocated, of `LedgerAllocator` on this thread.
    static LEDGER: cell::RefCell<(u64, Vec<(u64, Allocation)>)> = cell::RefCell::new((0, Vec::new()));
}

//  Ledger Allocator
//
//  The allocator backing every DynamicArray under test:
//  -   Forwards to the `DefaultAllocator`.
//  -   Keeps a per-thread ledger of the allocations not yet deallocated.
//  -   Panics on deallocating anything but a live allocation, with its exact layout.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LedgerAllocator;

impl LedgerAllocator {
    //  Returns a checkpoint, tracking the allocations performed on this thread from now on.
    pub fn checkpoint() -> LedgerCheckpoint {
        LEDGER.with(|ledger| LedgerCheckpoint(ledger.borrow().0))
    }
}

impl Allocator for LedgerAllocator {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        let result = unsafe { DefaultAllocator.allocate(layout) };

        if !result.is_null() {
            LEDGER.with(|ledger| {
                let mut ledger = ledger.borrow_mut();
                let sequence = ledger.0;

                ledger.0 += 1;
                ledger.1.push((sequence, Allocation::new(result, layout)));
            });
        }

        result
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        let allocation = Allocation::new(ptr, layout);

        LEDGER.with(|ledger| {
            let mut ledger = ledger.borrow_mut();

            match ledger.1.iter().position(|(_, a)| *a == allocation) {
                Some(index) => { ledger.1.remove(index); },
                None => panic!("Could not find {:?} in {:?}", allocation, ledger.1),
            }
        });

        unsafe { DefaultAllocator.deallocate(ptr, layout) };
    }
}

//  A point in the ledger of `LedgerAllocator`.
pub struct LedgerCheckpoint(u64);

impl LedgerCheckpoint {
    //  Returns the sizes of the allocations performed on this thread since the checkpoint, and not yet deallocated.
    pub fn live(&self) -> Vec<usize> {
        LEDGER.with(|ledger| {
            ledger.borrow().1.iter()
                .filter(|(sequence, _)| *sequence >= self.0)
                .map(|(_, a)| a.size)
                .collect()
        })
    }
}

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
//
//  Cloning counts as a new instance.
pub struct SpyElement<'a> {
    count: &'a SpyCount,
}

impl<'a> SpyElement<'a> {
    pub fn new(count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { count }
    }
}

impl<'a> Clone for SpyElement<'a> {
    fn clone(&self) -> Self { Self::new(self.count) }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

//  A value which may panic on drop.
#[derive(Debug, Eq, Hash, PartialEq)]
pub struct PanickyDrop<T>(pub T, bool);

impl<T> PanickyDrop<T> {
    //  Creates a normal instance.
    pub fn new(value: T) -> Self { Self(value, false) }

    //  Creates a panicky instance.
    pub fn panicky(value: T) -> Self { Self(value, true) }
}

impl<T> Drop for PanickyDrop<T> {
    fn drop(&mut self) { if self.1 { panic!("Oh No!") } }
}

//  An Iterator which panics when reaching the configured count.
pub struct PanickyIterator(u32, u32);

impl PanickyIterator {
    //  Creates an instance configured to panic after yielding `count`
    //  elements.
    pub fn new(count: u32) -> PanickyIterator { PanickyIterator(0, count) }
}

impl iter::Iterator for PanickyIterator {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        assert_ne!(self.0, self.1);

        let result = self.0;
        self.0 += 1;
        Some(result)
    }
}

//  Hooks recording every event, in order.
#[derive(Clone, Default)]
pub struct RecordingHooks(std::rc::Rc<cell::RefCell<Vec<ArrayEvent>>>);

impl RecordingHooks {
    pub fn events(&self) -> Vec<ArrayEvent> { self.0.borrow().clone() }

    //  Returns the successive capacities reached through reallocation.
    pub fn reallocations(&self) -> Vec<usize> {
        self.0.borrow().iter()
            .filter_map(|event| match *event {
                ArrayEvent::Reallocated { to, .. } => Some(to),
                _ => None,
            })
            .collect()
    }
}

impl ArrayHooks for RecordingHooks {
    fn on_event(&self, event: ArrayEvent) {
        self.0.borrow_mut().push(event);
    }
}

//! Hooks of the DynamicArray.

/// ArrayEvent
///
/// The notable events in the life of a `DynamicArray`, as reported to its `ArrayHooks`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ArrayEvent {
    /// The buffer was replaced by a buffer of a different capacity, `length` elements were transferred.
    Reallocated {
        /// The number of elements transferred.
        length: usize,
        /// The former capacity.
        from: usize,
        /// The new capacity.
        to: usize,
    },
    /// An element was appended, the array now holds `length` elements.
    Appended {
        /// The length after appending.
        length: usize,
    },
    /// The buffer, of the given capacity, was released.
    Released {
        /// The capacity of the buffer released.
        capacity: usize,
    },
    /// The array was cloned, `length` elements were cloned.
    Cloned {
        /// The number of elements cloned.
        length: usize,
    },
    /// The content of the array was moved out, `length` elements changed owner without being copied.
    Moved {
        /// The number of elements moved.
        length: usize,
    },
}

/// ArrayHooks
///
/// The hooks of a `DynamicArray` observe its operations, without influencing them.
///
/// By default, nothing is observed: the `DefaultArrayHooks` ignore every event, and are free. Use `TracingArrayHooks`
/// to forward events to `tracing`, or implement this trait to route them elsewhere.
///
/// #   Example
///
/// ```
/// use std::cell::Cell;
///
/// use dynamic_array::array::{ArrayEvent, ArrayHooks, DynamicArray};
///
/// #[derive(Default)]
/// struct CountReallocations(Cell<usize>);
///
/// impl ArrayHooks for CountReallocations {
///     fn on_event(&self, event: ArrayEvent) {
///         if let ArrayEvent::Reallocated { .. } = event {
///             self.0.set(self.0.get() + 1);
///         }
///     }
/// }
///
/// let mut array = DynamicArray::with_hooks(CountReallocations::default());
/// for i in 0..5 {
///     array.push(i);
/// }
///
/// //  1, 2, 4, 8.
/// assert_eq!(4, array.hooks().0.get());
/// ```
pub trait ArrayHooks {
    /// Invoked after each notable event.
    fn on_event(&self, event: ArrayEvent) {
        let _ = event;
    }
}

/// DefaultArrayHooks
///
/// Default hooks of the DynamicArray, ignoring every event.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DefaultArrayHooks;

impl ArrayHooks for DefaultArrayHooks {}

/// TracingArrayHooks
///
/// Hooks forwarding every event to the `tracing` crate:
///
/// -   Appends are reported at the `TRACE` level.
/// -   All other events are reported at the `DEBUG` level.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TracingArrayHooks;

impl ArrayHooks for TracingArrayHooks {
    fn on_event(&self, event: ArrayEvent) {
        match event {
            ArrayEvent::Reallocated { length, from, to } => {
                tracing::debug!(length, from, to, "Reallocated");
            }
            ArrayEvent::Appended { length } => {
                tracing::trace!(length, "Appended");
            }
            ArrayEvent::Released { capacity } => {
                tracing::debug!(capacity, "Released");
            }
            ArrayEvent::Cloned { length } => {
                tracing::debug!(length, "Cloned");
            }
            ArrayEvent::Moved { length } => {
                tracing::debug!(length, "Moved");
            }
        }
    }
}

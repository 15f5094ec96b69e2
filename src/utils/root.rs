//! Re-export core/std facilities under a unified name.

pub use crate::alloc_crate::alloc;

#[cfg(not(feature = "with-std"))]
pub use core::{borrow, cell, cmp, fmt, hash, hint, iter, marker, mem, ops, ptr, result, slice, sync};

#[cfg(feature = "with-std")]
pub use std::{borrow, cell, cmp, fmt, hash, hint, iter, marker, mem, ops, ptr, result, slice, sync};

#[cfg(feature = "with-std")]
pub use std::io;

//! Internal utilities.

pub mod raw;
pub mod root;

#[cfg(test)]
pub mod tester;

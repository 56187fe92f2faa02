//! Output document model
//!
//! Typed elements produced by the grouping pass. Elements form a flat,
//! ordered sequence in document order; there is no tree nesting.

pub mod elements;

pub use elements::Element;

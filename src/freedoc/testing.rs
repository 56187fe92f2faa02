//! Test support
//!
//! Fluent assertions over parsed element sequences. Tests should go
//! through this API instead of matching enum variants by hand; failures
//! then report the element position and the actual kind.

pub mod testing_assertions;

pub use testing_assertions::assert_elements;

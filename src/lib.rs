//! # freedoc
//!
//! A classifier for freeform business documents.
//!
//! Freedoc takes pasted document text with no fixed grammar (mixed prose,
//! embedded code, tables, lists, checklists and ASCII diagrams) and
//! partitions it into an ordered sequence of typed elements suitable for a
//! downstream renderer.
//!
//! ## Testing
//!
//! Element-level tests should use the fluent assertions in the
//! [testing module](freedoc::testing) instead of matching on enum variants
//! by hand.

pub mod freedoc;

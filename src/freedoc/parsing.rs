//! Element construction
//!
//! Third pass and its sub-parsers: grouping the fully tagged line array
//! into elements, parsing table runs, parsing section header lines and
//! detecting the language of assembled code blocks.

pub mod grouping;
pub mod language;
pub mod sections;
pub mod tables;

pub use grouping::group_elements;

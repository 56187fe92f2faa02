//! Freedoc document classification
//!
//! This module turns freeform document text into a flat, ordered sequence of
//! typed elements. Classification happens in three passes over the line
//! array, each one a pure transformation:
//!
//! 1. Per-line tagging (see [`lexing::line_classification`])
//! 2. Code-block propagation (see [`lexing::propagation`])
//! 3. Element grouping (see [`parsing::grouping`])
//!
//! The engine is stateless between invocations and never fails: every input
//! string has a total classification.

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod processor;
pub mod testing;

pub use ast::elements::Element;
pub use pipeline::{classify_lines, parse_document};

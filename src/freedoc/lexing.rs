//! Line-level analysis
//!
//! Everything that operates on single lines or the flat line array before
//! elements exist: the line record and tag set, the code-likelihood scorer,
//! the structural predicates, and the first two classification passes.

pub mod line;
pub mod line_classification;
pub mod predicates;
pub mod propagation;
pub mod scoring;

pub use line::{Line, LineTag};

//! Output formats
//!
//! Text serializations of the element sequence, used by the processing
//! API and the CLI.

pub mod tag;

pub use tag::to_tag_str;

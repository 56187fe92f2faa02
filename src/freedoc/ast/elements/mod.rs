//! Element-specific node definitions
//!
//! This module contains the node definitions for individual document
//! elements. Each element type has its own module with its definition,
//! implementations, and tests.

pub mod ascii_diagram;
pub mod check_item;
pub mod code_block;
pub mod element;
pub mod field;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod rpa_section;
pub mod table;

// Re-export all element types
pub use ascii_diagram::AsciiDiagram;
pub use check_item::CheckItem;
pub use code_block::CodeBlock;
pub use element::Element;
pub use field::Field;
pub use heading::Heading;
pub use list_item::{Bullet, Numbered};
pub use paragraph::Paragraph;
pub use rpa_section::RpaSection;
pub use table::Table;

//! Heading element
//!
//! A heading carries the outline hierarchy of the document. The level is
//! clamped to three: depth one and two map directly, anything deeper
//! renders at level three.
//!
//! Examples:
//!
//! 1. Introdução
//!
//! 1.1 Escopo
//!
//! ## Regras de Negócio

use serde::Serialize;
use std::fmt;

/// A hierarchical section heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    /// Outline level, 1 to 3.
    pub level: u8,
    /// Dotted numeric path when the title carried one (`"1.1"`).
    pub numbering: Option<String>,
    /// Title text, numbering stripped.
    pub title: String,
}

impl Heading {
    pub fn new(level: u8, numbering: Option<String>, title: &str) -> Self {
        Heading {
            level,
            numbering,
            title: title.to_string(),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Heading(L{}, '{}')", self.level, self.title)
    }
}

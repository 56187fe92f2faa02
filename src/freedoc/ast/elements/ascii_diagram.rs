//! ASCII diagram element
//!
//! A run of lines containing box-drawing or arrow characters, kept
//! verbatim for monospace rendering.

use serde::Serialize;
use std::fmt;

/// A text diagram, joined and otherwise untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsciiDiagram {
    pub text: String,
}

impl AsciiDiagram {
    pub fn new(text: &str) -> Self {
        AsciiDiagram {
            text: text.to_string(),
        }
    }
}

impl fmt::Display for AsciiDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AsciiDiagram({} lines)", self.text.lines().count())
    }
}

//! Paragraph element
//!
//! The fallback element: one line of running prose. Lines are kept as
//! separate paragraphs; the renderer decides how to flow them.

use serde::Serialize;
use std::fmt;

/// A line of prose.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    pub fn new(text: &str) -> Self {
        Paragraph {
            text: text.to_string(),
        }
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self.text.chars().take(40).collect();
        write!(f, "Paragraph('{}')", preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_creation() {
        let paragraph = Paragraph::new("O robô acessa o portal.");
        assert_eq!(paragraph.text, "O robô acessa o portal.");
    }
}

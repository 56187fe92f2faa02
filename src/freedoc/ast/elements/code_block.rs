//! Code block element
//!
//! A run of code-tagged lines joined into one opaque text payload with a
//! best-guess language tag. The content is not parsed further; the
//! classifier segments and labels, it does not build syntax trees.

use serde::Serialize;
use std::fmt;

/// A block of detected code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    /// Best-guess language tag (`"python"`, `"sql"`, ... or `"pseudocode"`).
    pub language: String,
    /// Joined block text, internal blank lines preserved.
    pub text: String,
}

impl CodeBlock {
    pub fn new(language: &str, text: &str) -> Self {
        CodeBlock {
            language: language.to_string(),
            text: text.to_string(),
        }
    }

    /// Number of lines in the block.
    pub fn line_count(&self) -> usize {
        if self.text.is_empty() {
            0
        } else {
            self.text.lines().count()
        }
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CodeBlock({}, {} lines)",
            self.language,
            self.line_count()
        )
    }
}

//! Line record and classification tags
//!
//! A [`Line`] is the per-line working record of one parse invocation: the
//! raw text, its trimmed form, the zero-based index, the computed code
//! score and the current classification tag. Lines are created once at the
//! start of a parse, mutated only by the two classification passes and
//! discarded after grouping.

use crate::freedoc::lexing::scoring;
use serde::Serialize;
use std::fmt;

/// Classification assigned to a line.
///
/// Tags only become more specific over the passes: `Unknown` is transient
/// and is fully resolved by the propagation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineTag {
    Empty,
    CodeMarker,
    Ascii,
    Table,
    Separator,
    CheckYes,
    CheckNo,
    Section,
    Field,
    Bullet,
    Code,
    Numbered,
    Paragraph,
    Unknown,
}

impl LineTag {
    /// Short lowercase name, used by the debug output formats.
    pub fn name(&self) -> &'static str {
        match self {
            LineTag::Empty => "empty",
            LineTag::CodeMarker => "code_marker",
            LineTag::Ascii => "ascii",
            LineTag::Table => "table",
            LineTag::Separator => "separator",
            LineTag::CheckYes => "check_yes",
            LineTag::CheckNo => "check_no",
            LineTag::Section => "section",
            LineTag::Field => "field",
            LineTag::Bullet => "bullet",
            LineTag::Code => "code",
            LineTag::Numbered => "numbered",
            LineTag::Paragraph => "paragraph",
            LineTag::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LineTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One line of the input document with its classification state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    /// Raw text, leading whitespace included.
    pub raw: String,
    /// Whitespace-trimmed text.
    pub trimmed: String,
    /// Zero-based line index.
    pub index: usize,
    /// Code-likelihood score, computed once at construction.
    pub score: f32,
    /// Current classification tag.
    pub tag: LineTag,
}

impl Line {
    /// Build a line record and compute its code score.
    pub fn new(index: usize, raw: &str) -> Self {
        Line {
            raw: raw.to_string(),
            trimmed: raw.trim().to_string(),
            index,
            score: scoring::code_score(raw),
            tag: LineTag::Unknown,
        }
    }

    /// Whether the line contains no visible content.
    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line({}, {}, score {:.1}, '{}')",
            self.index, self.tag, self.score, self.trimmed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_creation() {
        let line = Line::new(3, "  Objetivo  ");
        assert_eq!(line.index, 3);
        assert_eq!(line.raw, "  Objetivo  ");
        assert_eq!(line.trimmed, "Objetivo");
        assert_eq!(line.tag, LineTag::Unknown);
    }

    #[test]
    fn test_blank_detection() {
        assert!(Line::new(0, "").is_blank());
        assert!(Line::new(0, "   \t ").is_blank());
        assert!(!Line::new(0, "x").is_blank());
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(LineTag::CodeMarker.name(), "code_marker");
        assert_eq!(LineTag::CheckYes.name(), "check_yes");
        assert_eq!(format!("{}", LineTag::Paragraph), "paragraph");
    }
}

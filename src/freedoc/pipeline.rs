//! Parse pipeline
//!
//! The public entry points. A parse is three array transformations run in
//! sequence, each a pure function:
//!
//! ```text
//! raw text -> tagged lines -> refined tags -> elements
//! ```
//!
//! Nothing is shared between invocations; concurrent callers need no
//! coordination.

use crate::freedoc::ast::elements::Element;
use crate::freedoc::lexing::line::Line;
use crate::freedoc::lexing::line_classification;
use crate::freedoc::lexing::propagation;
use crate::freedoc::parsing::grouping;

/// Parse a document into its element sequence.
///
/// Total over every input: the empty string yields an empty list and no
/// input raises.
pub fn parse_document(source: &str) -> Vec<Element> {
    let lines = classify_lines(source);
    grouping::group_elements(&lines)
}

/// Run the classification passes only, returning the refined line array.
///
/// This is the debug surface: every line with its tag and score, after
/// propagation has resolved all transient tags.
pub fn classify_lines(source: &str) -> Vec<Line> {
    let mut lines = scan_lines(source);
    line_classification::classify_all(&mut lines);
    propagation::propagate_blocks(&mut lines);
    propagation::resolve_unknowns(&mut lines);
    lines
}

/// Split the source into line records, normalizing line endings first.
fn scan_lines(source: &str) -> Vec<Line> {
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .split('\n')
        .enumerate()
        .map(|(index, raw)| Line::new(index, raw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freedoc::lexing::line::LineTag;

    #[test]
    fn test_empty_input_yields_no_elements() {
        assert!(parse_document("").is_empty());
        assert!(parse_document("\n\n\n").is_empty());
    }

    #[test]
    fn test_line_endings_are_normalized() {
        let unix = parse_document("Objetivo\n- item");
        let windows = parse_document("Objetivo\r\n- item");
        let classic = parse_document("Objetivo\r- item");
        assert_eq!(unix, windows);
        assert_eq!(unix, classic);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = "1. Introdução\n\nSELECT * FROM t\n\n- item";
        assert_eq!(parse_document(source), parse_document(source));
    }

    #[test]
    fn test_classify_lines_resolves_everything() {
        let lines = classify_lines("texto\n\nSELECT id FROM t");
        assert!(lines.iter().all(|line| line.tag != LineTag::Unknown));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_line_indices_cover_the_input() {
        let lines = classify_lines("a\nb\nc");
        let indices: Vec<usize> = lines.iter().map(|line| line.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}

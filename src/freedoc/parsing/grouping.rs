//! Element grouping
//!
//! Third pass: a single left-to-right scan over the fully tagged line
//! array. Contiguous runs of `code`, `ascii` and `table` merge into one
//! element each; every other tag produces one element per line. Marker
//! lines are consumed without emitting anything, but they end any run in
//! progress. Blank lines inside a code or ascii run are kept as internal
//! blank lines and trimmed only at the edges of the run.

use crate::freedoc::ast::elements::{
    AsciiDiagram, Bullet, CheckItem, CodeBlock, Element, Field, Numbered, Paragraph,
};
use crate::freedoc::lexing::line::{Line, LineTag};
use crate::freedoc::lexing::predicates;
use crate::freedoc::parsing::language;
use crate::freedoc::parsing::sections;
use crate::freedoc::parsing::tables;

/// Group the tagged line array into the final element sequence.
pub fn group_elements(lines: &[Line]) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];
        match line.tag {
            LineTag::Empty | LineTag::CodeMarker => i += 1,
            LineTag::Code => {
                let (texts, next) = collect_run(lines, i, LineTag::Code);
                if let Some(text) = join_run(&texts) {
                    let tag = language::detect_language(&text);
                    elements.push(Element::CodeBlock(CodeBlock::new(tag, &text)));
                }
                i = next;
            }
            LineTag::Ascii => {
                let (texts, next) = collect_run(lines, i, LineTag::Ascii);
                if let Some(text) = join_run(&texts) {
                    elements.push(Element::AsciiDiagram(AsciiDiagram::new(&text)));
                }
                i = next;
            }
            LineTag::Table => {
                let (raw_lines, next) = collect_table_run(lines, i);
                if let Some(table) = tables::parse_table(&raw_lines) {
                    elements.push(Element::Table(table));
                }
                i = next;
            }
            LineTag::Section => {
                elements.push(sections::parse_section(&line.trimmed));
                i += 1;
            }
            LineTag::Field => {
                elements.push(Element::Field(Field::from_line(&line.trimmed)));
                i += 1;
            }
            LineTag::Separator => {
                elements.push(Element::Separator);
                i += 1;
            }
            LineTag::CheckYes => {
                let text = predicates::strip_leading_glyph(&line.trimmed);
                elements.push(Element::CheckYes(CheckItem::new(text)));
                i += 1;
            }
            LineTag::CheckNo => {
                let text = predicates::strip_leading_glyph(&line.trimmed);
                elements.push(Element::CheckNo(CheckItem::new(text)));
                i += 1;
            }
            LineTag::Bullet => {
                let text = predicates::strip_leading_glyph(&line.trimmed);
                elements.push(Element::Bullet(Bullet::new(text)));
                i += 1;
            }
            LineTag::Numbered => {
                let (ordinal, text) = predicates::split_list_marker(&line.trimmed)
                    .unwrap_or_else(|| (String::new(), line.trimmed.clone()));
                elements.push(Element::Numbered(Numbered::new(&ordinal, &text)));
                i += 1;
            }
            LineTag::Paragraph => {
                elements.push(Element::Paragraph(Paragraph::new(&line.trimmed)));
                i += 1;
            }
            // Unknown does not survive the propagation pass
            LineTag::Unknown => {
                elements.push(Element::Paragraph(Paragraph::new(&line.trimmed)));
                i += 1;
            }
        }
    }

    elements
}

/// Collect a run of one tag starting at `start`, bridging blank lines only
/// when the run resumes on the far side.
///
/// Returns the collected line texts (blanks as empty strings) and the
/// index of the first line after the run.
fn collect_run<'a>(lines: &'a [Line], start: usize, tag: LineTag) -> (Vec<&'a str>, usize) {
    let mut texts = Vec::new();
    let mut i = start;

    while i < lines.len() {
        if lines[i].tag == tag {
            texts.push(lines[i].raw.trim_end());
            i += 1;
        } else if lines[i].tag == LineTag::Empty {
            let mut j = i;
            while j < lines.len() && lines[j].tag == LineTag::Empty {
                j += 1;
            }
            if j < lines.len() && lines[j].tag == tag {
                for _ in i..j {
                    texts.push("");
                }
                i = j;
            } else {
                break;
            }
        } else {
            break;
        }
    }

    (texts, i)
}

/// Strictly contiguous run of table lines.
fn collect_table_run<'a>(lines: &'a [Line], start: usize) -> (Vec<&'a str>, usize) {
    let mut raw_lines = Vec::new();
    let mut i = start;
    while i < lines.len() && lines[i].tag == LineTag::Table {
        raw_lines.push(lines[i].raw.as_str());
        i += 1;
    }
    (raw_lines, i)
}

/// Join run texts, trimming blank lines at the edges. Returns `None` when
/// nothing visible remains.
fn join_run(texts: &[&str]) -> Option<String> {
    let start = texts.iter().position(|text| !text.trim().is_empty())?;
    let end = texts.iter().rposition(|text| !text.trim().is_empty())?;
    Some(texts[start..=end].join("\n"))
}

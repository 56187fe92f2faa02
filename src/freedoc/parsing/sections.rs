//! Section sub-parser
//!
//! Converts a single section-tagged line into a heading element. Forms are
//! tried in order:
//!
//! 1. `RPA <n>[ - título]`
//! 2. Dotted numeric path; the segment count drives the heading level, so
//!    one regex carries the whole outline hierarchy
//! 3. Markdown `#`/`##`/`###` prefix
//! 4. Anything else becomes a level-1 heading without numbering

use crate::freedoc::ast::elements::{Element, Heading, RpaSection};
use once_cell::sync::Lazy;
use regex::Regex;

static RPA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^rpa\s*(\d+)\s*[-–—:]?\s*(.*)$").unwrap());
static NUMERIC_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)*)[.)]?\s+(.+)$").unwrap());
static MARKDOWN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,3})\s+(.+)$").unwrap());

/// Deepest rendered heading level.
const MAX_LEVEL: u8 = 3;

/// Parse one section header line into an element.
pub fn parse_section(trimmed: &str) -> Element {
    if let Some(caps) = RPA_RE.captures(trimmed) {
        let number = caps.get(1).map_or("", |m| m.as_str());
        let title = caps.get(2).map_or("", |m| m.as_str()).trim();
        return Element::RpaSection(RpaSection::new(number, title));
    }

    if let Some(caps) = NUMERIC_PATH_RE.captures(trimmed) {
        let path = caps.get(1).map_or("", |m| m.as_str());
        let title = caps.get(2).map_or("", |m| m.as_str()).trim();
        let depth = path.split('.').count() as u8;
        let level = depth.min(MAX_LEVEL);
        return Element::Heading(Heading::new(level, Some(path.to_string()), title));
    }

    if let Some(caps) = MARKDOWN_RE.captures(trimmed) {
        let level = caps.get(1).map_or(1, |m| m.as_str().len() as u8);
        let title = caps.get(2).map_or("", |m| m.as_str()).trim();
        return Element::Heading(Heading::new(level, None, title));
    }

    Element::Heading(Heading::new(1, None, trimmed))
}

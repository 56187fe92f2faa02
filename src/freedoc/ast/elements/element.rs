//! Element wrapper enum
//!
//! The closed sum type over every element kind. Grouping produces a flat
//! `Vec<Element>`; downstream renderers dispatch on the variant.

use super::ascii_diagram::AsciiDiagram;
use super::check_item::CheckItem;
use super::code_block::CodeBlock;
use super::field::Field;
use super::heading::Heading;
use super::list_item::{Bullet, Numbered};
use super::paragraph::Paragraph;
use super::rpa_section::RpaSection;
use super::table::Table;
use serde::Serialize;
use std::fmt;

/// One typed unit of the output document model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Heading(Heading),
    RpaSection(RpaSection),
    Field(Field),
    Bullet(Bullet),
    Numbered(Numbered),
    CheckYes(CheckItem),
    CheckNo(CheckItem),
    Separator,
    CodeBlock(CodeBlock),
    AsciiDiagram(AsciiDiagram),
    Table(Table),
    Paragraph(Paragraph),
}

impl Element {
    /// Short lowercase kind name, used by the summary and tag formats.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Heading(_) => "heading",
            Element::RpaSection(_) => "rpa_section",
            Element::Field(_) => "field",
            Element::Bullet(_) => "bullet",
            Element::Numbered(_) => "numbered",
            Element::CheckYes(_) => "check_yes",
            Element::CheckNo(_) => "check_no",
            Element::Separator => "separator",
            Element::CodeBlock(_) => "code_block",
            Element::AsciiDiagram(_) => "ascii_diagram",
            Element::Table(_) => "table",
            Element::Paragraph(_) => "paragraph",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Heading(heading) => write!(f, "{}", heading),
            Element::RpaSection(section) => write!(f, "{}", section),
            Element::Field(field) => write!(f, "{}", field),
            Element::Bullet(bullet) => write!(f, "{}", bullet),
            Element::Numbered(numbered) => write!(f, "{}", numbered),
            Element::CheckYes(item) => write!(f, "CheckYes('{}')", item.text),
            Element::CheckNo(item) => write!(f, "CheckNo('{}')", item.text),
            Element::Separator => write!(f, "Separator"),
            Element::CodeBlock(block) => write!(f, "{}", block),
            Element::AsciiDiagram(diagram) => write!(f, "{}", diagram),
            Element::Table(table) => write!(f, "{}", table),
            Element::Paragraph(paragraph) => write!(f, "{}", paragraph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Element::Separator.kind(), "separator");
        assert_eq!(
            Element::Heading(Heading::new(1, None, "Título")).kind(),
            "heading"
        );
        assert_eq!(
            Element::CheckYes(CheckItem::new("ok")).kind(),
            "check_yes"
        );
    }

    #[test]
    fn test_serialization_carries_type_tag() {
        let json = serde_json::to_string(&Element::Separator).unwrap();
        assert_eq!(json, r#"{"type":"separator"}"#);

        let json = serde_json::to_string(&Element::Field(Field::new("Autor", "Maria"))).unwrap();
        assert!(json.contains(r#""type":"field""#));
        assert!(json.contains(r#""key":"Autor""#));
    }
}

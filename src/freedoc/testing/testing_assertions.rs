//! Fluent assertion API for element sequences

use crate::freedoc::ast::elements::{
    AsciiDiagram, Bullet, CheckItem, CodeBlock, Element, Field, Heading, Numbered, Paragraph,
    RpaSection, Table,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for an element sequence
pub fn assert_elements(elements: &[Element]) -> SequenceAssertion<'_> {
    SequenceAssertion { elements }
}

// ============================================================================
// Sequence Assertions
// ============================================================================

pub struct SequenceAssertion<'a> {
    elements: &'a [Element],
}

impl<'a> SequenceAssertion<'a> {
    /// Assert the number of elements in the sequence
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.elements.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} elements, found {}: [{}]",
            expected,
            actual,
            summarize_elements(self.elements)
        );
        self
    }

    /// Assert on a specific element by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        assert!(
            index < self.elements.len(),
            "Element index {} out of bounds (sequence has {} elements)",
            index,
            self.elements.len()
        );

        let element = &self.elements[index];
        assertion(ElementAssertion {
            element,
            context: format!("elements[{}]", index),
        });
        self
    }
}

// ============================================================================
// Element Assertions
// ============================================================================

pub struct ElementAssertion<'a> {
    element: &'a Element,
    context: String,
}

impl<'a> ElementAssertion<'a> {
    /// Assert this element is a Heading and return heading-specific assertions
    pub fn assert_heading(self) -> HeadingAssertion<'a> {
        match self.element {
            Element::Heading(heading) => HeadingAssertion {
                heading,
                context: self.context,
            },
            _ => panic!(
                "{}: Expected heading, found {}",
                self.context,
                self.element.kind()
            ),
        }
    }

    /// Assert this element is an RpaSection and return its assertions
    pub fn assert_rpa_section(self) -> RpaSectionAssertion<'a> {
        match self.element {
            Element::RpaSection(section) => RpaSectionAssertion {
                section,
                context: self.context,
            },
            _ => panic!(
                "{}: Expected rpa_section, found {}",
                self.context,
                self.element.kind()
            ),
        }
    }

    /// Assert this element is a Field and return field-specific assertions
    pub fn assert_field(self) -> FieldAssertion<'a> {
        match self.element {
            Element::Field(field) => FieldAssertion {
                field,
                context: self.context,
            },
            _ => panic!(
                "{}: Expected field, found {}",
                self.context,
                self.element.kind()
            ),
        }
    }

    /// Assert this element is a Bullet with the given text
    pub fn assert_bullet(self, text: &str) {
        match self.element {
            Element::Bullet(Bullet { text: actual }) => assert_eq!(
                actual, text,
                "{}: bullet text mismatch",
                self.context
            ),
            _ => panic!(
                "{}: Expected bullet, found {}",
                self.context,
                self.element.kind()
            ),
        }
    }

    /// Assert this element is a Numbered item with the given ordinal and text
    pub fn assert_numbered(self, ordinal: &str, text: &str) {
        match self.element {
            Element::Numbered(Numbered {
                ordinal: actual_ordinal,
                text: actual_text,
            }) => {
                assert_eq!(actual_ordinal, ordinal, "{}: ordinal mismatch", self.context);
                assert_eq!(actual_text, text, "{}: item text mismatch", self.context);
            }
            _ => panic!(
                "{}: Expected numbered, found {}",
                self.context,
                self.element.kind()
            ),
        }
    }

    /// Assert this element is a completed checklist item with the given text
    pub fn assert_check_yes(self, text: &str) {
        match self.element {
            Element::CheckYes(CheckItem { text: actual }) => {
                assert_eq!(actual, text, "{}: check text mismatch", self.context)
            }
            _ => panic!(
                "{}: Expected check_yes, found {}",
                self.context,
                self.element.kind()
            ),
        }
    }

    /// Assert this element is a pending checklist item with the given text
    pub fn assert_check_no(self, text: &str) {
        match self.element {
            Element::CheckNo(CheckItem { text: actual }) => {
                assert_eq!(actual, text, "{}: check text mismatch", self.context)
            }
            _ => panic!(
                "{}: Expected check_no, found {}",
                self.context,
                self.element.kind()
            ),
        }
    }

    /// Assert this element is a Separator
    pub fn assert_separator(self) {
        if !matches!(self.element, Element::Separator) {
            panic!(
                "{}: Expected separator, found {}",
                self.context,
                self.element.kind()
            );
        }
    }

    /// Assert this element is a CodeBlock and return code-specific assertions
    pub fn assert_code_block(self) -> CodeBlockAssertion<'a> {
        match self.element {
            Element::CodeBlock(block) => CodeBlockAssertion {
                block,
                context: self.context,
            },
            _ => panic!(
                "{}: Expected code_block, found {}",
                self.context,
                self.element.kind()
            ),
        }
    }

    /// Assert this element is an AsciiDiagram containing the given fragment
    pub fn assert_ascii_diagram(self, fragment: &str) {
        match self.element {
            Element::AsciiDiagram(AsciiDiagram { text }) => assert!(
                text.contains(fragment),
                "{}: diagram does not contain '{}': {}",
                self.context,
                fragment,
                text
            ),
            _ => panic!(
                "{}: Expected ascii_diagram, found {}",
                self.context,
                self.element.kind()
            ),
        }
    }

    /// Assert this element is a Table and return table-specific assertions
    pub fn assert_table(self) -> TableAssertion<'a> {
        match self.element {
            Element::Table(table) => TableAssertion {
                table,
                context: self.context,
            },
            _ => panic!(
                "{}: Expected table, found {}",
                self.context,
                self.element.kind()
            ),
        }
    }

    /// Assert this element is a Paragraph with the given text
    pub fn assert_paragraph(self, text: &str) {
        match self.element {
            Element::Paragraph(Paragraph { text: actual }) => {
                assert_eq!(actual, text, "{}: paragraph text mismatch", self.context)
            }
            _ => panic!(
                "{}: Expected paragraph, found {}",
                self.context,
                self.element.kind()
            ),
        }
    }
}

// ============================================================================
// Kind-specific Assertions
// ============================================================================

pub struct HeadingAssertion<'a> {
    heading: &'a Heading,
    context: String,
}

impl HeadingAssertion<'_> {
    pub fn level(self, expected: u8) -> Self {
        assert_eq!(
            self.heading.level, expected,
            "{}: heading level mismatch",
            self.context
        );
        self
    }

    pub fn numbering(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.heading.numbering.as_deref(),
            expected,
            "{}: heading numbering mismatch",
            self.context
        );
        self
    }

    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.heading.title, expected,
            "{}: heading title mismatch",
            self.context
        );
        self
    }
}

pub struct RpaSectionAssertion<'a> {
    section: &'a RpaSection,
    context: String,
}

impl RpaSectionAssertion<'_> {
    pub fn number(self, expected: &str) -> Self {
        assert_eq!(
            self.section.number, expected,
            "{}: rpa section number mismatch",
            self.context
        );
        self
    }

    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.section.title, expected,
            "{}: rpa section title mismatch",
            self.context
        );
        self
    }
}

pub struct FieldAssertion<'a> {
    field: &'a Field,
    context: String,
}

impl FieldAssertion<'_> {
    pub fn key(self, expected: &str) -> Self {
        assert_eq!(self.field.key, expected, "{}: field key mismatch", self.context);
        self
    }

    pub fn value(self, expected: &str) -> Self {
        assert_eq!(
            self.field.value, expected,
            "{}: field value mismatch",
            self.context
        );
        self
    }
}

pub struct CodeBlockAssertion<'a> {
    block: &'a CodeBlock,
    context: String,
}

impl CodeBlockAssertion<'_> {
    pub fn language(self, expected: &str) -> Self {
        assert_eq!(
            self.block.language, expected,
            "{}: code block language mismatch",
            self.context
        );
        self
    }

    pub fn contains(self, fragment: &str) -> Self {
        assert!(
            self.block.text.contains(fragment),
            "{}: code block does not contain '{}': {}",
            self.context,
            fragment,
            self.block.text
        );
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        assert_eq!(
            self.block.line_count(),
            expected,
            "{}: code block line count mismatch",
            self.context
        );
        self
    }
}

pub struct TableAssertion<'a> {
    table: &'a Table,
    context: String,
}

impl TableAssertion<'_> {
    pub fn headers(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.table.headers, expected,
            "{}: table headers mismatch",
            self.context
        );
        self
    }

    pub fn row(self, index: usize, expected: &[&str]) -> Self {
        assert!(
            index < self.table.rows.len(),
            "{}: row index {} out of bounds ({} rows)",
            self.context,
            index,
            self.table.rows.len()
        );
        assert_eq!(
            self.table.rows[index], expected,
            "{}: table row {} mismatch",
            self.context, index
        );
        self
    }

    pub fn row_count(self, expected: usize) -> Self {
        assert_eq!(
            self.table.rows.len(),
            expected,
            "{}: table row count mismatch",
            self.context
        );
        self
    }
}

/// One-line summary of a sequence for assertion messages
fn summarize_elements(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|element| element.kind())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freedoc::pipeline::parse_document;

    #[test]
    fn test_fluent_chain() {
        let elements = parse_document("1. Introdução\nResponsável: Ana");
        assert_elements(&elements)
            .item_count(2)
            .item(0, |e| {
                e.assert_heading().level(1).numbering(Some("1")).title("Introdução");
            })
            .item(1, |e| {
                e.assert_field().key("Responsável").value("Ana");
            });
    }

    #[test]
    #[should_panic(expected = "Expected field")]
    fn test_kind_mismatch_panics_with_context() {
        let elements = parse_document("1. Introdução");
        assert_elements(&elements).item(0, |e| {
            e.assert_field();
        });
    }
}

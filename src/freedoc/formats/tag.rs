//! XML-like element tag serialization
//!
//! Serializes the element sequence to a compact tag-per-element format
//! that directly reflects the output model. Single-line elements render as
//! one self-closing tag; block elements nest their payload text.
//!
//! ## Example
//!
//! ```text
//! <heading level="1" numbering="1" title="Introdução"/>
//! <field key="Responsável" value="João Silva"/>
//! <code-block language="sql">
//! SELECT * FROM clientes
//! </code-block>
//! ```

use crate::freedoc::ast::elements::{Element, Table};

/// Serialize elements to the tag format.
pub fn to_tag_str(elements: &[Element]) -> String {
    let mut output = String::new();
    for element in elements {
        write_element(&mut output, element);
    }
    output
}

fn write_element(output: &mut String, element: &Element) {
    match element {
        Element::Heading(heading) => {
            let numbering = match &heading.numbering {
                Some(path) => format!(" numbering=\"{}\"", escape_xml(path)),
                None => String::new(),
            };
            output.push_str(&format!(
                "<heading level=\"{}\"{} title=\"{}\"/>\n",
                heading.level,
                numbering,
                escape_xml(&heading.title)
            ));
        }
        Element::RpaSection(section) => {
            output.push_str(&format!(
                "<rpa-section number=\"{}\" title=\"{}\"/>\n",
                escape_xml(&section.number),
                escape_xml(&section.title)
            ));
        }
        Element::Field(field) => {
            output.push_str(&format!(
                "<field key=\"{}\" value=\"{}\"/>\n",
                escape_xml(&field.key),
                escape_xml(&field.value)
            ));
        }
        Element::Bullet(bullet) => {
            output.push_str(&format!("<bullet text=\"{}\"/>\n", escape_xml(&bullet.text)));
        }
        Element::Numbered(numbered) => {
            output.push_str(&format!(
                "<numbered ordinal=\"{}\" text=\"{}\"/>\n",
                escape_xml(&numbered.ordinal),
                escape_xml(&numbered.text)
            ));
        }
        Element::CheckYes(item) => {
            output.push_str(&format!("<check-yes text=\"{}\"/>\n", escape_xml(&item.text)));
        }
        Element::CheckNo(item) => {
            output.push_str(&format!("<check-no text=\"{}\"/>\n", escape_xml(&item.text)));
        }
        Element::Separator => output.push_str("<separator/>\n"),
        Element::CodeBlock(block) => {
            output.push_str(&format!("<code-block language=\"{}\">\n", block.language));
            output.push_str(&escape_xml(&block.text));
            output.push_str("\n</code-block>\n");
        }
        Element::AsciiDiagram(diagram) => {
            output.push_str("<ascii-diagram>\n");
            output.push_str(&escape_xml(&diagram.text));
            output.push_str("\n</ascii-diagram>\n");
        }
        Element::Table(table) => write_table(output, table),
        Element::Paragraph(paragraph) => {
            output.push_str(&format!(
                "<paragraph>{}</paragraph>\n",
                escape_xml(&paragraph.text)
            ));
        }
    }
}

fn write_table(output: &mut String, table: &Table) {
    output.push_str("<table>\n");
    output.push_str("  <headers>");
    for header in &table.headers {
        output.push_str(&format!("<cell>{}</cell>", escape_xml(header)));
    }
    output.push_str("</headers>\n");
    for row in &table.rows {
        output.push_str("  <row>");
        for cell in row {
            output.push_str(&format!("<cell>{}</cell>", escape_xml(cell)));
        }
        output.push_str("</row>\n");
    }
    output.push_str("</table>\n");
}

/// Escape the XML special characters.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freedoc::ast::elements::{CodeBlock, Field, Heading};

    #[test]
    fn test_field_tag() {
        let elements = vec![Element::Field(Field::new("Responsável", "João Silva"))];
        insta::assert_snapshot!(
            to_tag_str(&elements).trim_end(),
            @r#"<field key="Responsável" value="João Silva"/>"#
        );
    }

    #[test]
    fn test_heading_tag_with_numbering() {
        let elements = vec![Element::Heading(Heading::new(
            2,
            Some("1.1".to_string()),
            "Escopo",
        ))];
        insta::assert_snapshot!(
            to_tag_str(&elements).trim_end(),
            @r#"<heading level="2" numbering="1.1" title="Escopo"/>"#
        );
    }

    #[test]
    fn test_code_block_tag_nests_text() {
        let elements = vec![Element::CodeBlock(CodeBlock::new("sql", "SELECT 1"))];
        let output = to_tag_str(&elements);
        assert_eq!(output, "<code-block language=\"sql\">\nSELECT 1\n</code-block>\n");
    }

    #[test]
    fn test_escaping() {
        let elements = vec![Element::Field(Field::new("Código", "a < b & c"))];
        let output = to_tag_str(&elements);
        assert!(output.contains("a &lt; b &amp; c"));
    }
}

//! Line classification
//!
//! First pass: assign every line a preliminary tag from its own text.
//!
//! Classification follows this specific order (important for correctness):
//! 1. Blank lines
//! 2. Copy-code markers (the marker phrase, or a language name directly
//!    followed by the marker phrase)
//! 3. ASCII diagram characters
//! 4. Table rows (pipe-delimited or tab-separated)
//! 5. Separator rules
//! 6. Checklist glyphs
//! 7. Section headers, when the code score stays below the guard
//! 8. Known `Key: Value` fields, when the code score stays below the guard
//! 9. Bullet glyphs, when the code score stays below the guard
//! 10. Default to unknown, resolved by the propagation pass
//!
//! The score guards let genuinely code-like lines escape the document
//! categories while true document idioms win over superficially code-like
//! punctuation.

use crate::freedoc::lexing::line::{Line, LineTag};
use crate::freedoc::lexing::predicates;
use crate::freedoc::lexing::scoring::SCORE_GUARD;

/// Classify a single line.
///
/// `next_trimmed` is a one-line peek used only to recognize a bare
/// language name directly followed by a copy-code marker; no other
/// cross-line state enters this pass.
pub fn classify_line(line: &Line, next_trimmed: Option<&str>) -> LineTag {
    let trimmed = line.trimmed.as_str();

    if trimmed.is_empty() {
        return LineTag::Empty;
    }
    if predicates::is_copy_code_marker(trimmed) {
        return LineTag::CodeMarker;
    }
    if predicates::is_language_name(trimmed)
        && next_trimmed.map_or(false, predicates::is_copy_code_marker)
    {
        return LineTag::CodeMarker;
    }
    if predicates::is_ascii_art_line(trimmed) {
        return LineTag::Ascii;
    }
    if predicates::is_table_line(&line.raw, trimmed) {
        return LineTag::Table;
    }
    if predicates::is_separator_line(trimmed) {
        return LineTag::Separator;
    }
    if predicates::is_check_yes_line(trimmed) {
        return LineTag::CheckYes;
    }
    if predicates::is_check_no_line(trimmed) {
        return LineTag::CheckNo;
    }
    if predicates::is_section_line(trimmed) && line.score < SCORE_GUARD {
        return LineTag::Section;
    }
    if predicates::is_field_line(trimmed) && line.score < SCORE_GUARD {
        return LineTag::Field;
    }
    if predicates::is_bullet_line(trimmed) && line.score < SCORE_GUARD {
        return LineTag::Bullet;
    }

    LineTag::Unknown
}

/// Run the first pass over the whole line array.
pub fn classify_all(lines: &mut [Line]) {
    let tags: Vec<LineTag> = (0..lines.len())
        .map(|i| {
            let next_trimmed = lines.get(i + 1).map(|next| next.trimmed.as_str());
            classify_line(&lines[i], next_trimmed)
        })
        .collect();

    for (line, tag) in lines.iter_mut().zip(tags) {
        line.tag = tag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> LineTag {
        classify_line(&Line::new(0, text), None)
    }

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify(""), LineTag::Empty);
        assert_eq!(classify("   "), LineTag::Empty);
    }

    #[test]
    fn test_classify_marker_phrase() {
        assert_eq!(classify("Copy code"), LineTag::CodeMarker);
        assert_eq!(classify("copiar código"), LineTag::CodeMarker);
    }

    #[test]
    fn test_classify_language_name_before_marker() {
        let line = Line::new(0, "python");
        assert_eq!(classify_line(&line, Some("Copy code")), LineTag::CodeMarker);
        // A bare language name without the marker stays unclassified
        assert_eq!(classify_line(&line, Some("def foo():")), LineTag::Unknown);
        assert_eq!(classify_line(&line, None), LineTag::Unknown);
    }

    #[test]
    fn test_classify_ascii() {
        assert_eq!(classify("┌────────┐"), LineTag::Ascii);
        assert_eq!(classify("│ Portal │"), LineTag::Ascii);
    }

    #[test]
    fn test_classify_table() {
        assert_eq!(classify("| Nome | Valor |"), LineTag::Table);
        assert_eq!(classify("Nome\tValor\tData"), LineTag::Table);
    }

    #[test]
    fn test_classify_separator() {
        assert_eq!(classify("--------"), LineTag::Separator);
        assert_eq!(classify("════════"), LineTag::Separator);
    }

    #[test]
    fn test_classify_checks() {
        assert_eq!(classify("✓ Acesso validado"), LineTag::CheckYes);
        assert_eq!(classify("✗ Pendência aberta"), LineTag::CheckNo);
    }

    #[test]
    fn test_classify_section() {
        assert_eq!(classify("1. Introdução"), LineTag::Section);
        assert_eq!(classify("1.1 Escopo"), LineTag::Section);
        assert_eq!(classify("RPA 3 - Conciliação"), LineTag::Section);
        assert_eq!(classify("OBJETIVO GERAL"), LineTag::Section);
    }

    #[test]
    fn test_classify_field() {
        assert_eq!(classify("Responsável: João Silva"), LineTag::Field);
        assert_eq!(classify("Sistema: SAP ECC"), LineTag::Field);
    }

    #[test]
    fn test_classify_bullet() {
        assert_eq!(classify("- Fazer login"), LineTag::Bullet);
        assert_eq!(classify("• Conferir saldo"), LineTag::Bullet);
    }

    #[test]
    fn test_code_beats_document_categories() {
        // Scores past the guard escape the section/field/bullet tags
        assert_eq!(classify("SELECT * FROM clientes WHERE id = 1"), LineTag::Unknown);
        assert_eq!(classify("- x = carregar_planilha(caminho)"), LineTag::Unknown);
    }

    #[test]
    fn test_classify_prose_as_unknown() {
        assert_eq!(classify("O robô acessa o portal do banco."), LineTag::Unknown);
    }

    #[test]
    fn test_classify_all_sets_every_tag() {
        let mut lines: Vec<Line> = ["Objetivo", "", "- item"]
            .iter()
            .enumerate()
            .map(|(i, text)| Line::new(i, text))
            .collect();
        classify_all(&mut lines);
        assert_eq!(lines[0].tag, LineTag::Section);
        assert_eq!(lines[1].tag, LineTag::Empty);
        assert_eq!(lines[2].tag, LineTag::Bullet);
    }
}

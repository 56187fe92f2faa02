//! Line scoring
//!
//! Computes the code-likelihood score of a single line. No individual
//! signal is reliable on business prose with embedded pseudo-code, so the
//! score is a weighted sum over three signal families plus a set of
//! penalties for known document idioms:
//!
//! 1. Structural patterns (+3 per match): definition syntax, control flow,
//!    SQL verbs, imports, comments, indentation and friends
//! 2. Leading code keyword (+2, applied once)
//! 3. Shape signals (small fractional increments): brackets, call syntax,
//!    string literals, identifier casing
//! 4. Penalties (negative): uppercase titles, numbered headings, document
//!    field labels and section keywords
//!
//! The thresholds the classifier passes compare against are empirically
//! tuned constants. They live here, next to the signal tables, so that
//! calibration against a new corpus touches a single module.

use crate::freedoc::lexing::predicates;
use once_cell::sync::Lazy;
use regex::Regex;

/// Score at or above which an unclassified line seeds a code block.
pub const SCORE_SEED: f32 = 3.0;
/// Score at or above which a line can no longer be a section, field or bullet.
pub const SCORE_GUARD: f32 = 2.0;
/// Minimum score for a neighbor line to join a score-seeded code block.
pub const SCORE_NEIGHBOR: f32 = 1.0;

/// Weight of one structural pattern match.
const PATTERN_WEIGHT: f32 = 3.0;
/// Weight of a leading code keyword.
const KEYWORD_WEIGHT: f32 = 2.0;

/// Structural code patterns, [`PATTERN_WEIGHT`] each.
///
/// Every matching pattern accumulates, so a dense line can outscore all
/// penalties. Patterns are matched against the raw line: leading
/// whitespace carries the indentation signal.
static CODE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // function / procedure definitions
        r"(?i)^\s*(def|function|func|fn|sub|procedure|class)\s+\w+",
        // control flow opening a block
        r"(?i)^\s*(if|elif|else|for|foreach|while|switch|try|except|catch|finally)\b.*[{:)]\s*$",
        // assignment to a structured literal
        r"\w+\s*=\s*[\[{(]",
        // bare call statement
        r"^\s*[\w.]+\([^()]*\)\s*;?\s*$",
        // SQL verbs
        r"(?i)^\s*(select|insert|update|delete|create|alter|drop|merge)\s",
        // dictionary / object entry
        r#"^\s*["'][^"']+["']\s*:"#,
        // closing bracket line
        r"^\s*[}\])]+[,;]?\s*$",
        // imports and includes
        r"(?i)^\s*(import|from|include|#include|using|require)\s+\S",
        // comment prefixes
        r"^\s*(#|//|--)\s*\S",
        // indented continuation (tab or 2+ spaces)
        r"^(\t+| {2,})\S",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Keywords that give [`KEYWORD_WEIGHT`] when they open the line.
const CODE_KEYWORDS: &[&str] = &[
    "def", "function", "func", "fn", "sub", "class", "if", "else", "elif", "for", "foreach",
    "while", "do", "switch", "case", "try", "except", "catch", "finally", "return", "import",
    "from", "select", "insert", "update", "delete", "create", "var", "let", "const", "dim", "set",
    "print", "end", "public", "private", "static", "void", "new",
];

static CALL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+\(").unwrap());
static METHOD_CALL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\w+\(").unwrap());
static STRING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]*"|'[^']*'"#).unwrap());
static ASSIGN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\s*=\s*[^=\s]").unwrap());
static SNAKE_CASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z][a-z0-9]*_[a-z0-9_]+\b").unwrap());
static CAMEL_CASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]+[A-Z][A-Za-z0-9]*\b").unwrap());
static LITERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(NULL|null|None|nil|true|True|false|False)\b").unwrap());
static NUMBERED_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)*[.)]?\s+\S").unwrap());

/// Characters counted as structural for the long-line penalty.
const STRUCTURAL_CHARS: &[char] = &['{', '}', '(', ')', ';', '='];

/// Compute the code-likelihood score of one raw line.
///
/// Pure function of the line text. Blank lines score zero.
pub fn code_score(raw: &str) -> f32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;

    for pattern in CODE_PATTERNS.iter() {
        if pattern.is_match(raw) {
            score += PATTERN_WEIGHT;
        }
    }

    if starts_with_keyword(trimmed) {
        score += KEYWORD_WEIGHT;
    }

    score += shape_score(trimmed);
    score += penalty_score(raw, trimmed);

    score
}

/// Check whether the line opens with one of the code keywords.
fn starts_with_keyword(trimmed: &str) -> bool {
    let lower = trimmed.to_lowercase();
    CODE_KEYWORDS.iter().any(|keyword| {
        lower.starts_with(keyword)
            && lower[keyword.len()..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric() && c != '_')
    })
}

/// Small positive increments from the general shape of the line.
fn shape_score(trimmed: &str) -> f32 {
    let mut score = 0.0;

    if trimmed
        .chars()
        .any(|c| matches!(c, '{' | '}' | '(' | ')' | ';' | '[' | ']'))
    {
        score += 1.0;
    }
    if CALL_RE.is_match(trimmed) {
        score += 1.0;
    }
    if METHOD_CALL_RE.is_match(trimmed) {
        score += 2.0;
    }
    if STRING_RE.is_match(trimmed) {
        score += 0.5;
    }
    if ASSIGN_RE.is_match(trimmed) {
        score += 1.0;
    }
    score += 0.5 * SNAKE_CASE_RE.find_iter(trimmed).count() as f32;
    score += 0.5 * CAMEL_CASE_RE.find_iter(trimmed).count() as f32;
    if LITERAL_RE.is_match(trimmed) {
        score += 1.0;
    }

    score
}

/// Negative adjustments for known document idioms.
fn penalty_score(raw: &str, trimmed: &str) -> f32 {
    let mut score = 0.0;

    if raw.chars().count() > 100 && !raw.contains(STRUCTURAL_CHARS) {
        score -= 2.0;
    }
    if predicates::is_upper_title(trimmed) {
        score -= 3.0;
    }
    if NUMBERED_HEADING_RE.is_match(trimmed) {
        score -= 3.0;
    }
    if predicates::matches_field_label(trimmed) {
        score -= 3.0;
    }
    if predicates::matches_section_keyword(trimmed) {
        score -= 3.0;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_scores_zero() {
        assert_eq!(code_score(""), 0.0);
        assert_eq!(code_score("   "), 0.0);
    }

    #[test]
    fn test_sql_statement_scores_high() {
        let score = code_score("SELECT * FROM customers WHERE id = 1");
        assert!(score >= SCORE_SEED, "score was {}", score);
    }

    #[test]
    fn test_python_definition_scores_high() {
        let score = code_score("def process_invoice(invoice_id):");
        assert!(score >= SCORE_SEED, "score was {}", score);
    }

    #[test]
    fn test_indented_statement_scores() {
        let score = code_score("    total = total + 1");
        assert!(score >= SCORE_NEIGHBOR, "score was {}", score);
    }

    #[test]
    fn test_field_label_is_penalized() {
        let score = code_score("Responsável: João Silva");
        assert!(score < SCORE_GUARD, "score was {}", score);
    }

    #[test]
    fn test_section_keyword_is_penalized() {
        let score = code_score("Objetivo do processo");
        assert!(score < SCORE_GUARD, "score was {}", score);
    }

    #[test]
    fn test_uppercase_title_is_penalized() {
        let score = code_score("VISÃO GERAL DO PROCESSO");
        assert!(score < 0.0, "score was {}", score);
    }

    #[test]
    fn test_numbered_heading_is_penalized() {
        let score = code_score("6.4.5 Tratamento de exceções");
        assert!(score < SCORE_GUARD, "score was {}", score);
    }

    #[test]
    fn test_prose_scores_low() {
        let score = code_score("O robô acessa o portal e faz o download dos arquivos.");
        assert!(score < SCORE_GUARD, "score was {}", score);
    }

    #[test]
    fn test_method_call_shape() {
        let score = code_score("driver.find_element(By.ID, 'login').click()");
        assert!(score >= SCORE_SEED, "score was {}", score);
    }
}

//! Structural line predicates
//!
//! Boolean tests used by the first classification pass, plus the fixed
//! vocabularies they consult. All predicates are pure functions of the
//! line text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Known document field labels (`Key: Value` lines).
///
/// Accented and plain spellings are both listed; the source documents mix
/// them freely.
pub const FIELD_LABELS: &[&str] = &[
    "responsável",
    "responsavel",
    "autor",
    "autora",
    "data",
    "versão",
    "versao",
    "área",
    "area",
    "departamento",
    "setor",
    "sistema",
    "sistemas",
    "frequência",
    "frequencia",
    "periodicidade",
    "horário",
    "horario",
    "prazo",
    "status",
    "cliente",
    "projeto",
    "código",
    "codigo",
    "complexidade",
    "prioridade",
    "aprovador",
    "solicitante",
    "analista",
    "desenvolvedor",
    "contato",
    "e-mail",
    "email",
    "telefone",
    "descrição",
    "descricao",
    "entrada",
    "entradas",
    "saída",
    "saida",
    "saídas",
    "saidas",
    "volume",
    "volumetria",
    "duração",
    "duracao",
    "ferramenta",
    "ferramentas",
    "tecnologia",
    "tecnologias",
    "ambiente",
    "observação",
    "observacao",
    "observações",
    "observacoes",
];

/// Known business-document section titles.
pub const SECTION_KEYWORDS: &[&str] = &[
    "objetivo",
    "objetivos",
    "escopo",
    "introdução",
    "introducao",
    "visão geral",
    "visao geral",
    "contexto",
    "premissas",
    "restrições",
    "restricoes",
    "requisitos",
    "regras de negócio",
    "regras de negocio",
    "exceções",
    "excecoes",
    "tratamento de erros",
    "fluxo atual",
    "fluxo futuro",
    "processo atual",
    "processo futuro",
    "benefícios",
    "beneficios",
    "riscos",
    "cronograma",
    "arquitetura",
    "infraestrutura",
    "segurança",
    "seguranca",
    "conclusão",
    "conclusao",
    "anexos",
    "referências",
    "referencias",
    "glossário",
    "glossario",
];

/// Phrases that mark a pasted code block ("copy code" artifacts).
pub const COPY_CODE_MARKERS: &[&str] = &["copy code", "copiar código", "copiar codigo"];

/// Language names that precede a copy-code marker in pasted blocks.
pub const LANGUAGE_NAMES: &[&str] = &[
    "python",
    "sql",
    "javascript",
    "js",
    "typescript",
    "ts",
    "java",
    "c#",
    "csharp",
    "vb",
    "vba",
    "powershell",
    "bash",
    "shell",
    "sh",
    "yaml",
    "json",
    "html",
    "css",
    "xml",
    "c",
    "c++",
    "cpp",
    "ruby",
    "php",
    "go",
    "rust",
    "kotlin",
    "swift",
    "r",
    "plaintext",
    "text",
    "pseudocode",
    "pseudocódigo",
    "pseudocodigo",
];

/// Checkmark glyphs opening a completed checklist line.
pub const CHECK_YES_GLYPHS: &[char] = &['✓', '✔', '☑', '✅'];

/// Cross glyphs opening a failed or pending checklist line.
pub const CHECK_NO_GLYPHS: &[char] = &['✗', '✘', '☒', '❌'];

/// Bullet glyphs, each followed by whitespace.
const BULLET_GLYPHS: &[char] = &['-', '*', '•', '◦', '▪', '‣', '–', '—'];

/// Box-drawing, junction and arrow characters that signal an ASCII diagram.
///
/// Plain horizontals (`─`, `═`) are deliberately absent: a line made only
/// of those is a separator rule, not a diagram.
const ASCII_ART_CHARS: &[char] = &[
    '│', '┌', '┐', '└', '┘', '├', '┤', '┬', '┴', '┼', '║', '╔', '╗', '╚', '╝', '╠', '╣', '╦', '╩',
    '╬', '←', '→', '↑', '↓', '⇐', '⇒', '▲', '▼', '◄', '►',
];

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[═─\-*_]{5,}$").unwrap());
static MARKDOWN_HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,3}\s+\S").unwrap());
static NUMERIC_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)*)[.)]?\s+(.+)$").unwrap());
static RPA_HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^rpa\s*\d").unwrap());
static LIST_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3}|[A-Za-z])[.)]\s+(.*)$").unwrap());

/// Whether the trimmed line starts a table row: a `|...|` markdown row or
/// a run of tab-separated cells.
///
/// Tab detection requires two or more tabs. A single leading tab is code
/// indentation far more often than a two-column table.
pub fn is_table_line(raw: &str, trimmed: &str) -> bool {
    if trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|') {
        return true;
    }
    raw.matches('\t').count() >= 2
}

/// Whether the trimmed line is a horizontal separator rule.
pub fn is_separator_line(trimmed: &str) -> bool {
    SEPARATOR_RE.is_match(trimmed)
}

/// Whether the trimmed line contains diagram drawing characters.
pub fn is_ascii_art_line(trimmed: &str) -> bool {
    trimmed.contains(ASCII_ART_CHARS)
}

/// Whether the trimmed line opens with a completed-check glyph.
pub fn is_check_yes_line(trimmed: &str) -> bool {
    trimmed.starts_with(CHECK_YES_GLYPHS)
}

/// Whether the trimmed line opens with a failed-check glyph.
pub fn is_check_no_line(trimmed: &str) -> bool {
    trimmed.starts_with(CHECK_NO_GLYPHS)
}

/// Whether the trimmed line opens with a bullet glyph followed by
/// whitespace.
pub fn is_bullet_line(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(glyph) if BULLET_GLYPHS.contains(&glyph) => {
            chars.next().map_or(false, |c| c.is_whitespace())
        }
        _ => false,
    }
}

/// Strip the bullet or check glyph and the whitespace after it.
pub fn strip_leading_glyph(trimmed: &str) -> &str {
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(_) => chars.as_str().trim_start(),
        None => trimmed,
    }
}

/// Whether the trimmed line is a copy-code marker phrase.
pub fn is_copy_code_marker(trimmed: &str) -> bool {
    let lower = trimmed.to_lowercase();
    COPY_CODE_MARKERS.contains(&lower.as_str())
}

/// Whether the trimmed line is a bare language name.
pub fn is_language_name(trimmed: &str) -> bool {
    let lower = trimmed.to_lowercase();
    LANGUAGE_NAMES.contains(&lower.as_str())
}

/// Whether the trimmed line matches one of the known field labels followed
/// by a colon.
pub fn matches_field_label(trimmed: &str) -> bool {
    match trimmed.split_once(':') {
        Some((key, _)) => {
            let key = key.trim().to_lowercase();
            FIELD_LABELS.contains(&key.as_str())
        }
        None => false,
    }
}

/// Whether the trimmed line is a `Key: Value` field with a known key and a
/// non-empty value.
pub fn is_field_line(trimmed: &str) -> bool {
    match trimmed.split_once(':') {
        Some((key, value)) => {
            let key = key.trim().to_lowercase();
            FIELD_LABELS.contains(&key.as_str()) && !value.trim().is_empty()
        }
        None => false,
    }
}

/// Whether the line starts with a known business-document section title,
/// ignoring any leading numbering or markdown hashes.
pub fn matches_section_keyword(trimmed: &str) -> bool {
    let lower = trimmed.to_lowercase();
    if RPA_HEADING_RE.is_match(&lower) {
        return true;
    }
    let stripped = lower
        .trim_start_matches(|c: char| {
            c == '#' || c == '.' || c == ')' || c.is_ascii_digit() || c.is_whitespace()
        })
        .trim_start();
    SECTION_KEYWORDS
        .iter()
        .any(|keyword| stripped.starts_with(keyword))
}

/// Whether the trimmed line is a short all-uppercase title.
pub fn is_upper_title(trimmed: &str) -> bool {
    !trimmed.is_empty()
        && trimmed.chars().count() <= 60
        && trimmed.chars().any(|c| c.is_alphabetic())
        && !trimmed.chars().any(|c| c.is_lowercase())
}

/// Whether the trimmed line is a section header.
///
/// Multi-segment numeric paths (`1.1`, `1.1.1`) are always sections. A
/// single-segment `N. Title` form is a section only when the title looks
/// like one: short, uppercase-initial and without trailing sentence
/// punctuation. Everything else falls through to the list resolution in
/// the propagation pass.
pub fn is_section_line(trimmed: &str) -> bool {
    if RPA_HEADING_RE.is_match(trimmed) {
        return true;
    }
    if MARKDOWN_HEADING_RE.is_match(trimmed) {
        return true;
    }
    if let Some(caps) = NUMERIC_PATH_RE.captures(trimmed) {
        let path = caps.get(1).map_or("", |m| m.as_str());
        let title = caps.get(2).map_or("", |m| m.as_str());
        if path.contains('.') {
            return true;
        }
        return is_short_title(title);
    }
    if matches_section_keyword(trimmed) {
        return true;
    }
    is_upper_title(trimmed)
}

/// Split an ordinal list marker (`1.`, `a)`) from the rest of the line.
pub fn split_list_marker(trimmed: &str) -> Option<(String, String)> {
    LIST_MARKER_RE.captures(trimmed).map(|caps| {
        (
            caps.get(1).map_or("", |m| m.as_str()).to_string(),
            caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
        )
    })
}

/// Whether the trimmed line carries an ordinal list marker.
pub fn is_list_marker_line(trimmed: &str) -> bool {
    LIST_MARKER_RE.is_match(trimmed)
}

/// Short uppercase-initial text without trailing sentence punctuation.
fn is_short_title(title: &str) -> bool {
    let starts_upper = title.chars().next().map_or(false, |c| c.is_uppercase());
    let word_count = title.split_whitespace().count();
    let ends_sentence = title.ends_with(['.', ';', ':']);
    starts_upper && word_count <= 6 && !ends_sentence
}

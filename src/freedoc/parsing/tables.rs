//! Table sub-parser
//!
//! Converts a run of table-tagged lines into a headers+rows matrix. A run
//! that yields fewer than two parsed rows is dropped silently; the
//! renderer simply sees one fewer element.

use crate::freedoc::ast::elements::Table;

/// Parse the raw lines of a table run.
///
/// Markdown-pipe rows are detected by a `|...|` line anywhere in the run;
/// otherwise cells split on literal tabs. The first parsed row becomes the
/// headers, and every row is padded with empty strings to the widest
/// column count observed across the whole run, header included.
pub fn parse_table(raw_lines: &[&str]) -> Option<Table> {
    if raw_lines.len() < 2 {
        return None;
    }

    let is_markdown = raw_lines.iter().any(|line| is_pipe_row(line.trim()));

    let mut rows: Vec<Vec<String>> = Vec::new();
    for line in raw_lines {
        let trimmed = line.trim();
        if is_markdown {
            if trimmed.is_empty() || is_separator_row(trimmed) {
                continue;
            }
            rows.push(split_pipe_row(trimmed));
        } else {
            rows.push(line.split('\t').map(|cell| cell.trim().to_string()).collect());
        }
    }

    if rows.len() < 2 {
        return None;
    }

    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }

    let headers = rows.remove(0);
    Some(Table::new(headers, rows))
}

/// `|...|` shaped row.
fn is_pipe_row(trimmed: &str) -> bool {
    trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Markdown alignment row: pipes, dashes, colons and spaces only.
fn is_separator_row(trimmed: &str) -> bool {
    trimmed.starts_with('|')
        && trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

/// Split a pipe row into trimmed cells, dropping the empty edge cells the
/// outer pipes produce.
fn split_pipe_row(trimmed: &str) -> Vec<String> {
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

//! Code-block propagation
//!
//! Second pass: extend the `code` classification across adjacent lines and
//! resolve every remaining `unknown` tag. Two sub-passes run in order:
//!
//! 1. Marker-seeded propagation. Explicit copy-code markers are a strong
//!    signal, so the walk claims every unknown or blank line after a
//!    marker until it hits a section or separator, or a blank run followed
//!    by a clearly non-code line.
//! 2. Score-seeded propagation. High-scoring unknown lines become code and
//!    expand outward in both directions, but only through neighbors that
//!    show at least weak code signal themselves. This keeps trailing prose
//!    paragraphs out of score-detected blocks.
//!
//! Afterwards every line still tagged `unknown` resolves to `numbered` or
//! `paragraph`; the transient tag does not survive this pass.

use crate::freedoc::lexing::line::{Line, LineTag};
use crate::freedoc::lexing::predicates;
use crate::freedoc::lexing::scoring::{SCORE_NEIGHBOR, SCORE_SEED};

/// Maximum length for a line to resolve as a numbered list item.
const NUMBERED_MAX_CHARS: usize = 200;

/// Run both propagation sub-passes.
pub fn propagate_blocks(lines: &mut [Line]) {
    propagate_from_markers(lines);
    propagate_from_scores(lines);
}

/// Walk forward from every copy-code marker, converting unknown and blank
/// lines to code.
///
/// The walk stops at a section or separator boundary, and at a blank run
/// whose first following line is a section or scores negative. Lines that
/// already carry another tag keep it; the walk steps over them.
fn propagate_from_markers(lines: &mut [Line]) {
    for start in 0..lines.len() {
        if lines[start].tag != LineTag::CodeMarker {
            continue;
        }

        let mut i = start + 1;
        while i < lines.len() {
            match lines[i].tag {
                LineTag::Section | LineTag::Separator => break,
                LineTag::Unknown => {
                    lines[i].tag = LineTag::Code;
                    i += 1;
                }
                LineTag::Empty => {
                    let next = next_non_blank(lines, i);
                    match next {
                        Some(j)
                            if lines[j].tag != LineTag::Section
                                && lines[j].score >= 0.0 =>
                        {
                            for blank in i..j {
                                lines[blank].tag = LineTag::Code;
                            }
                            i = j;
                        }
                        _ => break,
                    }
                }
                _ => i += 1,
            }
        }
    }
}

/// Convert every high-scoring unknown line to code and expand outward
/// through neighbors that also show code signal.
fn propagate_from_scores(lines: &mut [Line]) {
    for i in 0..lines.len() {
        if lines[i].tag != LineTag::Unknown || lines[i].score < SCORE_SEED {
            continue;
        }
        lines[i].tag = LineTag::Code;
        expand(lines, i, Direction::Backward);
        expand(lines, i, Direction::Forward);
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Backward,
    Forward,
}

impl Direction {
    fn step(&self, from: usize, limit: usize) -> Option<usize> {
        match self {
            Direction::Backward => from.checked_sub(1),
            Direction::Forward => {
                let next = from + 1;
                (next < limit).then_some(next)
            }
        }
    }
}

/// Expand a score-seeded block from `seed` in one direction.
///
/// A neighbor joins while it is unknown or blank and either scores at
/// least [`SCORE_NEIGHBOR`], or is part of a blank run whose far side is a
/// code-eligible line scoring at least [`SCORE_NEIGHBOR`]. The first line
/// breaking both conditions ends the expansion.
fn expand(lines: &mut [Line], seed: usize, direction: Direction) {
    let mut current = seed;
    while let Some(i) = direction.step(current, lines.len()) {
        match lines[i].tag {
            LineTag::Unknown => {
                if lines[i].score >= SCORE_NEIGHBOR {
                    lines[i].tag = LineTag::Code;
                    current = i;
                } else {
                    break;
                }
            }
            LineTag::Empty => {
                match beyond_blank_run(lines, i, direction) {
                    Some(far)
                        if matches!(lines[far].tag, LineTag::Unknown | LineTag::Code)
                            && lines[far].score >= SCORE_NEIGHBOR =>
                    {
                        let (lo, hi) = if far < i { (far + 1, i + 1) } else { (i, far) };
                        for blank in lo..hi {
                            lines[blank].tag = LineTag::Code;
                        }
                        current = if far < i { far + 1 } else { far - 1 };
                    }
                    _ => break,
                }
            }
            _ => break,
        }
    }
}

/// First non-blank index at or after `from`.
fn next_non_blank(lines: &[Line], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&i| lines[i].tag != LineTag::Empty)
}

/// First non-blank index past the blank run containing `from`, moving in
/// `direction`.
fn beyond_blank_run(lines: &[Line], from: usize, direction: Direction) -> Option<usize> {
    let mut i = from;
    loop {
        match direction.step(i, lines.len()) {
            Some(j) if lines[j].tag == LineTag::Empty => i = j,
            Some(j) => return Some(j),
            None => return None,
        }
    }
}

/// Resolve every line still tagged unknown into `numbered` or `paragraph`.
pub fn resolve_unknowns(lines: &mut [Line]) {
    for line in lines.iter_mut() {
        if line.tag != LineTag::Unknown {
            continue;
        }
        line.tag = if predicates::is_list_marker_line(&line.trimmed)
            && line.trimmed.chars().count() < NUMBERED_MAX_CHARS
        {
            LineTag::Numbered
        } else {
            LineTag::Paragraph
        };
    }
}

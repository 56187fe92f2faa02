//! RPA section element
//!
//! Automation documents title their process chapters as `RPA <n> - Título`.
//! The form is kept distinct from ordinary headings so the renderer can
//! apply its own chapter styling.

use serde::Serialize;
use std::fmt;

/// An `RPA <n>` process chapter title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpaSection {
    /// The process number as written, without the `RPA` prefix.
    pub number: String,
    /// Title after the number, empty when the line carries none.
    pub title: String,
}

impl RpaSection {
    pub fn new(number: &str, title: &str) -> Self {
        RpaSection {
            number: number.to_string(),
            title: title.to_string(),
        }
    }
}

impl fmt::Display for RpaSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RpaSection({}, '{}')", self.number, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpa_section_creation() {
        let section = RpaSection::new("3", "Conciliação");
        assert_eq!(section.number, "3");
        assert_eq!(section.title, "Conciliação");
    }
}

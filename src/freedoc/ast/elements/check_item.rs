//! Checklist item element
//!
//! A line opened by a check or cross glyph. Whether the item counts as
//! done or pending is carried by the wrapping [`Element`] variant, not by
//! this struct.
//!
//! [`Element`]: super::element::Element

use serde::Serialize;

/// A checklist entry, leading glyph stripped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckItem {
    pub text: String,
}

impl CheckItem {
    pub fn new(text: &str) -> Self {
        CheckItem {
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_item_creation() {
        let item = CheckItem::new("Acesso validado");
        assert_eq!(item.text, "Acesso validado");
    }
}

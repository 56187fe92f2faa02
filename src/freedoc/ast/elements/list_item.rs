//! List item elements
//!
//! Bullet and numbered items are singletons: each input line produces one
//! element, and consecutive items are left adjacent in the output sequence
//! for the renderer to group visually.

use serde::Serialize;
use std::fmt;

/// An unordered list item, leading glyph stripped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bullet {
    pub text: String,
}

impl Bullet {
    pub fn new(text: &str) -> Self {
        Bullet {
            text: text.to_string(),
        }
    }
}

impl fmt::Display for Bullet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bullet('{}')", self.text)
    }
}

/// An ordered list item with its ordinal as written (`"1"`, `"a"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Numbered {
    pub ordinal: String,
    pub text: String,
}

impl Numbered {
    pub fn new(ordinal: &str, text: &str) -> Self {
        Numbered {
            ordinal: ordinal.to_string(),
            text: text.to_string(),
        }
    }
}

impl fmt::Display for Numbered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Numbered({}, '{}')", self.ordinal, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_creation() {
        let bullet = Bullet::new("Fazer login");
        assert_eq!(bullet.text, "Fazer login");
    }

    #[test]
    fn test_numbered_creation() {
        let numbered = Numbered::new("a", "Conferir saldo");
        assert_eq!(numbered.ordinal, "a");
        assert_eq!(format!("{}", numbered), "Numbered(a, 'Conferir saldo')");
    }
}

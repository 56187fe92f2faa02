//! Field element
//!
//! A `Key: Value` metadata line with the key drawn from the fixed
//! document-field vocabulary. The line is split on the first colon only,
//! so values may themselves contain colons.

use serde::Serialize;
use std::fmt;

/// A key/value metadata field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: String,
    pub value: String,
}

impl Field {
    pub fn new(key: &str, value: &str) -> Self {
        Field {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Split a field line on its first colon.
    pub fn from_line(trimmed: &str) -> Self {
        match trimmed.split_once(':') {
            Some((key, value)) => Field::new(key.trim(), value.trim()),
            None => Field::new(trimmed.trim(), ""),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field('{}': '{}')", self.key, self.value)
    }
}

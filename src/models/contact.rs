//! Contact model representing a single directory entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A name/phone pair stored by the directory.
///
/// The `name` field is the contact's identity for lookup, update and delete.
/// Nothing enforces uniqueness; name-based operations act on the first match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Contact {
    /// Display name, also used as the lookup key
    pub name: String,

    /// Phone number, stored verbatim
    pub phone: String,
}

impl Contact {
    /// Create a new contact.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Whether `query` occurs in the name or the phone number (case-sensitive).
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query) || self.phone.contains(query)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Phone: {}", self.name, self.phone)
    }
}

//! Dotted-path addressing for document nodes.

use crate::error::StashError;
use std::fmt;

/// A validated dotted configuration key, e.g. `"server.port"`.
///
/// Keys split on `.` into ordered, non-empty segments. There is no escaping
/// syntax: a segment cannot contain a literal dot. The empty key is invalid
/// input and never resolves to the document root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted key into a path.
    pub fn parse(raw: &str) -> Result<Self, StashError> {
        if raw.is_empty() {
            return Err(StashError::InvalidKey {
                key: raw.to_string(),
                reason: "key must not be empty".to_string(),
            });
        }
        if raw.split('.').any(str::is_empty) {
            return Err(StashError::InvalidKey {
                key: raw.to_string(),
                reason: "key contains an empty segment".to_string(),
            });
        }
        Ok(Self {
            segments: raw.split('.').map(String::from).collect(),
        })
    }

    /// Ordered path segments, root-most first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Proper prefixes of this path in root-to-leaf order.
    ///
    /// `"a.b.c"` yields `"a"` then `"a.b"`; a single-segment path yields
    /// nothing.
    pub fn ancestors(&self) -> impl Iterator<Item = KeyPath> + '_ {
        (1..self.segments.len()).map(|len| KeyPath {
            segments: self.segments[..len].to_vec(),
        })
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

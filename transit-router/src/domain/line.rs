//! Transit lines.

use std::fmt;

/// A named service grouping many edges.
///
/// Lines are identified by exact name; the edges that belong to a line carry
/// the same string in [`EdgeTransport::line_name`](super::EdgeTransport::line_name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line {
    name: String,
}

impl Line {
    /// Create a line with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the line name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Line {
    fn from(name: &str) -> Self {
        Line::new(name)
    }
}

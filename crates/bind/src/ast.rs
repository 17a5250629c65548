//! Defines the parsed form of a bind path.

/// A single step in a bind path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object key (e.g., `.name`).
    Key(String),
    /// An array index (e.g., `[0]`).
    Index(usize),
}

//! Bind paths connect template fields and table columns to runtime data.
//!
//! Resolution is total: a path that points at nothing resolves to an empty
//! string, so a half-filled preview still renders.

pub mod ast;
pub mod error;
mod parser;

pub use ast::PathSegment;
pub use error::BindError;

use folio_types::{Row, Scalar};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A parsed bind path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindPath {
    source: String,
    segments: Vec<PathSegment>,
}

impl BindPath {
    pub fn parse(input: &str) -> Result<Self, BindError> {
        let segments = parser::parse_path(input)?;
        Ok(Self {
            source: input.trim().to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Walks the path through a JSON document.
    pub fn select<'v>(&self, data: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(data, |current, segment| match segment {
                PathSegment::Key(key) => current.get(key.as_str()),
                PathSegment::Index(index) => current.get(*index),
            })
    }

    /// Resolves the path to display text, or an empty string when absent.
    pub fn resolve(&self, data: &Value) -> String {
        self.select(data).map(value_text).unwrap_or_default()
    }

    /// Resolves against a flat row.
    ///
    /// Rows have no nesting, so a dotted path is first tried as a literal key
    /// and then by its last key segment.
    pub fn resolve_row(&self, row: &Row) -> String {
        if row.contains_key(&self.source) {
            return row.text(&self.source);
        }
        match self.segments.iter().rev().find_map(|s| match s {
            PathSegment::Key(k) => Some(k.as_str()),
            PathSegment::Index(_) => None,
        }) {
            Some(key) => row.text(key),
            None => Scalar::EMPTY.to_string(),
        }
    }
}

impl FromStr for BindPath {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BindPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Resolves `path` against `data`; unparsable or absent paths give `""`.
pub fn resolve(data: &Value, path: &str) -> String {
    BindPath::parse(path)
        .map(|p| p.resolve(data))
        .unwrap_or_default()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Containers are not scalars; they have no display text.
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

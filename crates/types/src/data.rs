//! Runtime data bound into a template for a single preview.
//!
//! Rows are flat key/scalar maps. Lookups never fail: an absent key yields
//! [`Scalar::EMPTY`], which renders as an empty string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single cell value in a data row.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(untagged)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Scalar {
    /// Sentinel returned for absent keys.
    pub const EMPTY: Scalar = Scalar::Null;

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", b),
            // Integral values print without a fractional part, like JSON numbers do.
            Scalar::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

static EMPTY_SCALAR: Scalar = Scalar::Null;

/// A flat key/scalar record produced by a bound query.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, Scalar>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a key, returning [`Scalar::EMPTY`] when absent.
    pub fn get(&self, key: &str) -> &Scalar {
        self.0.get(key).unwrap_or(&EMPTY_SCALAR)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The display text of a key, or an empty string.
    pub fn text(&self, key: &str) -> String {
        self.get(key).to_string()
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Which runtime collection a table draws its rows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBinding<'a> {
    /// The shared `items` list.
    Items,
    /// A named entry in `contentDetails`.
    Named(&'a str),
}

/// Data supplied per preview invocation.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeData {
    #[serde(default)]
    pub items: Vec<Row>,
    #[serde(default)]
    pub content_details: BTreeMap<String, Vec<Row>>,
}

impl RuntimeData {
    pub fn new(items: Vec<Row>) -> Self {
        Self {
            items,
            content_details: BTreeMap::new(),
        }
    }

    pub fn with_content(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        self.content_details.insert(name.into(), rows);
        self
    }

    /// Rows for a table binding. A missing named entry is an empty slice.
    pub fn rows_for(&self, binding: TableBinding<'_>) -> &[Row] {
        match binding {
            TableBinding::Items => &self.items,
            TableBinding::Named(name) => self
                .content_details
                .get(name)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }
}

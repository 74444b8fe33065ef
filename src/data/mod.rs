// Data module for decoding service feeds into typed results
// Author: Gabriel Demetrios Lafis

mod account;
mod feed;
mod numeric;
mod report;

pub use account::*;
pub use feed::*;
pub use numeric::*;
pub use report::*;

use std::fmt;

use thiserror::Error;

/// Decodes a response body of one feed kind
pub trait FeedDecoder {
    /// The typed result produced by this decoder
    type Output;

    /// Decode a complete response body
    fn decode(&self, body: &str) -> Result<Self::Output, DataError>;

    /// Get the decoder name
    fn name(&self) -> &str;
}

/// Represents a decoded scalar value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Get the value as an integer, if it is one
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float; integers are widened
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::String(_) => None,
        }
    }

    /// Get the value as a string slice, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Check whether the value is numeric
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Value::String(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

/// Insertion-ordered mapping with case-insensitive lookup
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> FieldMap<V> {
    /// Create a new empty map
    pub fn new() -> Self {
        FieldMap {
            entries: Vec::new(),
        }
    }

    /// Insert a value, replacing any entry whose name matches ignoring case
    ///
    /// A replaced entry keeps its position and first spelling.
    pub fn insert<K: Into<String>>(&mut self, name: K, value: V) {
        let name = name.into();
        match self.position(&name) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a value ignoring case
    pub fn get(&self, name: &str) -> Option<&V> {
        self.position(name).map(|i| &self.entries[i].1)
    }

    /// Get the stored spelling of a name, ignoring case in the query
    pub fn key_of(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].0.as_str())
    }

    /// Check if a name is present, ignoring case
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(key, _)| eq_ignore_case(key, name))
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl<V> Default for FieldMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for FieldMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Represents an error in the data module
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Malformed response body: {0}")]
    Decode(#[from] roxmltree::Error),
    #[error("Unexpected document structure: {0}")]
    Structure(String),
    #[error("No valid field called \"{0}\"")]
    FieldNotFound(String),
}

//! Ordered filter documents.
//!
//! MongoDB filters are ordered key-value documents whose values are scalars,
//! nested documents or arrays. [`Document`] keeps entries in insertion order,
//! mirroring the driver's ordered document type, so the JSON produced for a
//! filter is stable from one run to the next.

use std::fmt;

use crate::ast::Operand;

/// A value stored under a document key.
///
/// # Examples
///
/// ```
/// use quang::document::{Document, Value};
///
/// let comparison = Document::new().with("$eq", Value::Integer(1));
/// let filter = Document::new().with("Total", Value::Document(comparison));
///
/// assert_eq!(filter.to_string(), r#"{"Total":{"$eq":1}}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit integer
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Nested document
    Document(Document),

    /// Array of values
    Array(Vec<Value>),
}

impl From<Operand> for Value {
    fn from(operand: Operand) -> Self {
        match operand {
            Operand::Integer(n) => Value::Integer(n),
            Operand::String(s) => Value::String(s),
        }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Document(doc)
    }
}

/// An ordered key-value document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    entries: Vec<(String, Value)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value` and returns the document.
    ///
    /// An existing key keeps its position and has its value replaced; a new
    /// key is appended.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::output::to_json(self))
    }
}

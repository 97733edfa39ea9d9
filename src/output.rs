//! JSON output for translated filters.
//!
//! Documents are rendered in MongoDB's relaxed extended JSON shape: integers
//! are plain JSON numbers, nested documents are objects and arrays stay
//! arrays. Keys appear in insertion order.
//!
//! # Examples
//!
//! ```
//! use quang::{translate, BackendKind};
//! use quang::output::{to_json, to_json_pretty};
//!
//! let filter = translate("Total EQ 1", BackendKind::Mongo).unwrap();
//!
//! // Compact output
//! assert_eq!(to_json(&filter), r#"{"Total":{"$eq":1}}"#);
//!
//! // Pretty output
//! assert!(to_json_pretty(&filter).contains("\n"));
//! ```

use crate::document::{Document, Value};

/// Converts a document to a `serde_json::Value`.
///
/// Comparing two converted values is insensitive to key order, which makes
/// this the form to use when checking a filter against a JSON literal.
pub fn to_value(doc: &Document) -> serde_json::Value {
    serde_json::Value::Object(
        doc.iter()
            .map(|(k, v)| (k.to_string(), value_to_json(v)))
            .collect(),
    )
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Integer(n) => serde_json::Value::Number((*n).into()),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Document(doc) => to_value(doc),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
    }
}

/// Converts a document to compact JSON with no extra whitespace.
pub fn to_json(doc: &Document) -> String {
    to_value(doc).to_string()
}

/// Converts a document to JSON with 2-space indentation.
///
/// ```text
/// {
///   "Total": {
///     "$eq": 1
///   }
/// }
/// ```
pub fn to_json_pretty(doc: &Document) -> String {
    format!("{:#}", to_value(doc))
}

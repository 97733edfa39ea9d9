//! Translates a small filter language into native database filters.
//!
//! ```
//! use quang::{translate, BackendKind};
//!
//! let filter = translate("Title LE /Test/ AND Total EQ 1", BackendKind::Mongo).unwrap();
//! assert_eq!(
//!     filter.to_string(),
//!     r#"{"$and":[{"Title":{"$regex":"/Test/"}},{"Total":{"$eq":1}}]}"#
//! );
//! ```
pub mod ast;
pub mod backend;
pub mod document;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod stack;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{KeywordTable, Operand, Operator, Term, Token};
pub use backend::{Backend, BackendError, BackendKind, MongoBackend};
pub use document::{Document, Value};
pub use error::Error;
pub use lexer::{LexError, Lexer};
pub use output::{to_json, to_json_pretty};
pub use parser::Parser;
pub use stack::Stack;

use log::debug;

/// Translates `expression` into a filter for `backend`.
pub fn translate(expression: &str, backend: BackendKind) -> Result<Document, Error> {
    Translator::new(backend).translate(expression)
}

/// Translates `expression` with a caller-supplied backend.
pub fn translate_with<B: Backend>(expression: &str, backend: &B) -> Result<B::Document, Error> {
    translate_keywords(expression, KeywordTable::default(), backend)
}

fn translate_keywords<B: Backend>(
    expression: &str,
    keywords: KeywordTable,
    backend: &B,
) -> Result<B::Document, Error> {
    debug!("translating {:?} for {}", expression, backend.kind());
    let lexer = Lexer::with_keywords(expression, keywords);
    Parser::new(lexer, backend).parse()
}

/// A configured translator.
///
/// # Examples
///
/// ```
/// use quang::{BackendKind, KeywordTable, Translator};
///
/// let translator = Translator::new(BackendKind::Mongo).keywords(KeywordTable::Legacy);
/// let filter = translator.translate("Total GT 1").unwrap();
/// assert_eq!(filter.to_string(), r#"{"Total":{"$eq":1}}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    backend: BackendKind,
    keywords: KeywordTable,
}

impl Translator {
    pub fn new(backend: BackendKind) -> Self {
        Translator {
            backend,
            keywords: KeywordTable::default(),
        }
    }

    /// Selects the keyword table used to recognise operators.
    pub fn keywords(mut self, keywords: KeywordTable) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    pub fn translate(&self, expression: &str) -> Result<Document, Error> {
        match self.backend {
            BackendKind::Mongo => translate_keywords(expression, self.keywords, &MongoBackend),
            kind => Err(BackendError::UnsupportedBackend(kind).into()),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Translator::new(BackendKind::Mongo)
    }
}

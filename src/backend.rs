//! Code generation for target query languages.
//!
//! The expression engine knows nothing about the query language it produces.
//! Every time it applies an operator it hands the operator and its two
//! operands to a [`Backend`], which returns a native filter fragment. That
//! fragment goes back on the operand stack and may itself become an operand
//! of a later `AND` or `OR`.

pub mod mongo;

use std::fmt;
use std::str::FromStr;

use crate::ast::{Operator, Term};

pub use mongo::MongoBackend;

/// Target query languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// MongoDB filter documents
    Mongo,
    /// SQL `WHERE` clauses (not implemented)
    Sql,
}

impl BackendKind {
    pub fn name(self) -> &'static str {
        match self {
            BackendKind::Mongo => "mongo",
            BackendKind::Sql => "sql",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(BackendKind::Mongo),
            "sql" => Ok(BackendKind::Sql),
            _ => Err(BackendError::UnknownBackend(s.to_string())),
        }
    }
}

/// Errors raised while generating backend code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The backend is known but has no code generator
    #[error("backend '{0}' is not supported")]
    UnsupportedBackend(BackendKind),

    /// The backend name did not match any known backend
    #[error("unknown backend '{0}' (expected 'mongo' or 'sql')")]
    UnknownBackend(String),

    /// The operator has no equivalent in the backend's query language
    #[error("operator {0} does not translate to an associated backend operator")]
    UnmappedOperator(Operator),

    /// An operand of the wrong kind reached an operator
    #[error("{operator} expects {expected} as its {side} operand, got {found}")]
    OperandType {
        operator: Operator,
        side: Side,
        expected: &'static str,
        found: &'static str,
    },
}

/// Which operand of a binary operator an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A code generator for one query language.
pub trait Backend {
    /// The native filter fragment this backend produces.
    type Document;

    fn kind(&self) -> BackendKind;

    /// Native spelling of `op`, or `None` if the language has no equivalent.
    fn symbol(&self, op: Operator) -> Option<&'static str>;

    /// Applies `op` to `left` and `right`, producing one filter fragment.
    fn serialize(
        &self,
        op: Operator,
        left: Term<Self::Document>,
        right: Term<Self::Document>,
    ) -> Result<Self::Document, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_from_str() {
        assert_eq!("mongo".parse::<BackendKind>(), Ok(BackendKind::Mongo));
        assert_eq!("MongoDB".parse::<BackendKind>(), Ok(BackendKind::Mongo));
        assert_eq!("sql".parse::<BackendKind>(), Ok(BackendKind::Sql));
        assert_eq!(
            "redis".parse::<BackendKind>(),
            Err(BackendError::UnknownBackend("redis".into()))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = BackendError::UnsupportedBackend(BackendKind::Sql);
        assert_eq!(err.to_string(), "backend 'sql' is not supported");

        let err = BackendError::OperandType {
            operator: Operator::And,
            side: Side::Left,
            expected: "a document",
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "AND expects a document as its left operand, got string"
        );
    }
}

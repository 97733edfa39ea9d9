use crate::{ast::Operand, backend::BackendError, lexer::LexError};

/// Errors that can occur while translating a filter.
///
/// Every error aborts the translation; no partial filter is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input could not be split into words
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The backend rejected an operator or its operands, or does not exist
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// An operator was applied without enough operands
    #[error(
        "operator / operand mismatch - have(expect) - operators: {operators}(>0), operands: {operands}(>=2)"
    )]
    StackUnderflow { operators: usize, operands: usize },

    /// The filter did not reduce to a single result
    #[error("filter reduced to {count} results, expected exactly 1")]
    ResultArity { count: usize },

    /// Operators nested deeper than the parser allows
    #[error("filter nests operators more than {limit} levels deep")]
    NestingTooDeep { limit: usize },

    /// The filter reduced to a bare word that no operator was applied to
    #[error("'{0}' is not a filter on its own; apply an operator to it")]
    DanglingOperand(Operand),
}

impl Error {
    /// True if the error comes from the shape of the expression rather than
    /// from the backend or the tokenizer.
    pub fn is_malformed_expression(&self) -> bool {
        matches!(
            self,
            Error::StackUnderflow { .. }
                | Error::ResultArity { .. }
                | Error::NestingTooDeep { .. }
                | Error::DanglingOperand(_)
        )
    }
}

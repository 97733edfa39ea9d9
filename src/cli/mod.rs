//! CLI support for quang
//!
//! Provides programmatic access to the `quang` binary's commands so other
//! tools can embed them.

mod operators;
mod translate;

pub use operators::get_operator_reference;
pub use translate::{execute_translate, TranslateOptions};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Translation error, with the offending expression
    #[error("cannot translate '{expression}': {source}")]
    Translate {
        expression: String,
        #[source]
        source: crate::Error,
    },

    /// Unknown backend name on the command line
    #[error(transparent)]
    Backend(#[from] crate::BackendError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No expression given and nothing piped on stdin
    #[error("No filter provided. Pass an expression or pipe one per line to stdin.")]
    NoInput,
}

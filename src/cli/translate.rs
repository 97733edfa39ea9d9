//! Translate filters given on the command line or stdin

use log::info;

use super::CliError;
use crate::{output, BackendKind, KeywordTable, Translator};

/// Options for the translate command
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Filter expressions, one per entry
    pub expressions: Vec<String>,
    /// Target backend
    pub backend: BackendKind,
    /// Treat `GT` as an alias of `EQ`
    pub legacy_gt: bool,
    /// Pretty-print the output
    pub pretty: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        TranslateOptions {
            expressions: Vec::new(),
            backend: BackendKind::Mongo,
            legacy_gt: false,
            pretty: false,
        }
    }
}

/// Translate every expression and return the rendered filters, in order.
///
/// Blank expressions are skipped. The first failure stops the run.
pub fn execute_translate(options: &TranslateOptions) -> Result<Vec<String>, CliError> {
    let keywords = if options.legacy_gt {
        KeywordTable::Legacy
    } else {
        KeywordTable::Standard
    };
    let translator = Translator::new(options.backend).keywords(keywords);

    let expressions: Vec<&str> = options
        .expressions
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .collect();
    if expressions.is_empty() {
        return Err(CliError::NoInput);
    }

    info!(
        "translating {} filter(s) for {}",
        expressions.len(),
        options.backend
    );

    expressions
        .into_iter()
        .map(|expression| {
            translator
                .translate(expression)
                .map(|doc| {
                    if options.pretty {
                        output::to_json_pretty(&doc)
                    } else {
                        output::to_json(&doc)
                    }
                })
                .map_err(|source| CliError::Translate {
                    expression: expression.to_string(),
                    source,
                })
        })
        .collect()
}

//! # Filter Language - Syntax Elements
//!
//! The filter language is a flat, whitespace-separated sequence of words.
//! Each word is either an operator keyword or an operand:
//!
//! ```text
//! Title LE /Test/ AND Total EQ 1
//! ```
//!
//! ## Submodules
//!
//! - **[tokens]** - Tokens produced by the lexer
//! - **[operators]** - The closed operator set, its priorities and keywords
//! - **[expressions]** - Operands and operand-stack terms
//!
//! ## Operators
//!
//! | Keyword | Operator | Priority |
//! |---------|----------|----------|
//! | `OR`    | logical or | 3 |
//! | `AND`   | logical and | 2 |
//! | `EQ` `GT` `GTE` `LT` `LTE` | comparisons | 1 |
//! | `LE`    | pattern match | 1 |
//!
//! A higher priority binds looser, so comparisons group first. Operators of
//! equal priority group to the right:
//!
//! ```text
//! A EQ 1 AND B EQ 2 AND C EQ 3   =>   (A EQ 1) AND ((B EQ 2) AND (C EQ 3))
//! ```
//!
//! There are no parentheses, no unary operators and no quoting.
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{Operand, Term};
pub use operators::{KeywordTable, Operator};
pub use tokens::Token;

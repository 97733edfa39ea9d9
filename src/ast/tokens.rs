use crate::ast::{Operand, Operator};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Operator keyword
    ///
    /// # Examples
    /// ```text
    /// AND
    /// EQ
    /// LE
    /// ```
    Operator(Operator),

    /// Any word that is not an operator keyword
    ///
    /// # Examples
    /// ```text
    /// Title
    /// /Test/
    /// 42
    /// ```
    Operand(Operand),

    /// End of input
    Eof,
}

use std::fmt;

/// A literal word from the filter.
///
/// There is no quoting: a word that parses as a signed 64-bit integer is an
/// integer, everything else is a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Literal integer
    ///
    /// # Examples
    /// ```text
    /// 1
    /// -10
    /// +7
    /// ```
    Integer(i64),

    /// Field name or string value
    ///
    /// # Examples
    /// ```text
    /// Title
    /// /Test/
    /// 3.14
    /// ```
    String(String),
}

impl Operand {
    pub fn parse(word: &str) -> Self {
        match word.parse::<i64>() {
            Ok(n) => Operand::Integer(n),
            Err(_) => Operand::String(word.to_string()),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Integer(n) => write!(f, "{}", n),
            Operand::String(s) => f.write_str(s),
        }
    }
}

/// An entry on the operand stack.
///
/// Starts life as a raw [`Operand`] and becomes a backend document `D` once
/// an operator has been applied to it.
#[derive(Debug, Clone, PartialEq)]
pub enum Term<D> {
    Operand(Operand),
    Document(D),
}

impl<D> Term<D> {
    /// Short description used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Term::Operand(Operand::Integer(_)) => "integer",
            Term::Operand(Operand::String(_)) => "string",
            Term::Document(_) => "document",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_words() {
        assert_eq!(Operand::parse("1"), Operand::Integer(1));
        assert_eq!(Operand::parse("-10"), Operand::Integer(-10));
        assert_eq!(Operand::parse("+7"), Operand::Integer(7));
    }

    #[test]
    fn test_string_words() {
        assert_eq!(Operand::parse("Total"), Operand::String("Total".into()));
        assert_eq!(Operand::parse("/Test/"), Operand::String("/Test/".into()));
        assert_eq!(Operand::parse("3.14"), Operand::String("3.14".into()));
    }

    #[test]
    fn test_overflowing_integer_is_string() {
        let word = "99999999999999999999";
        assert_eq!(Operand::parse(word), Operand::String(word.into()));
    }

    #[test]
    fn test_term_kind() {
        let doc: Term<()> = Term::Document(());
        assert_eq!(doc.kind(), "document");
        assert_eq!(Term::<()>::Operand(Operand::Integer(1)).kind(), "integer");
        assert_eq!(Term::<()>::Operand(Operand::parse("x")).kind(), "string");
    }
}

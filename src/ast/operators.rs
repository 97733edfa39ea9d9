use std::fmt;

/// Filter operators.
///
/// The set is closed: every keyword the language understands maps to exactly
/// one variant, and every variant has exactly one priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Logical
    /// Logical OR (`OR`)
    Or,
    /// Logical AND (`AND`)
    And,

    // Comparison
    /// Equal (`EQ`)
    Equal,
    /// Greater than (`GT`)
    GreaterThan,
    /// Greater than or equal (`GTE`)
    GreaterEqual,
    /// Less than (`LT`)
    LessThan,
    /// Less than or equal (`LTE`)
    LessEqual,
    /// Pattern match (`LE`, as in "looks like")
    ///
    /// # Example
    /// ```text
    /// Title LE /Test/
    /// ```
    Matches,
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Or,
        Operator::And,
        Operator::Equal,
        Operator::GreaterThan,
        Operator::GreaterEqual,
        Operator::LessThan,
        Operator::LessEqual,
        Operator::Matches,
    ];

    /// Reduction priority. A higher number binds looser.
    pub fn priority(self) -> u8 {
        match self {
            Operator::Or => 3,
            Operator::And => 2,
            Operator::Equal
            | Operator::GreaterThan
            | Operator::GreaterEqual
            | Operator::LessThan
            | Operator::LessEqual
            | Operator::Matches => 1,
        }
    }

    /// Canonical keyword spelling.
    pub fn keyword(self) -> &'static str {
        match self {
            Operator::Or => "OR",
            Operator::And => "AND",
            Operator::Equal => "EQ",
            Operator::GreaterThan => "GT",
            Operator::GreaterEqual => "GTE",
            Operator::LessThan => "LT",
            Operator::LessEqual => "LTE",
            Operator::Matches => "LE",
        }
    }

    /// True for `OR` and `AND`, whose operands are sub-filters rather than
    /// a field and a value.
    pub fn is_logical(self) -> bool {
        matches!(self, Operator::Or | Operator::And)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Keyword table used by the lexer to recognise operators.
///
/// Lookups are exact and case-sensitive; any other word is an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordTable {
    /// `GT` is greater-than.
    #[default]
    Standard,
    /// `GT` is an alias of `EQ`, matching filters written against older
    /// releases of the translator.
    Legacy,
}

impl KeywordTable {
    pub fn lookup(self, word: &str) -> Option<Operator> {
        let op = match word {
            "OR" => Operator::Or,
            "AND" => Operator::And,
            "EQ" => Operator::Equal,
            "GT" => match self {
                KeywordTable::Standard => Operator::GreaterThan,
                KeywordTable::Legacy => Operator::Equal,
            },
            "GTE" => Operator::GreaterEqual,
            "LT" => Operator::LessThan,
            "LTE" => Operator::LessEqual,
            "LE" => Operator::Matches,
            _ => return None,
        };
        Some(op)
    }
}

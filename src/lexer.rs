use crate::ast::{KeywordTable, Operand, Token};

/// Errors raised while splitting the filter into words.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// Input remained but no characters could be consumed.
    #[error("no whitespace delimiter found at byte {position}")]
    MissingDelimiter { position: usize },
}

/// Reads the next whitespace-delimited word from `remaining`.
///
/// Returns the word and the number of bytes consumed: any leading whitespace
/// plus the word itself. The delimiter that ends the word is left in place
/// and skipped by the next call.
///
/// # Examples
/// ```text
/// "Title LE /Test/"   => ("Title", 5)
/// "  LE /Test/"       => ("LE", 4)
/// "   "               => ("", 3)
/// ```
pub fn next_word(remaining: &str) -> (&str, usize) {
    let start = remaining
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(remaining.len());
    let end = remaining[start..]
        .find(char::is_whitespace)
        .map_or(remaining.len(), |offset| start + offset);

    (&remaining[start..end], end)
}

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    keywords: KeywordTable,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_keywords(input, KeywordTable::default())
    }

    pub fn with_keywords(input: &'a str, keywords: KeywordTable) -> Self {
        Lexer {
            input,
            position: 0,
            keywords,
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let remaining = &self.input[self.position..];
        if remaining.is_empty() {
            return Ok(Token::Eof);
        }

        let (word, consumed) = next_word(remaining);
        if consumed == 0 {
            return Err(LexError::MissingDelimiter {
                position: self.position,
            });
        }
        self.position += consumed;

        // Only trailing whitespace was left
        if word.is_empty() {
            return Ok(Token::Eof);
        }

        Ok(match self.keywords.lookup(word) {
            Some(op) => Token::Operator(op),
            None => Token::Operand(Operand::parse(word)),
        })
    }
}

#[cfg(test)]
use crate::ast::Operator;

#[test]
fn test_next_word_counts_leading_whitespace() {
    assert_eq!(next_word("Title LE /Test/"), ("Title", 5));
    assert_eq!(next_word(" LE /Test/"), ("LE", 3));
    assert_eq!(next_word("/Test/"), ("/Test/", 6));
    assert_eq!(next_word("   "), ("", 3));
    assert_eq!(next_word(""), ("", 0));
}

#[test]
fn test_simple_filter() {
    let mut lexer = Lexer::new("Title LE /Test/ AND Total EQ 1");
    assert_eq!(lexer.next_token(), Ok(Token::Operand(Operand::String("Title".into()))));
    assert_eq!(lexer.next_token(), Ok(Token::Operator(Operator::Matches)));
    assert_eq!(lexer.next_token(), Ok(Token::Operand(Operand::String("/Test/".into()))));
    assert_eq!(lexer.next_token(), Ok(Token::Operator(Operator::And)));
    assert_eq!(lexer.next_token(), Ok(Token::Operand(Operand::String("Total".into()))));
    assert_eq!(lexer.next_token(), Ok(Token::Operator(Operator::Equal)));
    assert_eq!(lexer.next_token(), Ok(Token::Operand(Operand::Integer(1))));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_trailing_whitespace_is_eof() {
    let mut lexer = Lexer::new("Total  \t ");
    assert_eq!(lexer.next_token(), Ok(Token::Operand(Operand::String("Total".into()))));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
    assert_eq!(lexer.position(), 9);
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

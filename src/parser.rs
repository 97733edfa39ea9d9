use log::trace;

use crate::{
    ast::{Operator, Term, Token},
    backend::Backend,
    error::Error,
    lexer::Lexer,
    stack::Stack,
};

/// Operator-precedence parser for filters.
///
/// Words are shifted onto two stacks, one for operands and one for
/// operators. When an operator arrives with a looser priority than the
/// operator on top of the stack, the top operator is applied first
/// ("unwound"): it takes the two most recent operands and the backend turns
/// them into a single filter fragment, which goes back on the operand stack.
/// Whatever is left once the input runs out is unwound in reverse order.
///
/// The comparison is strict, so operators of equal priority never unwind each
/// other during the scan. They wait for the final pass, which applies the
/// rightmost first, and chains such as `a AND b AND c` group to the right:
/// `a AND (b AND c)`.
///
/// Reductions nest at most [`MAX_DEPTH`] operators deep; a deeper filter
/// fails with [`Error::NestingTooDeep`].
///
/// A parser is used once; [`Parser::parse`] consumes it.
pub struct Parser<'a, B: Backend> {
    lexer: Lexer<'a>,
    backend: &'a B,
    operands: Stack<Entry<B::Document>>,
    operators: Stack<Operator>,
}

/// Deepest operator nesting a filter may reach.
///
/// MongoDB rejects documents nested more than 100 levels, and every operator
/// adds two: the comparison's field and operator documents, or the logical
/// operator's document and array.
pub const MAX_DEPTH: usize = 50;

/// An operand-stack term and the operator depth of the tree it holds.
struct Entry<D> {
    term: Term<D>,
    depth: usize,
}

impl<'a, B: Backend> Parser<'a, B> {
    pub fn new(lexer: Lexer<'a>, backend: &'a B) -> Self {
        Parser {
            lexer,
            backend,
            operands: Stack::new(),
            operators: Stack::new(),
        }
    }

    /// Parses the whole input and returns the translated filter.
    pub fn parse(mut self) -> Result<B::Document, Error> {
        loop {
            match self.lexer.next_token()? {
                Token::Eof => break,
                Token::Operator(op) => self.shift_operator(op)?,
                Token::Operand(operand) => {
                    trace!("shift operand {}", operand);
                    self.operands.push(Entry {
                        term: Term::Operand(operand),
                        depth: 0,
                    });
                }
            }
        }

        self.flush()
    }

    fn shift_operator(&mut self, op: Operator) -> Result<(), Error> {
        while let Some(top) = self.operators.peek() {
            if op.priority() <= top.priority() {
                break;
            }
            self.unwind()?;
        }

        trace!("shift operator {}", op);
        self.operators.push(op);
        Ok(())
    }

    /// Applies every pending operator, then takes the single result.
    fn flush(&mut self) -> Result<B::Document, Error> {
        let pending = self.operators.count();
        for _ in 0..pending {
            self.unwind()?;
        }

        let count = self.operands.count();
        if count != 1 {
            return Err(Error::ResultArity { count });
        }

        match self.operands.pop().map(|entry| entry.term) {
            Some(Term::Document(doc)) => Ok(doc),
            Some(Term::Operand(operand)) => Err(Error::DanglingOperand(operand)),
            None => Err(Error::ResultArity { count: 0 }),
        }
    }

    /// Pops one operator and the two operands it applies to, and pushes the
    /// backend's translation of the three.
    fn unwind(&mut self) -> Result<(), Error> {
        let operators = self.operators.count();
        let operands = self.operands.count();
        let underflow = Error::StackUnderflow {
            operators,
            operands,
        };
        if operators == 0 || operands < 2 {
            return Err(underflow);
        }

        let Some(op) = self.operators.pop() else {
            return Err(underflow);
        };
        // The right operand was pushed last
        let (Some(right), Some(left)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(underflow);
        };

        let depth = 1 + left.depth.max(right.depth);
        if depth > MAX_DEPTH {
            return Err(Error::NestingTooDeep { limit: MAX_DEPTH });
        }

        trace!(
            "unwind {} ({} {} {})",
            op,
            left.term.kind(),
            op,
            right.term.kind()
        );
        let doc = self.backend.serialize(op, left.term, right.term)?;
        self.operands.push(Entry {
            term: Term::Document(doc),
            depth,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MongoBackend;
    use crate::output::to_json;

    fn parse(input: &str) -> Result<String, Error> {
        let parser = Parser::new(Lexer::new(input), &MongoBackend);
        parser.parse().map(|doc| to_json(&doc))
    }

    #[test]
    fn test_single_comparison() {
        assert_eq!(parse("Total GTE 10").unwrap(), r#"{"Total":{"$gte":10}}"#);
    }

    #[test]
    fn test_looser_operator_unwinds_tighter() {
        assert_eq!(
            parse("a EQ 1 OR b EQ 2").unwrap(),
            r#"{"$or":[{"a":{"$eq":1}},{"b":{"$eq":2}}]}"#
        );
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        // AND is pushed on top of OR without unwinding, then flushed first
        assert_eq!(
            parse("a EQ 1 OR b EQ 2 AND c EQ 3").unwrap(),
            r#"{"$or":[{"a":{"$eq":1}},{"$and":[{"b":{"$eq":2}},{"c":{"$eq":3}}]}]}"#
        );
    }

    #[test]
    fn test_or_after_and_unwinds_and() {
        assert_eq!(
            parse("a EQ 1 AND b EQ 2 OR c EQ 3").unwrap(),
            r#"{"$or":[{"$and":[{"a":{"$eq":1}},{"b":{"$eq":2}}]},{"c":{"$eq":3}}]}"#
        );
    }

    #[test]
    fn test_missing_right_operand_underflows() {
        assert_eq!(
            parse("Total EQ"),
            Err(Error::StackUnderflow {
                operators: 1,
                operands: 1
            })
        );
    }

    #[test]
    fn test_leading_operator_underflows() {
        assert_eq!(
            parse("AND a EQ 1"),
            Err(Error::StackUnderflow {
                operators: 1,
                operands: 1
            })
        );
    }

    fn and_chain(clauses: usize) -> String {
        (0..clauses)
            .map(|i| format!("f{} EQ {}", i, i))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    #[test]
    fn test_chain_at_depth_limit() {
        // 50 clauses: one comparison level plus 49 ANDs
        assert!(parse(&and_chain(MAX_DEPTH)).is_ok());
    }

    #[test]
    fn test_chain_past_depth_limit() {
        assert_eq!(
            parse(&and_chain(MAX_DEPTH + 1)),
            Err(Error::NestingTooDeep { limit: MAX_DEPTH })
        );
    }

    #[test]
    fn test_lone_operand_is_dangling() {
        assert_eq!(
            parse("Total"),
            Err(Error::DanglingOperand(crate::ast::Operand::String(
                "Total".into()
            )))
        );
    }
}

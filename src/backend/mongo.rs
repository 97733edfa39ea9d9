use crate::{
    ast::{Operand, Operator, Term},
    backend::{Backend, BackendError, BackendKind, Side},
    document::{Document, Value},
};

/// Generates MongoDB filter documents.
///
/// - `AND` / `OR` wrap two sub-filters: `{"$and": [left, right]}`
/// - comparisons produce `{"<field>": {"<op>": <value>}}`, with the field
///   taken from the left operand and the value from the right
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoBackend;

impl Backend for MongoBackend {
    type Document = Document;

    fn kind(&self) -> BackendKind {
        BackendKind::Mongo
    }

    fn symbol(&self, op: Operator) -> Option<&'static str> {
        let symbol = match op {
            Operator::Or => "$or",
            Operator::And => "$and",
            Operator::Equal => "$eq",
            Operator::GreaterThan => "$gt",
            Operator::GreaterEqual => "$gte",
            Operator::LessThan => "$lt",
            Operator::LessEqual => "$lte",
            Operator::Matches => "$regex",
        };
        Some(symbol)
    }

    fn serialize(
        &self,
        op: Operator,
        left: Term<Document>,
        right: Term<Document>,
    ) -> Result<Document, BackendError> {
        let symbol = self
            .symbol(op)
            .ok_or(BackendError::UnmappedOperator(op))?;

        if op.is_logical() {
            let left = sub_filter(op, Side::Left, left)?;
            let right = sub_filter(op, Side::Right, right)?;

            return Ok(Document::new().with(
                symbol,
                Value::Array(vec![Value::Document(left), Value::Document(right)]),
            ));
        }

        let field = match left {
            Term::Operand(Operand::String(field)) => field,
            other => return Err(mismatch(op, Side::Left, "a field name", &other)),
        };
        let value = match right {
            Term::Operand(operand) => Value::from(operand),
            other => return Err(mismatch(op, Side::Right, "a string or integer", &other)),
        };

        Ok(Document::new().with(field, Document::new().with(symbol, value)))
    }
}

fn sub_filter(op: Operator, side: Side, term: Term<Document>) -> Result<Document, BackendError> {
    match term {
        Term::Document(doc) => Ok(doc),
        other => Err(mismatch(op, side, "a comparison", &other)),
    }
}

fn mismatch(op: Operator, side: Side, expected: &'static str, found: &Term<Document>) -> BackendError {
    BackendError::OperandType {
        operator: op,
        side,
        expected,
        found: found.kind(),
    }
}

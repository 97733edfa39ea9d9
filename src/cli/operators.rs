//! Operator reference for the quang CLI

use crate::{Backend, MongoBackend, Operator};

/// Render the operator table: keyword, priority and MongoDB symbol.
pub fn get_operator_reference() -> String {
    let mut out = String::from("FILTER OPERATORS\n\n");
    out.push_str("  KEYWORD  PRIORITY  MONGO\n");

    for op in Operator::ALL {
        out.push_str(&format!(
            "  {:<7}  {:<8}  {}\n",
            op.keyword(),
            op.priority(),
            MongoBackend.symbol(op).unwrap_or("-"),
        ));
    }

    out.push_str(
        r#"
Higher priority binds looser. Operators of equal priority group to the right:

  A EQ 1 AND B EQ 2 AND C EQ 3   =>   A EQ 1 AND (B EQ 2 AND C EQ 3)

Words that are not operators are operands. Words that parse as integers are
numbers, everything else is a field name or string value.
"#,
    );
    out
}

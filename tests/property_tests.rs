//! Property-based tests for translation
//!
//! - translation is a pure function of its input
//! - chains of one logical operator always nest to the right
//! - whitespace between words never changes the result

use proptest::prelude::*;
use quang::{translate, BackendKind, Error};
use serde_json::{json, Value};

/// Field names that can never be mistaken for keywords or integers
fn field_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

/// A comparison keyword together with its Mongo symbol
fn comparison_strategy() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop_oneof![
        Just(("EQ", "$eq")),
        Just(("GT", "$gt")),
        Just(("GTE", "$gte")),
        Just(("LT", "$lt")),
        Just(("LTE", "$lte")),
    ]
}

fn clause_strategy() -> impl Strategy<Value = (String, Value)> {
    (field_strategy(), comparison_strategy(), any::<i64>()).prop_map(
        |(field, (keyword, symbol), n)| {
            let text = format!("{} {} {}", field, keyword, n);
            let mut inner = serde_json::Map::new();
            inner.insert(symbol.to_string(), json!(n));
            let mut outer = serde_json::Map::new();
            outer.insert(field, Value::Object(inner));
            (text, Value::Object(outer))
        },
    )
}

/// Builds `{"$op": [c0, {"$op": [c1, ...]}]}` from the rightmost clause out.
fn right_nested(symbol: &str, clauses: &[Value]) -> Value {
    let (last, rest) = clauses.split_last().unwrap();
    rest.iter().rev().fold(last.clone(), |acc, clause| {
        let mut doc = serde_json::Map::new();
        doc.insert(symbol.to_string(), Value::Array(vec![clause.clone(), acc]));
        Value::Object(doc)
    })
}

fn translate_json(filter: &str) -> Result<Value, Error> {
    translate(filter, BackendKind::Mongo).map(|doc| quang::output::to_value(&doc))
}

proptest! {
    #[test]
    fn test_chains_nest_right(
        clauses in prop::collection::vec(clause_strategy(), 1..6),
        logical in prop_oneof![Just(("AND", "$and")), Just(("OR", "$or"))],
    ) {
        let (keyword, symbol) = logical;
        let text = clauses
            .iter()
            .map(|(t, _)| t.clone())
            .collect::<Vec<_>>()
            .join(&format!(" {} ", keyword));
        let expected: Vec<Value> = clauses.into_iter().map(|(_, v)| v).collect();

        prop_assert_eq!(translate_json(&text).unwrap(), right_nested(symbol, &expected));
    }

    #[test]
    fn test_translation_is_deterministic(
        clauses in prop::collection::vec(clause_strategy(), 1..5),
    ) {
        let text = clauses
            .iter()
            .map(|(t, _)| t.clone())
            .collect::<Vec<_>>()
            .join(" OR ");

        let first = translate(&text, BackendKind::Mongo);
        let second = translate(&text, BackendKind::Mongo);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_extra_whitespace_is_ignored(
        (text, _) in clause_strategy(),
        pad in "[ \t\n]{1,4}",
    ) {
        let padded = format!("{}{}{}", pad, text.replace(' ', &pad), pad);
        prop_assert_eq!(translate_json(&padded), translate_json(&text));
    }

    #[test]
    fn test_never_panics(words in prop::collection::vec(
        prop_oneof![
            Just("AND".to_string()),
            Just("OR".to_string()),
            Just("EQ".to_string()),
            Just("LE".to_string()),
            "[a-z]{1,3}",
            "-?[0-9]{1,3}",
        ],
        0..8,
    )) {
        // Any outcome is fine as long as it is a value, not a panic
        let _ = translate(&words.join(" "), BackendKind::Mongo);
    }
}

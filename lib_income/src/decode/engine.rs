//! # Decode Engine
//!
//! Walks a raw [`Value`] and a [`SchemaNode`] in lockstep, depth first.
//!
//! The walk never fails. When the value's shape disagrees with the template
//! the engine substitutes defaults instead of raising:
//!
//! | template | value              | result                                  |
//! |----------|--------------------|-----------------------------------------|
//! | `Leaf`   | anything           | the value, untouched                    |
//! | `Record` | object             | declared fields only, each decoded      |
//! | `Record` | anything else      | declared fields, each decoded from null |
//! | `ListOf` | array              | every element decoded, order kept       |
//! | `ListOf` | anything else      | empty list                              |
//!
//! Providers routinely send `null` (or nothing) for optional nested objects,
//! so every nested field must be treated as possibly absent by callers.

use super::decoded::{Decoded, DecodedRecord};
use super::schema::{RecordSchema, SchemaNode};
use serde_json::Value;

/// Decodes `value` against `schema`.
pub fn decode(value: &Value, schema: &SchemaNode) -> Decoded {
    match schema {
        SchemaNode::Leaf => Decoded::Leaf(value.clone()),
        SchemaNode::Record(record) => Decoded::Record(decode_record(value, record)),
        SchemaNode::ListOf(element) => Decoded::List(decode_list(value, element)),
    }
}

fn decode_record(value: &Value, record: &RecordSchema) -> DecodedRecord {
    // Non-objects decode as if every key were missing.
    let source = value.as_object();

    let fields = record
        .fields()
        .map(|(name, field_schema)| {
            let raw = source.and_then(|map| map.get(name)).unwrap_or(&Value::Null);
            (name.to_string(), decode(raw, field_schema))
        })
        .collect();

    DecodedRecord::new(record.type_name(), fields)
}

fn decode_list(value: &Value, element: &SchemaNode) -> Vec<Decoded> {
    match value {
        Value::Array(items) => items.iter().map(|item| decode(item, element)).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stream_schema() -> SchemaNode {
        SchemaNode::record("IncomeStream")
            .leaves(["confidence", "days", "monthly_income", "name"])
            .into()
    }

    #[test]
    fn leaf_passes_value_through() {
        for value in [json!(null), json!(true), json!(1.5), json!("x"), json!([1, 2]), json!({"a": 1})] {
            assert_eq!(decode(&value, &SchemaNode::Leaf), Decoded::Leaf(value.clone()));
        }
    }

    #[test]
    fn record_keeps_declared_fields_and_drops_unknown_ones() {
        let value = json!({"name": "Acme", "days": 30, "employer_ein": "12-3456789"});
        let decoded = decode(&value, &stream_schema());

        let record = decoded.as_record().unwrap();
        assert_eq!(record.type_name(), "IncomeStream");
        assert_eq!(record.get("name"), Some(&Decoded::Leaf(json!("Acme"))));
        assert_eq!(record.get("days"), Some(&Decoded::Leaf(json!(30))));
        assert!(record.get("confidence").unwrap().is_absent());
        assert!(record.get("employer_ein").is_none());
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn record_over_non_object_yields_absent_fields() {
        for value in [json!(null), json!(42), json!("oops"), json!([{"name": "Acme"}])] {
            let decoded = decode(&value, &stream_schema());
            let record = decoded.as_record().unwrap();
            assert_eq!(record.len(), 4);
            assert!(record.fields().all(|(_, field)| field.is_absent()));
        }
    }

    #[test]
    fn missing_nested_record_and_list_get_defaults() {
        let schema: SchemaNode = SchemaNode::record("Income")
            .leaf("last_year_income")
            .field("summary", SchemaNode::record("Summary").leaf("total_amount"))
            .field("income_streams", SchemaNode::list_of(stream_schema()))
            .into();

        let decoded = decode(&json!({"last_year_income": 1000.0}), &schema);
        let record = decoded.as_record().unwrap();

        let summary = record.get("summary").and_then(Decoded::as_record).unwrap();
        assert_eq!(summary.type_name(), "Summary");
        assert!(summary.get("total_amount").unwrap().is_absent());
        assert_eq!(record.get("income_streams"), Some(&Decoded::List(vec![])));
    }

    #[test]
    fn list_preserves_length_and_order() {
        let value = json!([{"name": "a"}, null, {"name": "c"}]);
        let decoded = decode(&value, &SchemaNode::list_of(stream_schema()));

        let items = decoded.as_list().unwrap();
        assert_eq!(items.len(), 3);
        let names: Vec<Value> = items
            .iter()
            .map(|item| item.as_record().unwrap().get("name").unwrap().to_value())
            .collect();
        assert_eq!(names, vec![json!("a"), Value::Null, json!("c")]);
    }

    #[test]
    fn list_over_non_array_is_empty() {
        let schema = SchemaNode::list_of(SchemaNode::Leaf);
        for value in [json!(null), json!({"0": 1}), json!("abc"), json!(3)] {
            assert_eq!(decode(&value, &schema), Decoded::List(vec![]));
        }
    }

    #[test]
    fn lists_of_lists_recurse() {
        let schema = SchemaNode::list_of(SchemaNode::list_of(SchemaNode::Leaf));
        let decoded = decode(&json!([[1, 2], [], "x"]), &schema);

        assert_eq!(
            decoded,
            Decoded::List(vec![
                Decoded::List(vec![Decoded::Leaf(json!(1)), Decoded::Leaf(json!(2))]),
                Decoded::List(vec![]),
                Decoded::List(vec![]),
            ])
        );
    }
}

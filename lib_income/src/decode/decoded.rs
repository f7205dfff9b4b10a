//! # Decoded Graph
//!
//! Output of the decode engine, plus the projection of that output onto the
//! serde models exposed by the endpoint modules.

use super::engine::decode;
use super::schema::SchemaNode;
use crate::errors::IncomeError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// One node of a decoded tree.
///
/// A missing key or an explicit `null` under a `Leaf` template both decode to
/// `Leaf(Value::Null)`, the absent placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Primitive value, passed through as received.
    Leaf(Value),
    /// Nested record holding exactly its declared fields.
    Record(DecodedRecord),
    /// Decoded sequence.
    List(Vec<Decoded>),
}

/// A decoded record: its type name and the declared fields, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRecord {
    type_name: String,
    fields: Vec<(String, Decoded)>,
}

impl Decoded {
    /// True for the absent placeholder.
    pub fn is_absent(&self) -> bool {
        matches!(self, Decoded::Leaf(Value::Null))
    }

    /// The record, if this node is one.
    pub fn as_record(&self) -> Option<&DecodedRecord> {
        match self {
            Decoded::Record(record) => Some(record),
            _ => None,
        }
    }

    /// The items, if this node is a list.
    pub fn as_list(&self) -> Option<&[Decoded]> {
        match self {
            Decoded::List(items) => Some(items),
            _ => None,
        }
    }

    /// The raw value, if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            Decoded::Leaf(value) => Some(value),
            _ => None,
        }
    }

    /// Serialises the decoded tree back into a raw value tree. Records become
    /// objects holding every declared field; absent fields become `null`.
    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    /// Consuming form of [`Decoded::to_value`].
    pub fn into_value(self) -> Value {
        match self {
            Decoded::Leaf(value) => value,
            Decoded::Record(record) => record.into_value(),
            Decoded::List(items) => Value::Array(items.into_iter().map(Decoded::into_value).collect()),
        }
    }
}

impl DecodedRecord {
    pub(crate) fn new(type_name: &str, fields: Vec<(String, Decoded)>) -> Self {
        Self {
            type_name: type_name.to_string(),
            fields,
        }
    }

    /// Name of the record type this was decoded against.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Decoded field `name`; `None` when the type does not declare it.
    pub fn get(&self, name: &str) -> Option<&Decoded> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, decoded)| decoded)
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Decoded)> {
        self.fields.iter().map(|(name, decoded)| (name.as_str(), decoded))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True for a record type with no declared fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialises the record into a JSON object.
    pub fn into_value(self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .into_iter()
            .map(|(name, decoded)| (name, decoded.into_value()))
            .collect();
        Value::Object(map)
    }
}

/// A response model with a declared schema template.
///
/// The template must declare every field of the serde model. Lists of
/// primitives should be declared as `ListOf(Leaf)` so a missing list decodes
/// to `[]` instead of `null`.
pub trait Decodable: DeserializeOwned {
    /// Template mirroring the provider's response shape.
    fn schema() -> SchemaNode;
}

/// Decodes `value` against `T::schema()` and projects the result onto `T`.
pub fn decode_typed<T: Decodable>(value: &Value) -> Result<T, IncomeError> {
    let schema = T::schema();
    let decoded = decode(value, &schema);
    serde_json::from_value(decoded.into_value()).map_err(|source| IncomeError::Projection {
        type_name: schema.type_name().unwrap_or("value").to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Summary {
        total_amount: Option<f64>,
        iso_currency_code: Option<String>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Report {
        request_id: Option<String>,
        summary: Summary,
        tags: Vec<String>,
    }

    impl Decodable for Report {
        fn schema() -> SchemaNode {
            SchemaNode::record("Report")
                .leaf("request_id")
                .field("summary", SchemaNode::record("Summary").leaves(["total_amount", "iso_currency_code"]))
                .field("tags", SchemaNode::list_of(SchemaNode::Leaf))
                .into()
        }
    }

    #[test]
    fn record_serialises_declared_fields_only() {
        let decoded = decode(&json!({"request_id": "r", "extra": 1}), &Report::schema());

        assert_eq!(
            decoded.into_value(),
            json!({
                "request_id": "r",
                "summary": {"total_amount": null, "iso_currency_code": null},
                "tags": []
            })
        );
    }

    #[test]
    fn typed_projection_tolerates_missing_nested_objects() {
        let report: Report = decode_typed(&json!({"summary": null})).unwrap();

        assert_eq!(
            report,
            Report {
                request_id: None,
                summary: Summary { total_amount: None, iso_currency_code: None },
                tags: vec![],
            }
        );
    }

    #[test]
    fn wrong_leaf_type_is_a_projection_error() {
        let err = decode_typed::<Report>(&json!({"summary": {"total_amount": "lots"}})).unwrap_err();

        match err {
            IncomeError::Projection { type_name, .. } => assert_eq!(type_name, "Report"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn redecoding_serialised_output_is_stable() {
        let schema = Report::schema();
        let first = decode(&json!({"request_id": "r", "summary": 7, "tags": ["a", "b"]}), &schema);
        let second = decode(&first.to_value(), &schema);

        assert_eq!(first, second);
    }
}

//! # Schema Templates
//!
//! A [`SchemaNode`] describes the shape a raw JSON tree is decoded into.
//! Templates are built once per response model with the builder methods on
//! [`SchemaNode`] and [`RecordSchema`]:
//!
//! ```
//! use lib_income::SchemaNode;
//!
//! let stream = SchemaNode::record("IncomeStream")
//!     .leaves(["confidence", "days", "monthly_income", "name"]);
//!
//! let income = SchemaNode::record("Income")
//!     .leaf("last_year_income")
//!     .field("income_streams", SchemaNode::list_of(stream));
//!
//! assert_eq!(income.type_name(), "Income");
//! ```

/// Target shape for one node of a decoded tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Accept the value verbatim.
    Leaf,
    /// A nested typed record.
    Record(RecordSchema),
    /// A sequence whose every element is decoded against the boxed schema.
    ListOf(Box<SchemaNode>),
}

/// The declared fields of one record type, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    type_name: String,
    fields: Vec<(String, SchemaNode)>,
}

impl SchemaNode {
    /// Starts a record template with no declared fields.
    pub fn record(type_name: impl Into<String>) -> RecordSchema {
        RecordSchema {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// A list whose elements all decode against `element`.
    pub fn list_of(element: impl Into<SchemaNode>) -> SchemaNode {
        SchemaNode::ListOf(Box::new(element.into()))
    }

    /// Record type name, for `Record` templates.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            SchemaNode::Record(record) => Some(record.type_name()),
            _ => None,
        }
    }
}

impl RecordSchema {
    /// Declares a field decoded against `schema`. Declaring the same name
    /// twice keeps the first position and the last schema.
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<SchemaNode>) -> Self {
        let name = name.into();
        let schema = schema.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = schema,
            None => self.fields.push((name, schema)),
        }
        self
    }

    /// Declares a primitive field.
    pub fn leaf(self, name: impl Into<String>) -> Self {
        self.field(name, SchemaNode::Leaf)
    }

    /// Declares several primitive fields at once.
    pub fn leaves<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(self, |record, name| record.leaf(name))
    }

    /// Name of the record type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    /// Schema declared for `name`, if any.
    pub fn field_schema(&self, name: &str) -> Option<&SchemaNode> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, schema)| schema)
    }
}

impl From<RecordSchema> for SchemaNode {
    fn from(record: RecordSchema) -> Self {
        SchemaNode::Record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_declaration_order() {
        let schema = SchemaNode::record("Summary")
            .leaves(["total_amount", "iso_currency_code"])
            .leaf("start_date");

        let names: Vec<&str> = schema.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["total_amount", "iso_currency_code", "start_date"]);
    }

    #[test]
    fn redeclared_field_replaces_schema_in_place() {
        let schema = SchemaNode::record("Item")
            .leaf("billed_products")
            .leaf("item_id")
            .field("billed_products", SchemaNode::list_of(SchemaNode::Leaf));

        let names: Vec<&str> = schema.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["billed_products", "item_id"]);
        assert_eq!(
            schema.field_schema("billed_products"),
            Some(&SchemaNode::ListOf(Box::new(SchemaNode::Leaf)))
        );
    }

    #[test]
    fn type_name_only_for_records() {
        assert_eq!(SchemaNode::from(SchemaNode::record("Income")).type_name(), Some("Income"));
        assert_eq!(SchemaNode::Leaf.type_name(), None);
        assert_eq!(SchemaNode::list_of(SchemaNode::record("X")).type_name(), None);
    }
}

//! Dynamic records backed by `serde_json::Value`.
//!
//! A [`Schema`] declares the record shape: field names in declaration order
//! and the constraints on each. [`JsonRecord`] pairs a JSON object with a
//! schema and implements [`Record`], so the same validator runs over data
//! that has no Rust type.
//!
//! # Examples
//!
//! ```
//! use fieldguard::json::{Schema, validate_json};
//! use serde_json::json;
//!
//! let schema = Schema::from_tags([
//!     ("Name", r#"required:"true" maxLen:"50""#),
//!     ("Age", r#"min:"18" max:"100""#),
//!     ("Email", r#"required:"true" email:"true""#),
//! ])
//! .unwrap();
//!
//! let results = validate_json(&json!({ "Name": "", "Age": 150, "Email": "bad" }), &schema).unwrap();
//! assert!(results.iter().all(|r| !r.valid));
//!
//! assert!(validate_json(&json!([1, 2, 3]), &schema).is_err());
//! ```

use std::borrow::Cow;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::ValidatorError;
use crate::record::{Field, Record};
use crate::result::ValidationResult;
use crate::struct_tag::parse_struct_tag;
use crate::tag::Constraint;
use crate::value::{AsFieldValue, FieldValue};

// ============================================================================
// SCHEMA
// ============================================================================

/// Ordered field declarations for dynamic records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: IndexMap<String, Vec<Constraint>>,
}

impl Schema {
    /// An empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field. Redeclaring a name replaces its constraints but
    /// keeps its original position.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(
        mut self,
        name: impl Into<String>,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Self {
        self.fields
            .insert(name.into(), constraints.into_iter().collect());
        self
    }

    /// Declares a field from a struct tag string such as
    /// `required:"true" maxLen:"50"`.
    pub fn field_tag(self, name: impl Into<String>, tag: &str) -> Result<Self, ValidatorError> {
        let constraints = parse_struct_tag(tag)?;
        Ok(self.field(name, constraints))
    }

    /// Builds a schema from `(name, struct tag)` pairs.
    pub fn from_tags<'a, I, N>(fields: I) -> Result<Self, ValidatorError>
    where
        I: IntoIterator<Item = (N, &'a str)>,
        N: Into<String>,
    {
        fields
            .into_iter()
            .try_fold(Self::new(), |schema, (name, tag)| schema.field_tag(name, tag))
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared field names and constraints, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Constraint])> {
        self.fields
            .iter()
            .map(|(name, constraints)| (name.as_str(), constraints.as_slice()))
    }
}

// ============================================================================
// JSON RECORD
// ============================================================================

/// A JSON object viewed through a [`Schema`].
///
/// The schema defines the fields: one result per declared field, in schema
/// order. Declared fields missing from the object read as `null`; object
/// keys the schema does not declare are not part of the record.
#[derive(Debug, Clone, Copy)]
pub struct JsonRecord<'a> {
    object: &'a Map<String, Value>,
    schema: &'a Schema,
}

impl<'a> JsonRecord<'a> {
    /// Wraps `value`, which must be a JSON object.
    pub fn new(value: &'a Value, schema: &'a Schema) -> Result<Self, ValidatorError> {
        match value {
            Value::Object(object) => Ok(Self { object, schema }),
            other => Err(ValidatorError::NotARecord {
                found: json_kind(other),
            }),
        }
    }
}

impl Record for JsonRecord<'_> {
    fn fields(&self) -> Vec<Field<'_>> {
        self.schema
            .iter()
            .map(|(name, constraints)| {
                let value = self
                    .object
                    .get(name)
                    .map_or(FieldValue::Nil, AsFieldValue::as_field_value);
                Field::new(name, value, constraints)
            })
            .collect()
    }

    fn record_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("json object")
    }
}

/// Validates a JSON object against `schema` with the default lenient
/// configuration.
///
/// Fails with [`ValidatorError::NotARecord`] when `value` is not an object.
pub fn validate_json(value: &Value, schema: &Schema) -> Result<Vec<ValidationResult>, ValidatorError> {
    let record = JsonRecord::new(value, schema)?;
    Ok(crate::validate(&record))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn avengers() -> Schema {
        Schema::new()
            .field("Name", [Constraint::flag(Tag::Required), Constraint::new(Tag::MaxLen, "50")])
            .field("Age", [Constraint::new(Tag::Min, "18"), Constraint::new(Tag::Max, "100")])
            .field("Email", [Constraint::flag(Tag::Required), Constraint::flag(Tag::Email)])
    }

    #[test]
    fn results_follow_schema_order() {
        let value = json!({ "Email": "a@b.io", "Age": 30, "Name": "Thor" });
        let results = validate_json(&value, &avengers()).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(names, ["Name", "Age", "Email"]);
        assert!(results.iter().all(|r| r.valid));
    }

    #[test]
    fn missing_fields_read_as_null() {
        let results = validate_json(&json!({}), &avengers()).unwrap();
        assert_eq!(results[0].message, "Name: Field is required");
        assert!(results[1].valid, "min/max skip null");
        assert_eq!(results[2].message, "Email: Field is required");
    }

    #[test]
    fn undeclared_keys_are_ignored() {
        let schema = Schema::new().field("a", Vec::new());
        let results = validate_json(&json!({ "a": 1, "b": 2 }), &schema).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn non_objects_are_rejected() {
        for (value, kind) in [
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!(1), "number"),
            (json!("x"), "string"),
            (json!([]), "array"),
        ] {
            assert_eq!(
                validate_json(&value, &avengers()),
                Err(ValidatorError::NotARecord { found: kind })
            );
        }
    }

    #[test]
    fn redeclared_field_keeps_position() {
        let schema = Schema::new()
            .field("a", Vec::new())
            .field("b", Vec::new())
            .field("a", [Constraint::flag(Tag::Required)]);
        let order: Vec<_> = schema.iter().map(|(n, c)| (n, c.len())).collect();
        assert_eq!(order, [("a", 1), ("b", 0)]);
    }

    #[test]
    fn from_tags_propagates_syntax_errors() {
        let err = Schema::from_tags([("Age", "max:100")]).unwrap_err();
        assert!(matches!(err, ValidatorError::TagSyntax { .. }));
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

/// What to do with a row whose length differs from the schema.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RowPolicy {
    /// Short rows leave trailing fields out of the record, long rows lose
    /// their extra values.
    #[default]
    Lenient,
    /// Any length mismatch is a `CoreError::RowShape`.
    Strict,
}

impl RowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowPolicy::Lenient => "lenient",
            RowPolicy::Strict => "strict",
        }
    }
}

/// Ordered field names used to decode positional rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<String>,
}

impl Schema {
    pub fn new(fields: Vec<String>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(fields.len());
        for f in &fields {
            if !seen.insert(f.as_str()) {
                return Err(CoreError::Config(format!(
                    "schema field \"{f}\" is declared more than once"
                )));
            }
        }
        Ok(Schema { fields })
    }

    /// Pulls the field list stored under `key` out of a schema payload.
    pub fn from_payload(schema: &Value, key: &str) -> Result<Self, CoreError> {
        let list = match schema.get(key) {
            None | Some(Value::Null) => {
                return Err(CoreError::Config(format!("schema.{key} is missing")))
            }
            Some(Value::Array(list)) => list,
            Some(_) => {
                return Err(CoreError::Config(format!(
                    "schema.{key} must be an array of field names"
                )))
            }
        };

        let mut fields = Vec::with_capacity(list.len());
        for (i, v) in list.iter().enumerate() {
            match v.as_str() {
                Some(s) => fields.push(s.to_string()),
                None => {
                    return Err(CoreError::Config(format!(
                        "schema.{key}[{i}] is not a string"
                    )))
                }
            }
        }

        Schema::new(fields)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

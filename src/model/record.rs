use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CODE_FIELD: &str = "code";
pub const NAME_FIELD: &str = "name";

/// One decoded row, keyed by schema field name in schema order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Record(Map::new())
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    /// The `code` field in the form used as a settings-table key.
    ///
    /// Numbers are looked up by their decimal form; any other non-string value
    /// has no usable code.
    pub fn code(&self) -> Option<Cow<'_, str>> {
        match self.0.get(CODE_FIELD)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    /// Sets or clears the display name.
    pub fn set_name(&mut self, name: Option<&str>) {
        match name {
            Some(n) => self.insert(NAME_FIELD, Value::String(n.to_string())),
            None => {
                self.0.remove(NAME_FIELD);
            }
        }
    }
}

#[cfg(test)]
impl Record {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get(NAME_FIELD).and_then(|v| v.as_str())
    }
}

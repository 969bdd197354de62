use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::CoreError;

/// Language code -> display name, as configured for the site.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct SiteLanguages {
    names: BTreeMap<String, String>,
}

impl SiteLanguages {
    /// Reads the table stored under `key` in a settings payload.
    ///
    /// An absent table is treated as empty, so every lookup misses.
    pub fn from_settings(settings: &Value, key: &str) -> Result<Self, CoreError> {
        let table = match settings.get(key) {
            None | Some(Value::Null) => {
                warn!(key, "settings has no site languages table, names will be empty");
                return Ok(SiteLanguages::default());
            }
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(CoreError::Payload(format!(
                    "settings.{key} must be an object of code -> name"
                )))
            }
        };

        let mut names = BTreeMap::new();
        for (code, name) in table {
            match name.as_str() {
                Some(n) => {
                    names.insert(code.clone(), n.to_string());
                }
                None => {
                    return Err(CoreError::Payload(format!(
                        "settings.{key}.{code} is not a string"
                    )))
                }
            }
        }

        Ok(SiteLanguages { names })
    }

    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }
}

#[cfg(test)]
impl SiteLanguages {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

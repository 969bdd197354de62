use serde::{Deserialize, Serialize};

use crate::error::CoreError;

fn default_languages_key() -> String {
    "xtle.admin.languages".to_string()
}

fn default_site_languages_key() -> String {
    "xtle.languages.site".to_string()
}

/// Names of the payload keys shared with the console and the backend API.
///
/// `languages` addresses both the positional rows in the data payload and the
/// field list in the schema payload; `site_languages` addresses the
/// code -> display name table in the settings payload.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReducerKeys {
    #[serde(default = "default_languages_key")]
    pub languages: String,

    #[serde(default = "default_site_languages_key")]
    pub site_languages: String,
}

impl Default for ReducerKeys {
    fn default() -> Self {
        ReducerKeys {
            languages: default_languages_key(),
            site_languages: default_site_languages_key(),
        }
    }
}

impl ReducerKeys {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.languages.trim().is_empty() {
            return Err(CoreError::Config("keys.languages must not be empty".into()));
        }
        if self.site_languages.trim().is_empty() {
            return Err(CoreError::Config(
                "keys.site_languages must not be empty".into(),
            ));
        }
        Ok(())
    }
}

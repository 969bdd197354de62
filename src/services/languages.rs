use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::keys::ReducerKeys;
use crate::model::record::{Record, CODE_FIELD};
use crate::model::schema::{RowPolicy, Schema};
use crate::model::site_languages::SiteLanguages;
use crate::services::{language_code, rows};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct LanguagesReport {
    /// Codes with no entry in the site languages table.
    pub missing_names: Vec<String>,
    /// Indices of records without a usable `code`.
    pub rows_without_code: Vec<usize>,
    /// Codes that do not look like language codes.
    pub invalid_codes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguagesReduction {
    pub languages: Vec<Record>,
    pub report: LanguagesReport,
}

impl LanguagesReduction {
    /// Console-facing shape: records under the languages key, plus the report.
    pub fn into_payload(self, keys: &ReducerKeys) -> Value {
        let mut out = serde_json::Map::new();
        out.insert(keys.languages.clone(), json!(self.languages));
        out.insert("report".to_string(), json!(self.report));
        Value::Object(out)
    }
}

/// Sets `name` on every record from the site languages table, clearing it when
/// the code has no entry.
pub fn attach_names(records: &mut [Record], table: &SiteLanguages) -> LanguagesReport {
    let mut report = LanguagesReport::default();
    let mut missing_seen: HashSet<String> = HashSet::new();
    let mut codes: Vec<String> = Vec::new();

    for (i, record) in records.iter_mut().enumerate() {
        let code = record.code().map(|c| c.into_owned());

        let name = match code.as_deref() {
            Some(c) => table.name_for(c),
            None => None,
        };
        record.set_name(name);

        match code {
            None => {
                debug!(row = i, "record has no code, name left empty");
                report.rows_without_code.push(i);
            }
            Some(c) => {
                if name.is_none() && missing_seen.insert(c.clone()) {
                    debug!(code = %c, "no site language name for code");
                    report.missing_names.push(c.clone());
                }
                codes.push(c);
            }
        }
    }

    report.invalid_codes = language_code::invalid_codes(codes.iter().map(String::as_str));

    if !report.missing_names.is_empty() {
        warn!(
            count = report.missing_names.len(),
            "languages without a site language name"
        );
    }

    report
}

/// Decodes the language rows of `data` with `schema` and names each one from
/// the site languages table in `settings`.
pub fn reduce(
    data: &Value,
    settings: &Value,
    schema: &Value,
    keys: &ReducerKeys,
    policy: RowPolicy,
) -> Result<LanguagesReduction, CoreError> {
    let schema = Schema::from_payload(schema, &keys.languages)?;
    if !schema.contains(CODE_FIELD) {
        warn!(key = %keys.languages, "schema has no code field, no names can be resolved");
    }

    let raw = rows::rows_from_payload(data, &keys.languages)?;
    let table = SiteLanguages::from_settings(settings, &keys.site_languages)?;

    let mut languages = rows::normalize_rows(&schema, raw, policy)?;
    let report = attach_names(&mut languages, &table);

    debug!(
        rows = languages.len(),
        policy = policy.as_str(),
        "languages reduced"
    );

    Ok(LanguagesReduction { languages, report })
}

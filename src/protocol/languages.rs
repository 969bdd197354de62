use serde_json::{json, Value};

use crate::config::Config;
use crate::error::CoreError;
use crate::model::schema::{RowPolicy, Schema};
use crate::model::site_languages::SiteLanguages;
use crate::services::{language_code, languages, rows};

static NULL: Value = Value::Null;

fn field<'a>(payload: &'a Value, name: &str) -> &'a Value {
    payload.get(name).unwrap_or(&NULL)
}

/// Per-request `row_policy`, falling back to the configured one.
fn row_policy(payload: &Value, cfg: &Config) -> Result<RowPolicy, CoreError> {
    match payload.get("row_policy") {
        None | Some(Value::Null) => Ok(cfg.reducer.row_policy),
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|e| CoreError::Payload(format!("invalid payload.row_policy: {e}"))),
    }
}

pub fn reduce(payload: &Value, cfg: &Config) -> Result<Value, CoreError> {
    let policy = row_policy(payload, cfg)?;

    let reduction = languages::reduce(
        field(payload, "data"),
        field(payload, "settings"),
        field(payload, "schema"),
        &cfg.keys,
        policy,
    )?;

    Ok(reduction.into_payload(&cfg.keys))
}

pub fn reduce_rows(payload: &Value, cfg: &Config) -> Result<Value, CoreError> {
    let key = payload
        .get("key")
        .and_then(|v| v.as_str())
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| CoreError::Payload("payload.key is required".into()))?;
    let policy = row_policy(payload, cfg)?;

    let schema = Schema::from_payload(field(payload, "schema"), key)?;
    let raw = rows::rows_from_payload(field(payload, "data"), key)?;
    let records = rows::normalize_rows(&schema, raw, policy)?;

    let mut out = serde_json::Map::new();
    out.insert(key.to_string(), json!(records));
    Ok(Value::Object(out))
}

pub fn validate_codes(payload: &Value, cfg: &Config) -> Result<Value, CoreError> {
    let table = SiteLanguages::from_settings(field(payload, "settings"), &cfg.keys.site_languages)?;
    Ok(json!({
        "invalid_codes": language_code::invalid_codes(table.codes())
    }))
}

pub fn keys(cfg: &Config) -> Value {
    json!({
        "languages": cfg.keys.languages,
        "site_languages": cfg.keys.site_languages,
        "row_policy": cfg.reducer.row_policy,
    })
}

use serde_json::Value;

use crate::error::CoreError;
use crate::model::record::Record;
use crate::model::schema::{RowPolicy, Schema};

/// Rows stored under `key` in a data payload. Absent or `null` means no rows.
pub fn rows_from_payload<'a>(data: &'a Value, key: &str) -> Result<&'a [Value], CoreError> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(rows)) => Ok(rows.as_slice()),
        Some(_) => Err(CoreError::Payload(format!(
            "data.{key} must be an array of rows"
        ))),
    }
}

/// Zips one row against the schema. Values past the last field are dropped and
/// fields past the last value are left out.
pub fn decode_row(schema: &Schema, row: &[Value]) -> Record {
    let mut record = Record::new();
    for (field, value) in schema.fields().iter().zip(row.iter()) {
        record.insert(field.clone(), value.clone());
    }
    record
}

pub fn normalize_rows(
    schema: &Schema,
    rows: &[Value],
    policy: RowPolicy,
) -> Result<Vec<Record>, CoreError> {
    let mut records: Vec<Record> = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let values = row
            .as_array()
            .ok_or_else(|| CoreError::Payload(format!("row {i} is not an array")))?;

        let expected = schema.fields().len();
        if policy == RowPolicy::Strict && values.len() != expected {
            return Err(CoreError::RowShape {
                row: i,
                expected,
                found: values.len(),
            });
        }

        records.push(decode_row(schema, values));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(fields: &[&str]) -> Schema {
        Schema::new(fields.iter().map(|f| f.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_rows_from_payload() {
        let data = json!({"rows": [["a"], ["b"]]});
        assert_eq!(rows_from_payload(&data, "rows").unwrap().len(), 2);
        assert!(rows_from_payload(&data, "missing").unwrap().is_empty());
        assert!(rows_from_payload(&json!({"rows": null}), "rows").unwrap().is_empty());
        assert!(rows_from_payload(&Value::Null, "rows").unwrap().is_empty());
        assert_eq!(
            rows_from_payload(&json!({"rows": {}}), "rows").unwrap_err().kind(),
            "payload"
        );
    }

    #[test]
    fn test_equal_length_rows() {
        let s = schema(&["code", "fullname"]);
        let rows = vec![json!(["en", "English"]), json!(["fr", "French"])];
        let records = normalize_rows(&s, &rows, RowPolicy::Strict).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("code"), Some(&json!("en")));
        assert_eq!(records[1].get("fullname"), Some(&json!("French")));
    }

    #[test]
    fn test_lenient_short_row_leaves_fields_out() {
        let s = schema(&["code", "fullname", "id"]);
        let records = normalize_rows(&s, &[json!(["en"])], RowPolicy::Lenient).unwrap();
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0].get("fullname"), None);
        assert_eq!(records[0].get("id"), None);
    }

    #[test]
    fn test_lenient_long_row_drops_extra_values() {
        let s = schema(&["code"]);
        let records = normalize_rows(&s, &[json!(["en", "extra", 7])], RowPolicy::Lenient).unwrap();
        assert_eq!(serde_json::to_value(&records[0]).unwrap(), json!({"code": "en"}));
    }

    #[test]
    fn test_strict_rejects_mismatch() {
        let s = schema(&["code", "fullname"]);
        let rows = vec![json!(["en", "English"]), json!(["fr"])];
        match normalize_rows(&s, &rows, RowPolicy::Strict) {
            Err(CoreError::RowShape { row, expected, found }) => {
                assert_eq!((row, expected, found), (1, 2, 1));
            }
            other => panic!("expected RowShape, got {other:?}"),
        }

        let long = vec![json!(["en", "English", "x"])];
        assert!(normalize_rows(&s, &long, RowPolicy::Strict).is_err());
    }

    #[test]
    fn test_non_array_row_is_payload_error() {
        let s = schema(&["code"]);
        let err = normalize_rows(&s, &[json!("en")], RowPolicy::Lenient).unwrap_err();
        assert_eq!(err.kind(), "payload");
    }

    #[test]
    fn test_null_values_are_kept() {
        let s = schema(&["code", "fullname"]);
        let records = normalize_rows(&s, &[json!(["en", null])], RowPolicy::Lenient).unwrap();
        assert_eq!(records[0].get("fullname"), Some(&Value::Null));
    }
}

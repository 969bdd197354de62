use serde_json::{json, Value};
use tracing::debug;

use crate::config::Config;
use crate::error::CoreError;

mod command;
mod languages;
use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload<'a>(req: &'a Value) -> &'a Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, kind: &str, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "kind": kind,
        "message": message.into()
    })
    .to_string()
}

fn reply(id: Value, result: Result<Value, CoreError>) -> String {
    match result {
        Ok(payload) => ok(id, payload),
        Err(e) => {
            debug!(kind = e.kind(), error = %e, "request failed");
            err(id, e.kind(), e.to_string())
        }
    }
}

/// Handles one request line and returns the response line.
pub fn handle(input: &str, cfg: &Config) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    debug!(cmd = cmd_str, "request");

    match Command::from(cmd_str) {
        Command::Ping => ok(id, json!({ "message": "xtle-core alive" })),

        Command::ConfigKeys => ok(id, languages::keys(cfg)),

        Command::LanguagesReduce => reply(id, languages::reduce(payload, cfg)),

        Command::LanguagesValidateCodes => reply(id, languages::validate_codes(payload, cfg)),

        Command::RowsReduce => reply(id, languages::reduce_rows(payload, cfg)),

        Command::Unknown => err(id, "protocol", "unknown command"),
    }
}

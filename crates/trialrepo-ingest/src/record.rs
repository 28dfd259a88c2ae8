//! Patient record loading.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{IngestError, Result};

/// A single patient record: field name to JSON value, in file order.
pub type Record = Map<String, Value>;

/// Reads one patient record from a JSON file.
///
/// The whole file must hold exactly one JSON object.
pub fn read_record(path: &Path) -> Result<Record> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let record = parse_record(&content, path)?;
    debug!(path = %path.display(), fields = record.len(), "read record");
    Ok(record)
}

/// Parses record text, attributing any failure to `path`.
pub fn parse_record(content: &str, path: &Path) -> Result<Record> {
    let value: Value = serde_json::from_str(content).map_err(|e| IngestError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(IngestError::NotAnObject {
            path: path.to_path_buf(),
            found: json_kind(&other),
        }),
    }
}

/// Short name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

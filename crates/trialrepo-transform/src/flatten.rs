//! Record flattening into single-level rows.

use serde_json::{Map, Value};

use trialrepo_ingest::Record;

/// Separator joining nested object keys into one column name.
pub const FLATTEN_SEPARATOR: &str = ".";

/// Flattens nested objects into dot-path keys.
///
/// `{"Scan": {"Site": "A"}}` becomes `{"Scan.Site": "A"}`. Only objects
/// are descended into; arrays and scalars are kept as leaf values. An
/// empty nested object contributes no keys. Key order follows the record.
pub fn flatten_record(record: &Record) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(None, record, &mut flat);
    flat
}

fn flatten_into(prefix: Option<&str>, object: &Map<String, Value>, flat: &mut Map<String, Value>) {
    for (key, value) in object {
        let name = match prefix {
            Some(prefix) => format!("{prefix}{FLATTEN_SEPARATOR}{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(nested) => flatten_into(Some(&name), nested, flat),
            leaf => {
                flat.insert(name, leaf.clone());
            }
        }
    }
}

//! File persistence helpers for fetched payloads.

use std::path::Path;

use serde_json::{Map, Value};

use crate::{FedFinError, Result};

/// Writes a JSON value to `path`, pretty-printed.
pub fn save_json(value: &Value, path: impl AsRef<Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| FedFinError::Export(format!("unserializable JSON value: {err}")))?;
    std::fs::write(path, text).map_err(FedFinError::Io)
}

/// Writes uniform-keyed records to `path` as CSV.
///
/// The header row comes from the first record's keys; every record is
/// rendered in that key order. Keys missing from a later record become empty
/// cells. An empty record list is an error, raised before the file is
/// created.
pub fn save_csv(records: &[Map<String, Value>], path: impl AsRef<Path>) -> Result<()> {
    if records.is_empty() {
        return Err(FedFinError::Export("no records to write".to_owned()));
    }

    let header: Vec<&str> = records[0].keys().map(String::as_str).collect();
    let mut writer = csv::Writer::from_path(path).map_err(FedFinError::Csv)?;
    writer.write_record(&header).map_err(FedFinError::Csv)?;
    for record in records {
        let row: Vec<String> = header
            .iter()
            .map(|key| render_cell(record.get(*key)))
            .collect();
        writer.write_record(&row).map_err(FedFinError::Csv)?;
    }
    writer.flush().map_err(FedFinError::Io)
}

/// Strings are written raw; other scalars use their JSON display form.
fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SummaryError};

/// Reads `path` and returns its top-level array elements in file order.
///
/// Every element is checked to be an object, but records are not decoded here;
/// that happens one at a time while printing.
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SummaryError::InputMissing {
            path: path.to_path_buf(),
        },
        _ => SummaryError::InputUnreadable {
            path: path.to_path_buf(),
            source: err,
        },
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read input file");

    parse_records(&text).map_err(|reason| SummaryError::InputMalformed {
        path: path.to_path_buf(),
        reason,
    })
}

fn parse_records(text: &str) -> std::result::Result<Vec<Value>, String> {
    let value: Value = serde_json::from_str(text).map_err(|err| err.to_string())?;
    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(format!(
                "expected a JSON array of issues, found {}",
                kind_of(&other)
            ))
        }
    };

    if let Some((index, other)) = records
        .iter()
        .enumerate()
        .find(|(_, record)| !record.is_object())
    {
        return Err(format!(
            "expected issue {} to be an object, found {}",
            index,
            kind_of(other)
        ));
    }

    debug!(count = records.len(), "parsed issue records");
    Ok(records)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

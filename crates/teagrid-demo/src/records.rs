//! JSON records and the columns inferred from them.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use teagrid::column::{Column, DynamicCell};
use thiserror::Error;

/// One record: a JSON object.
pub type Record = Map<String, Value>;

/// Messages the grid hands up to the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoMsg {
    /// The user asked for a column to be shown or hidden.
    ColumnToggled {
        /// Column title.
        title: String,
        /// Requested visibility.
        shown: bool,
    },
}

/// Errors from loading a records file.
#[derive(Error, Debug)]
pub enum RecordsError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level value is not an array.
    #[error("expected a JSON array of objects")]
    NotArray,

    /// An array element is not an object.
    #[error("record {index} is not a JSON object")]
    NotObject {
        /// Position in the array.
        index: usize,
    },
}

/// Parses a JSON array of objects.
pub fn parse_records(s: &str) -> Result<Vec<Record>, RecordsError> {
    let Value::Array(items) = serde_json::from_str(s)? else {
        return Err(RecordsError::NotArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(RecordsError::NotObject { index }),
        })
        .collect()
}

/// Reads and parses a records file.
pub fn load_records(path: &Path) -> Result<Vec<Record>, RecordsError> {
    let content = std::fs::read_to_string(path).map_err(|source| RecordsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&content)?;
    tracing::info!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Builds one column per key of `first`, typed by its value.
///
/// The first column is fixed; the rest can be toggled from the column panel.
pub fn infer_columns(first: &Record, width: usize) -> Vec<Column<Record, DemoMsg>> {
    first
        .iter()
        .enumerate()
        .map(|(idx, (key, value))| {
            let col = column_for(key, value).width(width);
            if idx == 0 {
                col
            } else {
                let title = key.clone();
                col.toggleable(move |shown| DemoMsg::ColumnToggled {
                    title: title.clone(),
                    shown,
                })
            }
        })
        .collect()
}

fn column_for(key: &str, value: &Value) -> Column<Record, DemoMsg> {
    let k = key.to_string();
    match value {
        Value::Number(n) if n.is_i64() => {
            Column::int(key, move |r: &Record| r.get(&k).and_then(Value::as_i64).unwrap_or_default())
        }
        Value::Number(_) => {
            Column::float(key, move |r: &Record| r.get(&k).and_then(Value::as_f64).unwrap_or_default())
        }
        Value::String(_) => Column::text(key, move |r: &Record| match r.get(&k) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }),
        _ => Column::dynamic(key, move |r: &Record| {
            let compact = r.get(&k).map(Value::to_string).unwrap_or_default();
            DynamicCell::new(compact.clone(), compact)
        }),
    }
}

/// The data set used when no file is given.
pub fn sample_records() -> Vec<Record> {
    const NAMES: [&str; 12] = [
        "Ada", "Bob", "Cy", "Dana", "Eli", "Fay", "Gus", "Hana", "Ivo", "Jun", "Kai", "Lena",
    ];
    const CITIES: [&str; 5] = ["Lisbon", "Oslo", "Quito", "Nairobi", "Osaka"];
    const TAGS: [&str; 4] = ["admin", "beta", "ops", "guest"];

    (0..42_usize)
        .filter_map(|i| {
            let value = json!({
                "name": format!("{} {}", NAMES[i % NAMES.len()], i / NAMES.len() + 1),
                "age": 18 + (i * 7) % 53,
                "city": CITIES[(i * 3) % CITIES.len()],
                "score": ((i * 37) % 100) as f64 / 10.0 + 0.5,
                "tags": [TAGS[i % TAGS.len()], TAGS[(i / 2) % TAGS.len()]],
            });
            match value {
                Value::Object(map) => Some(map),
                _ => None,
            }
        })
        .collect()
}

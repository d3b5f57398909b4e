//! Structured document loading: YAML, JSON and TOML into a JSON-shaped mapping.
//!
//! Parsing itself is delegated to `serde_yaml`, `serde_json` and `toml`; this
//! module only picks the parser and insists on a mapping at the top level.

mod format;

pub use format::Format;

use crate::error::DecodeError;
use crate::fetch::DocumentFetcher;
use serde_json::Value;
use std::path::Path;

/// A decoded document: string keys to arbitrary values.
pub type Document = serde_json::Map<String, Value>;

/// Decode `bytes` as `format` into a mapping.
pub fn decode(bytes: &[u8], format: Format) -> Result<Document, DecodeError> {
    let value: Value = match format {
        Format::Json => serde_json::from_slice(bytes)?,
        Format::Yaml => {
            // A YAML stream with no data (blank, comments only, bare `---`) is null.
            let value: Value = serde_yaml::from_slice(bytes)?;
            if value.is_null() {
                return Ok(Document::new());
            }
            value
        }
        Format::Toml => {
            let table: toml::Value = toml::from_str(std::str::from_utf8(bytes)?)?;
            toml_to_json(table)
        }
    };
    into_mapping(value)
}

/// TOML datetimes become their RFC 3339 text; non-finite floats become null.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(d) => Value::String(d.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

fn into_mapping(value: Value) -> Result<Document, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Err(DecodeError::NotAMapping("null")),
        Value::Bool(_) => Err(DecodeError::NotAMapping("a boolean")),
        Value::Number(_) => Err(DecodeError::NotAMapping("a number")),
        Value::String(_) => Err(DecodeError::NotAMapping("a string")),
        Value::Array(_) => Err(DecodeError::NotAMapping("a list")),
    }
}

/// Read and decode a local file, choosing the format from its extension.
pub fn load_path(path: &Path) -> Result<Document, DecodeError> {
    let format = Format::from_path(path)
        .ok_or_else(|| DecodeError::UnknownFormat(path.display().to_string()))?;
    load_as(path, format)
}

/// Read and decode a local file as `format`, ignoring its extension.
pub fn load_as(path: &Path, format: Format) -> Result<Document, DecodeError> {
    let bytes = std::fs::read(path).map_err(|source| DecodeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    decode(&bytes, format)
}

pub fn load_yaml(path: &Path) -> Result<Document, DecodeError> {
    load_as(path, Format::Yaml)
}

pub fn load_json(path: &Path) -> Result<Document, DecodeError> {
    load_as(path, Format::Json)
}

pub fn load_toml(path: &Path) -> Result<Document, DecodeError> {
    load_as(path, Format::Toml)
}

/// Fetch a remote document in full and decode it.
pub fn fetch_document<F: DocumentFetcher>(
    fetcher: &F,
    url: &str,
    format: Format,
) -> Result<Document, DecodeError> {
    let bytes = fetcher.fetch_full_document(url)?;
    decode(&bytes, format)
}

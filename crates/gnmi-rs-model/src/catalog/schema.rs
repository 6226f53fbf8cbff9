//! Schema validation helpers for JSON5 model catalogs.

use crate::CatalogError;
use serde_json::{Map, Value};

/// Validate a catalog document before decoding it.
pub(super) fn validate_catalog_schema(value: &Value, label: &str) -> Result<(), CatalogError> {
    let map = expect_object(value, label, "")?;
    ensure_allowed_keys(map, &["$schema", "models"], label, "")?;

    if let Some(value) = map.get("$schema") {
        expect_string(value, label, "$schema")?;
    }
    match map.get("models") {
        None => {}
        Some(Value::Array(models)) => {
            for (idx, entry) in models.iter().enumerate() {
                validate_model(entry, label, &format!("models[{idx}]"))?;
            }
        }
        Some(_) => return Err(invalid_field(label, "models", "expected array")),
    }
    Ok(())
}

/// Validate a single model descriptor.
fn validate_model(value: &Value, label: &str, path: &str) -> Result<(), CatalogError> {
    let map = expect_object(value, label, path)?;
    ensure_allowed_keys(map, &["name", "organization", "version"], label, path)?;

    for key in ["name", "version"] {
        let key_path = join_path(path, key);
        let Some(value) = map.get(key) else {
            return Err(invalid_field(label, &key_path, "missing required field"));
        };
        expect_string(value, label, &key_path)?;
    }
    if let Some(value) = map.get("organization") {
        expect_string(value, label, &join_path(path, "organization"))?;
    }
    Ok(())
}

/// Borrow `value` as an object, or report the catalog location that is not one.
fn expect_object<'a>(
    value: &'a Value,
    label: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, CatalogError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(invalid_field(label, path, "expected object")),
    }
}

/// Descriptor fields are all strings.
fn expect_string(value: &Value, label: &str, path: &str) -> Result<(), CatalogError> {
    if value.as_str().is_some() {
        Ok(())
    } else {
        Err(invalid_field(label, path, "expected string"))
    }
}

/// Reject the first key outside `allowed`.
fn ensure_allowed_keys(
    map: &Map<String, Value>,
    allowed: &[&str],
    label: &str,
    path: &str,
) -> Result<(), CatalogError> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(invalid_field(label, &join_path(path, key), "unknown key"));
        }
    }
    Ok(())
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// `label:path`, with the document root spelled `root`.
fn invalid_field(label: &str, path: &str, message: &str) -> CatalogError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    CatalogError::InvalidField {
        path: format!("{label}:{normalized_path}"),
        message: message.to_string(),
    }
}

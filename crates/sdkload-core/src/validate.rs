//! Manifest validator.
//!
//! Pure checks, no side effects. Two entry points:
//! - `decode_manifest`: shape checks on untyped input (where a non-array
//!   `chunks`/`css` can actually occur).
//! - `validate`: pre-flight checks on a typed `ConfigMap`, returning the
//!   ordered bundle list every later stage is driven by.

use serde_json::Value;

use crate::error::ConfigError;
use crate::manifest::{json_type, BundleManifest, ConfigMap};

/// A validated bundle, carried by name through every later stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBundle {
    pub name: String,
    pub manifest: BundleManifest,
}

/// Validate the whole map. Fails on the first offending bundle.
///
/// The returned list preserves the map's insertion order.
pub fn validate(configs: &ConfigMap) -> std::result::Result<Vec<NamedBundle>, ConfigError> {
    if configs.is_empty() {
        return Err(ConfigError::NoBundles);
    }

    let mut out = Vec::with_capacity(configs.len());
    for (name, manifest) in configs.iter() {
        if manifest.entry.is_empty() {
            return Err(ConfigError::MissingEntry { bundle: name.to_string() });
        }
        out.push(NamedBundle {
            name: name.to_string(),
            manifest: manifest.clone(),
        });
    }
    Ok(out)
}

/// Decode one untyped manifest value.
///
/// `entry` must be a non-empty string. A falsy `entry` (null, false, 0, "")
/// counts as missing. `chunks`/`css` may be absent or null;
/// when present they must be arrays of strings. Unknown keys are ignored.
pub fn decode_manifest(bundle: &str, raw: &Value) -> std::result::Result<BundleManifest, ConfigError> {
    let obj = raw.as_object().ok_or_else(|| {
        ConfigError::Invalid(format!("bundle {bundle} must be a map, got {}", json_type(raw)))
    })?;

    // falsy reads as missing; any other non-string is a type error
    let entry = match obj.get("entry") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        None | Some(Value::Null) | Some(Value::Bool(false)) | Some(Value::String(_)) => {
            return Err(ConfigError::MissingEntry { bundle: bundle.to_string() })
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
            return Err(ConfigError::MissingEntry { bundle: bundle.to_string() })
        }
        Some(other) => {
            return Err(ConfigError::Invalid(format!(
                "bundle {bundle} entry must be a string, got {}",
                json_type(other)
            )))
        }
    };

    let chunks = string_array(obj.get("chunks"))
        .map_err(|()| ConfigError::ChunksNotArray { bundle: bundle.to_string() })?;
    let css = string_array(obj.get("css"))
        .map_err(|()| ConfigError::CssNotArray { bundle: bundle.to_string() })?;

    let version = match obj.get("version") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => {
            return Err(ConfigError::Invalid(format!(
                "bundle {bundle} version must be a string, got {}",
                json_type(other)
            )))
        }
    };

    Ok(BundleManifest { entry, chunks, css, version })
}

fn string_array(v: Option<&Value>) -> std::result::Result<Option<Vec<String>>, ()> {
    match v {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|i| i.as_str().map(str::to_string).ok_or(()))
            .collect::<std::result::Result<Vec<_>, ()>>()
            .map(Some),
        Some(_) => Err(()),
    }
}

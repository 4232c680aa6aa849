//! Bundle manifests and the ordered config map.
//!
//! `ConfigMap` keeps bundle names in insertion order. Results are correlated
//! back to names by position, so the order is part of the contract and is
//! never delegated to a hashed or sorted map type.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::validate::decode_manifest;

/// One loadable unit: an entry module plus optional chunks and stylesheets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BundleManifest {
    pub entry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BundleManifest {
    pub fn new(entry: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            ..Self::default()
        }
    }

    pub fn with_chunks<I, S>(mut self, chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chunks = Some(chunks.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_css<I, S>(mut self, css: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.css = Some(css.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Chunk specifiers, empty when absent.
    pub fn chunk_specifiers(&self) -> &[String] {
        self.chunks.as_deref().unwrap_or_default()
    }

    /// Stylesheet references, empty when absent.
    pub fn css_refs(&self) -> &[String] {
        self.css.as_deref().unwrap_or_default()
    }
}

/// Bundle name -> manifest, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap {
    bundles: Vec<(String, BundleManifest)>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a bundle. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, manifest: BundleManifest) -> Option<BundleManifest> {
        let name = name.into();
        if let Some((_, slot)) = self.bundles.iter_mut().find(|(n, _)| *n == name) {
            return Some(std::mem::replace(slot, manifest));
        }
        self.bundles.push((name, manifest));
        None
    }

    pub fn with_bundle(mut self, name: impl Into<String>, manifest: BundleManifest) -> Self {
        self.insert(name, manifest);
        self
    }

    pub fn get(&self, name: &str) -> Option<&BundleManifest> {
        self.bundles.iter().find(|(n, _)| n == name).map(|(_, m)| m)
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bundles.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BundleManifest)> {
        self.bundles.iter().map(|(n, m)| (n.as_str(), m))
    }

    /// Build from an untyped value (e.g. a fetched module's default export).
    ///
    /// `null` yields an empty map so the validator reports "no bundles".
    pub fn from_value(value: Value) -> std::result::Result<Self, ConfigError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => {
                let mut out = Self::new();
                for (name, raw) in map {
                    let manifest = decode_manifest(&name, &raw)?;
                    out.insert(name, manifest);
                }
                Ok(out)
            }
            other => Err(ConfigError::Invalid(format!(
                "config must be a map of bundles, got {}",
                json_type(&other)
            ))),
        }
    }
}

impl FromIterator<(String, BundleManifest)> for ConfigMap {
    fn from_iter<T: IntoIterator<Item = (String, BundleManifest)>>(iter: T) -> Self {
        let mut out = Self::new();
        for (name, manifest) in iter {
            out.insert(name, manifest);
        }
        out
    }
}

impl<'de> Deserialize<'de> for ConfigMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfigMapVisitor;

        impl<'de> Visitor<'de> for ConfigMapVisitor {
            type Value = ConfigMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of bundle name to manifest")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<ConfigMap, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut out = ConfigMap::new();
                while let Some((name, raw)) = access.next_entry::<String, Value>()? {
                    let manifest = decode_manifest(&name, &raw).map_err(de::Error::custom)?;
                    out.insert(name, manifest);
                }
                Ok(out)
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<ConfigMap, E> {
                Ok(ConfigMap::new())
            }
        }

        deserializer.deserialize_any(ConfigMapVisitor)
    }
}

pub(crate) fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use sdkload_core::{ConfigMap, CssEffect};

use crate::dom::DocumentRoot;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Per-call load options.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoadOptions {
    /// Global deadline in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout: u64,
    /// Resolve chunks before the entry module.
    #[serde(default, alias = "chunksDep")]
    pub chunks_preload: bool,
    #[serde(default)]
    pub css_effect: CssEffect,
    /// Target root for stylesheet attachment. `None` uses the host document.
    #[serde(skip)]
    pub document_root: Option<Arc<dyn DocumentRoot>>,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_MS,
            chunks_preload: false,
            css_effect: CssEffect::None,
            document_root: None,
        }
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("timeout", &self.timeout)
            .field("chunks_preload", &self.chunks_preload)
            .field("css_effect", &self.css_effect)
            .field("document_root", &self.document_root.as_ref().map(|_| "<root>"))
            .finish()
    }
}

impl LoadOptions {
    pub fn with_timeout(mut self, ms: u64) -> Self {
        self.timeout = ms;
        self
    }

    pub fn with_chunks_preload(mut self, enabled: bool) -> Self {
        self.chunks_preload = enabled;
        self
    }

    pub fn with_css_effect(mut self, effect: CssEffect) -> Self {
        self.css_effect = effect;
        self
    }

    pub fn with_document_root(mut self, root: Arc<dyn DocumentRoot>) -> Self {
        self.document_root = Some(root);
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }
}

/// Where the config map comes from.
#[derive(Debug, Clone)]
pub enum SdkConfigs {
    /// Already in memory.
    Map(ConfigMap),
    /// Specifier of a module whose default export is the map.
    Specifier(String),
}

impl From<ConfigMap> for SdkConfigs {
    fn from(map: ConfigMap) -> Self {
        SdkConfigs::Map(map)
    }
}

impl From<&str> for SdkConfigs {
    fn from(s: &str) -> Self {
        SdkConfigs::Specifier(s.to_string())
    }
}

impl From<String> for SdkConfigs {
    fn from(s: String) -> Self {
        SdkConfigs::Specifier(s)
    }
}

impl<'de> Deserialize<'de> for SdkConfigs {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(SdkConfigs::Specifier(s)),
            other => ConfigMap::from_value(other)
                .map(SdkConfigs::Map)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Input of a single `load` call.
#[derive(Debug, Clone)]
pub struct LoadParams {
    pub sdk_configs: SdkConfigs,
    pub options: LoadOptions,
}

impl LoadParams {
    pub fn new(sdk_configs: impl Into<SdkConfigs>) -> Self {
        Self {
            sdk_configs: sdk_configs.into(),
            options: LoadOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }
}

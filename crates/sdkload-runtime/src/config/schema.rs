use serde::Deserialize;

use sdkload_core::error::{ConfigError, Result};

use crate::dom::MemoryDocument;
use crate::load::{LoadOptions, SdkConfigs};

const MAX_TIMEOUT_MS: u64 = 600_000;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    pub version: u32,

    /// Inline bundle map, or a specifier resolved under `base_dir`.
    pub sdk_configs: SdkConfigs,

    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    #[serde(default)]
    pub options: LoadOptions,

    #[serde(default)]
    pub document: DocumentSection,
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ConfigError::Invalid(format!("unsupported config version: {}", self.version)).into());
        }
        if !(1..=MAX_TIMEOUT_MS).contains(&self.options.timeout) {
            return Err(ConfigError::Invalid(format!(
                "options.timeout must be between 1 and {MAX_TIMEOUT_MS}"
            ))
            .into());
        }
        if self.base_dir.is_empty() {
            return Err(ConfigError::Invalid("base_dir must not be empty".into()).into());
        }
        Ok(())
    }
}

fn default_base_dir() -> String {
    ".".into()
}

/// Shape of the in-memory document the runner attaches stylesheets to.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentSection {
    #[serde(default)]
    pub adopted_stylesheets: bool,

    #[serde(default = "default_head")]
    pub head: bool,

    /// Links to these hrefs fire their error signal.
    #[serde(default)]
    pub broken_links: Vec<String>,
}

impl Default for DocumentSection {
    fn default() -> Self {
        Self {
            adopted_stylesheets: false,
            head: default_head(),
            broken_links: Vec::new(),
        }
    }
}

impl DocumentSection {
    pub fn build(&self) -> MemoryDocument {
        let mut doc = MemoryDocument::new().with_adoption(self.adopted_stylesheets);
        if !self.head {
            doc = doc.without_head();
        }
        for href in &self.broken_links {
            doc.mark_broken(href.clone());
        }
        doc
    }
}

fn default_head() -> bool {
    true
}

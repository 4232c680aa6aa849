use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use sdkload_core::error::Result;

/// Shared handle to a resolved module.
pub type ModuleHandle = Arc<Module>;

/// A resolved module: its specifier, raw source, and default export.
#[derive(Debug)]
pub struct Module {
    specifier: String,
    source: Bytes,
    default_export: Option<Export>,
}

/// What a module exposes as its default export.
#[derive(Debug, Clone)]
pub enum Export {
    /// Structured data (e.g. a remote manifest).
    Json(serde_json::Value),
    /// A constructed stylesheet, adoptable by a document root.
    StyleSheet(Arc<StyleSheet>),
}

impl Module {
    pub fn new(specifier: impl Into<String>, source: impl Into<Bytes>) -> Self {
        Self {
            specifier: specifier.into(),
            source: source.into(),
            default_export: None,
        }
    }

    pub fn with_default(mut self, export: Export) -> Self {
        self.default_export = Some(export);
        self
    }

    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    pub fn source(&self) -> &Bytes {
        &self.source
    }

    pub fn default_export(&self) -> Option<&Export> {
        self.default_export.as_ref()
    }
}

/// Constructed stylesheet. Identity is the `Arc`, not the text.
#[derive(Debug, PartialEq, Eq)]
pub struct StyleSheet {
    href: Option<String>,
    text: String,
}

impl StyleSheet {
    pub fn new(href: Option<String>, text: impl Into<String>) -> Self {
        Self { href, text: text.into() }
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Module-loading substrate. Owns resolution and caching; callers only
/// sequence `resolve` calls.
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    async fn resolve(&self, specifier: &str) -> Result<ModuleHandle>;
}

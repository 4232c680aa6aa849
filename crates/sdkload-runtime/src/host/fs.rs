//! Filesystem-backed substrate.
//!
//! Specifiers are paths relative to a base directory (a leading `/` is
//! ignored). `.json` files export their parsed value, `.css` files export a
//! constructed stylesheet, everything else exports nothing. Resolved modules
//! are cached per specifier for the lifetime of the loader.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use sdkload_core::error::{Result, SdkLoadError};

use super::module::{Export, Module, ModuleHandle, ModuleLoader, StyleSheet};

pub struct FsModuleLoader {
    base_dir: PathBuf,
    cache: DashMap<String, ModuleHandle>,
}

impl FsModuleLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            cache: DashMap::new(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, specifier: &str) -> Result<PathBuf> {
        let rel = Path::new(specifier.trim_start_matches('/'));
        if rel.as_os_str().is_empty() {
            return Err(SdkLoadError::load(specifier, "empty path"));
        }
        // stay under base_dir
        if rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(SdkLoadError::load(specifier, "path escapes base_dir"));
        }
        Ok(self.base_dir.join(rel))
    }
}

#[async_trait]
impl ModuleLoader for FsModuleLoader {
    async fn resolve(&self, specifier: &str) -> Result<ModuleHandle> {
        if let Some(hit) = self.cache.get(specifier) {
            return Ok(Arc::clone(hit.value()));
        }

        let path = self.path_for(specifier)?;
        let raw = tokio::fs::read(&path)
            .await
            .map_err(|e| SdkLoadError::load(specifier, format!("read {} failed: {e}", path.display())))?;
        tracing::debug!(%specifier, path = %path.display(), bytes = raw.len(), "module read");

        let source = Bytes::from(raw);
        let export = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {
                let v: serde_json::Value = serde_json::from_slice(&source)
                    .map_err(|e| SdkLoadError::load(specifier, format!("invalid json: {e}")))?;
                Some(Export::Json(v))
            }
            Some("css") => {
                let text = std::str::from_utf8(&source)
                    .map_err(|e| SdkLoadError::load(specifier, format!("stylesheet is not utf-8: {e}")))?;
                Some(Export::StyleSheet(Arc::new(StyleSheet::new(
                    Some(specifier.to_string()),
                    text,
                ))))
            }
            _ => None,
        };

        let mut module = Module::new(specifier, source);
        if let Some(export) = export {
            module = module.with_default(export);
        }

        // first writer wins so concurrent resolutions share one handle
        let handle = self
            .cache
            .entry(specifier.to_string())
            .or_insert_with(|| Arc::new(module))
            .value()
            .clone();
        Ok(handle)
    }
}

use futures_util::future::try_join_all;

use sdkload_core::error::{Result, SdkLoadError};
use sdkload_core::NamedBundle;

use super::options::LoadOptions;
use super::stylesheet::{self, AttachedCss};
use crate::dom::DocumentRoot;
use crate::host::{ModuleHandle, ModuleLoader};

/// Output counterpart of a `BundleManifest`.
#[derive(Debug, Clone)]
pub struct ResolvedBundle {
    pub entry: ModuleHandle,
    /// `None` when the manifest listed no chunks.
    pub chunks: Option<Vec<ModuleHandle>>,
    /// `None` when the manifest listed no stylesheets.
    pub css: Option<Vec<AttachedCss>>,
    pub version: Option<String>,
}

/// Resolve one bundle: entry, chunks and stylesheets fan out concurrently.
///
/// With `chunks_preload` the entry is only requested after every chunk has
/// resolved. Any failure fails the whole bundle.
pub async fn resolve_bundle(
    modules: &dyn ModuleLoader,
    bundle: &NamedBundle,
    options: &LoadOptions,
    root: &dyn DocumentRoot,
) -> Result<ResolvedBundle> {
    let manifest = &bundle.manifest;
    tracing::debug!(
        bundle = %bundle.name,
        entry = %manifest.entry,
        chunks = manifest.chunk_specifiers().len(),
        css = manifest.css_refs().len(),
        preload = options.chunks_preload,
        "resolving bundle"
    );

    let chunks = resolve_all(modules, manifest.chunk_specifiers());
    let css = stylesheet::attach(modules, manifest.css_refs(), options.css_effect, root);

    let (entry, chunks, css) = if options.chunks_preload {
        let ordered = async {
            let chunks = chunks.await?;
            tracing::debug!(bundle = %bundle.name, "chunks ready, resolving entry");
            let entry = modules.resolve(&manifest.entry).await?;
            Ok::<_, SdkLoadError>((entry, chunks))
        };
        let ((entry, chunks), css) = tokio::try_join!(ordered, css)?;
        (entry, chunks, css)
    } else {
        tokio::try_join!(modules.resolve(&manifest.entry), chunks, css)?
    };

    Ok(ResolvedBundle {
        entry,
        chunks: non_empty(chunks),
        css: non_empty(css),
        version: manifest.version.clone(),
    })
}

async fn resolve_all(modules: &dyn ModuleLoader, specifiers: &[String]) -> Result<Vec<ModuleHandle>> {
    if specifiers.is_empty() {
        return Ok(Vec::new());
    }
    try_join_all(specifiers.iter().map(|s| modules.resolve(s))).await
}

fn non_empty<T>(v: Vec<T>) -> Option<Vec<T>> {
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}

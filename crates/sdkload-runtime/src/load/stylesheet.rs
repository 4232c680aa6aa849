//! Stylesheet attacher.
//!
//! Every reference of one call is processed concurrently. The call waits for
//! all of them and then reports the first failure in input order, so document
//! mutations of the siblings are complete either way.

use std::sync::Arc;

use futures_util::future::join_all;

use sdkload_core::error::{Result, SdkLoadError};
use sdkload_core::CssEffect;

use crate::dom::{DocumentRoot, LinkElement, Mount};
use crate::host::{Export, ModuleHandle, ModuleLoader};

/// One attached stylesheet.
#[derive(Debug, Clone)]
pub enum AttachedCss {
    /// Resolved as a module (plain or adopted).
    Module(ModuleHandle),
    /// Attached as a link element.
    Element(LinkElement),
}

impl AttachedCss {
    pub fn as_module(&self) -> Option<&ModuleHandle> {
        match self {
            AttachedCss::Module(m) => Some(m),
            AttachedCss::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&LinkElement> {
        match self {
            AttachedCss::Element(e) => Some(e),
            AttachedCss::Module(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Module,
    Link,
    Adopt,
}

impl Strategy {
    fn pick(mode: CssEffect, root: &dyn DocumentRoot) -> Self {
        match mode {
            CssEffect::None => Strategy::Module,
            CssEffect::Link => Strategy::Link,
            CssEffect::Auto if root.supports_adopted_stylesheets() => Strategy::Adopt,
            CssEffect::Auto => Strategy::Link,
        }
    }
}

pub async fn attach(
    modules: &dyn ModuleLoader,
    refs: &[String],
    mode: CssEffect,
    root: &dyn DocumentRoot,
) -> Result<Vec<AttachedCss>> {
    if refs.is_empty() {
        return Ok(Vec::new());
    }

    let strategy = Strategy::pick(mode, root);
    tracing::debug!(count = refs.len(), %mode, ?strategy, "attaching stylesheets");

    let settled = join_all(refs.iter().map(|href| async move {
        match strategy {
            Strategy::Module => modules.resolve(href).await.map(AttachedCss::Module),
            Strategy::Link => attach_link(href, root).await.map(AttachedCss::Element),
            Strategy::Adopt => adopt(modules, href, root).await.map(AttachedCss::Module),
        }
    }))
    .await;

    settled.into_iter().collect()
}

async fn attach_link(href: &str, root: &dyn DocumentRoot) -> Result<LinkElement> {
    let mount = if root.has_head() { Mount::Head } else { Mount::Root };
    let (link, created) = root.link_or_insert(href, mount);
    if !created {
        tracing::debug!(%href, id = link.id(), "reusing stylesheet link");
    }

    link.settled().await.map_err(|reason| SdkLoadError::Stylesheet {
        href: href.to_string(),
        reason,
    })?;
    Ok(link)
}

async fn adopt(modules: &dyn ModuleLoader, href: &str, root: &dyn DocumentRoot) -> Result<ModuleHandle> {
    let module = modules.resolve(href).await?;
    let sheet = match module.default_export() {
        Some(Export::StyleSheet(sheet)) => Arc::clone(sheet),
        _ => {
            return Err(SdkLoadError::load(
                href,
                "default export is not a constructed stylesheet",
            ))
        }
    };

    // dedup by identity, not by href
    if !root.adopt_if_absent(&sheet) {
        tracing::debug!(%href, "stylesheet already adopted");
    }
    Ok(module)
}

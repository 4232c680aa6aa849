//! Host collaborators: module substrate, fetch capability, default document.
//!
//! The loader never reaches for globals. Everything it touches outside its
//! own logic is handed in through `Host`.

mod fetch;
mod fs;
mod module;
mod registry;

use std::sync::Arc;

pub use fetch::{ensure_fetch, FetchCapability, NativeFetch};
pub use fs::FsModuleLoader;
pub use module::{Export, Module, ModuleHandle, ModuleLoader, StyleSheet};
pub use registry::ModuleRegistry;

use crate::dom::DocumentRoot;

#[derive(Clone)]
pub struct Host {
    modules: Arc<dyn ModuleLoader>,
    document: Arc<dyn DocumentRoot>,
    fetch: Arc<dyn FetchCapability>,
}

impl Host {
    /// Host with a native fetch primitive.
    pub fn new(modules: Arc<dyn ModuleLoader>, document: Arc<dyn DocumentRoot>) -> Self {
        Self {
            modules,
            document,
            fetch: Arc::new(NativeFetch),
        }
    }

    pub fn with_fetch(mut self, fetch: Arc<dyn FetchCapability>) -> Self {
        self.fetch = fetch;
        self
    }

    pub fn modules(&self) -> Arc<dyn ModuleLoader> {
        Arc::clone(&self.modules)
    }

    /// Document used when a load call does not name its own root.
    pub fn document(&self) -> Arc<dyn DocumentRoot> {
        Arc::clone(&self.document)
    }

    pub fn fetch(&self) -> &dyn FetchCapability {
        self.fetch.as_ref()
    }
}

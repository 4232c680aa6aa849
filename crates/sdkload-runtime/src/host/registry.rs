use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use sdkload_core::error::{Result, SdkLoadError};

use super::module::{Module, ModuleHandle, ModuleLoader};

/// In-memory substrate over pre-registered modules.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: DashMap<String, ModuleHandle>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            modules: DashMap::new(),
        }
    }

    /// Register (or replace) a module under its own specifier.
    pub fn register(&self, module: Module) -> ModuleHandle {
        let handle = Arc::new(module);
        self.modules
            .insert(handle.specifier().to_string(), Arc::clone(&handle));
        handle
    }

    pub fn registered(&self) -> Vec<String> {
        self.modules.iter().map(|e| e.key().clone()).collect()
    }
}

#[async_trait]
impl ModuleLoader for ModuleRegistry {
    async fn resolve(&self, specifier: &str) -> Result<ModuleHandle> {
        self.modules
            .get(specifier)
            .map(|e| Arc::clone(e.value()))
            .ok_or_else(|| SdkLoadError::load(specifier, "module not registered"))
    }
}

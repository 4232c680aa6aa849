//! Instrumented substrate shared by runtime tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;

use sdkload_core::error::{Result, SdkLoadError};
use sdkload_runtime::host::{Export, Module, ModuleHandle, ModuleLoader, StyleSheet};

#[derive(Clone, Default)]
struct Script {
    delay: Duration,
    fail: Option<String>,
    export: Option<Export>,
}

/// Substrate that records `start:`/`end:` events and counts calls.
#[derive(Default)]
pub struct ScriptedLoader {
    scripts: DashMap<String, Script>,
    events: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedLoader {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn module(&self, specifier: &str) -> &Self {
        self.scripts.insert(specifier.into(), Script::default());
        self
    }

    pub fn delayed(&self, specifier: &str, ms: u64) -> &Self {
        self.scripts.insert(
            specifier.into(),
            Script {
                delay: Duration::from_millis(ms),
                ..Script::default()
            },
        );
        self
    }

    pub fn failing(&self, specifier: &str, reason: &str) -> &Self {
        self.scripts.insert(
            specifier.into(),
            Script {
                fail: Some(reason.into()),
                ..Script::default()
            },
        );
        self
    }

    pub fn json(&self, specifier: &str, value: serde_json::Value) -> &Self {
        self.scripts.insert(
            specifier.into(),
            Script {
                export: Some(Export::Json(value)),
                ..Script::default()
            },
        );
        self
    }

    pub fn stylesheet(&self, specifier: &str, sheet: Arc<StyleSheet>) -> &Self {
        self.scripts.insert(
            specifier.into(),
            Script {
                export: Some(Export::StyleSheet(sheet)),
                ..Script::default()
            },
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    /// Position of an event; panics when missing.
    pub fn position(&self, event: &str) -> usize {
        let events = self.events();
        events
            .iter()
            .position(|e| e == event)
            .unwrap_or_else(|| panic!("event {event} not recorded in {events:?}"))
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ModuleLoader for ScriptedLoader {
    async fn resolve(&self, specifier: &str) -> Result<ModuleHandle> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let script = self
            .scripts
            .get(specifier)
            .map(|s| s.value().clone())
            .ok_or_else(|| SdkLoadError::load(specifier, "unknown specifier"))?;

        self.record(format!("start:{specifier}"));
        if !script.delay.is_zero() {
            tokio::time::sleep(script.delay).await;
        }
        self.record(format!("end:{specifier}"));

        if let Some(reason) = script.fail {
            return Err(SdkLoadError::load(specifier, reason));
        }
        let mut module = Module::new(specifier, format!("/* {specifier} */"));
        if let Some(export) = script.export {
            module = module.with_default(export);
        }
        Ok(Arc::new(module))
    }
}

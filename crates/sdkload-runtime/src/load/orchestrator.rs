//! Load orchestrator.
//!
//! Flow per call:
//! - ensure the host fetch primitive, resolve the config map
//! - validate (fails before any bundle work or timer starts)
//! - spawn one task per bundle, race the aggregate against the deadline
//! - zip the ordered names with the task outputs
//!
//! Bundle tasks are detached, not aborted, when the deadline wins or a
//! sibling fails. They run to completion in the background and their
//! results are dropped.

use std::sync::Arc;

use futures_util::future::try_join_all;
use tokio::time::{timeout, Instant};

use sdkload_core::error::{Result, SdkLoadError};
use sdkload_core::validate;

use super::bundle::{resolve_bundle, ResolvedBundle};
use super::config_source::resolve_config;
use super::options::LoadParams;
use crate::host::{ensure_fetch, Host};

/// Bundle name -> resolved bundle, in manifest order.
#[derive(Debug, Clone, Default)]
pub struct ResultMap {
    bundles: Vec<(String, ResolvedBundle)>,
}

impl ResultMap {
    pub fn get(&self, name: &str) -> Option<&ResolvedBundle> {
        self.bundles.iter().find(|(n, _)| n == name).map(|(_, b)| b)
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

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedBundle)> {
        self.bundles.iter().map(|(n, b)| (n.as_str(), b))
    }
}

impl IntoIterator for ResultMap {
    type Item = (String, ResolvedBundle);
    type IntoIter = std::vec::IntoIter<(String, ResolvedBundle)>;

    fn into_iter(self) -> Self::IntoIter {
        self.bundles.into_iter()
    }
}

/// Entry point: owns the host collaborators and serves `load` calls.
#[derive(Clone)]
pub struct SdkLoader {
    host: Host,
}

impl SdkLoader {
    pub fn new(host: Host) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Resolve every bundle of the manifest, or fail with the first error.
    pub async fn load(&self, params: LoadParams) -> Result<ResultMap> {
        let LoadParams { sdk_configs, options } = params;

        ensure_fetch(self.host.fetch())?;
        let modules = self.host.modules();

        let configs = resolve_config(modules.as_ref(), sdk_configs).await?;
        let bundles = validate(&configs)?;

        let root = options
            .document_root
            .clone()
            .unwrap_or_else(|| self.host.document());
        let names: Vec<String> = bundles.iter().map(|b| b.name.clone()).collect();
        let started = Instant::now();

        let tasks: Vec<_> = bundles
            .into_iter()
            .map(|bundle| {
                let modules = Arc::clone(&modules);
                let root = Arc::clone(&root);
                let options = options.clone();
                tokio::spawn(async move {
                    let res = resolve_bundle(modules.as_ref(), &bundle, &options, root.as_ref()).await;
                    if let Err(e) = &res {
                        tracing::warn!(bundle = %bundle.name, error = %e, "bundle failed");
                    }
                    res
                })
            })
            .collect();

        let all = try_join_all(tasks.into_iter().map(|task| async move {
            task.await
                .map_err(|e| SdkLoadError::Internal(format!("bundle task failed: {e}")))?
        }));

        let resolved = match timeout(options.timeout_duration(), all).await {
            Ok(res) => res?,
            Err(_) => {
                tracing::warn!(timeout_ms = options.timeout, bundles = names.len(), "sdk load timed out");
                return Err(SdkLoadError::Timeout(options.timeout));
            }
        };

        let results = ResultMap {
            bundles: names.into_iter().zip(resolved).collect(),
        };
        tracing::info!(
            bundles = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "sdk load complete"
        );
        Ok(results)
    }
}

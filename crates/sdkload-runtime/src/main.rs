//! sdkload runner
//!
//! Loads one manifest against the filesystem and an in-memory document:
//! - config: `sdkload.yaml` (or the first argument)
//! - modules: files under `base_dir`
//! - logging: `RUST_LOG` env filter

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use sdkload_core::error::Result;
use sdkload_runtime::host::{FsModuleLoader, Host};
use sdkload_runtime::load::AttachedCss;
use sdkload_runtime::{config, LoadParams, SdkLoader};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "sdkload.yaml".into());
    match run(&path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "sdk load failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(path: &str) -> Result<()> {
    let cfg = config::load_from_file(path)?;

    let modules = Arc::new(FsModuleLoader::new(&cfg.base_dir));
    let document = Arc::new(cfg.document.build());
    let loader = SdkLoader::new(Host::new(modules, document.clone()));

    tracing::info!(%path, base_dir = %cfg.base_dir, "sdkload starting");
    let params = LoadParams::new(cfg.sdk_configs).with_options(cfg.options);
    let results = loader.load(params).await?;

    for (name, bundle) in results.iter() {
        let links = bundle
            .css
            .iter()
            .flatten()
            .filter(|c| matches!(c, AttachedCss::Element(_)))
            .count();
        tracing::info!(
            bundle = %name,
            entry = %bundle.entry.specifier(),
            chunks = bundle.chunks.as_ref().map_or(0, Vec::len),
            css = bundle.css.as_ref().map_or(0, Vec::len),
            links,
            version = bundle.version.as_deref().unwrap_or("-"),
            "bundle loaded"
        );
    }
    tracing::info!(
        head_links = document.head_links().len(),
        root_links = document.root_links().len(),
        "document state"
    );
    Ok(())
}

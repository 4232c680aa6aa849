//! Runner config loader (strict parsing).

pub mod schema;

use std::fs;

use sdkload_core::error::{ConfigError, Result, SdkLoadError};

pub use schema::{DocumentSection, RunnerConfig};

pub fn load_from_file(path: &str) -> Result<RunnerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SdkLoadError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<RunnerConfig> {
    let cfg: RunnerConfig = serde_yaml::from_str(s)
        .map_err(|e| ConfigError::Invalid(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

use sdkload_core::error::{ConfigError, Result};
use sdkload_core::ConfigMap;

use super::options::SdkConfigs;
use crate::host::{Export, ModuleLoader};

/// Obtain the config map, fetching it through the substrate when given a
/// specifier. In-memory maps are passed through untouched.
pub async fn resolve_config(modules: &dyn ModuleLoader, source: SdkConfigs) -> Result<ConfigMap> {
    match source {
        SdkConfigs::Map(map) => Ok(map),
        SdkConfigs::Specifier(specifier) => {
            tracing::debug!(%specifier, "fetching remote config");
            let module = modules.resolve(&specifier).await?;
            match module.default_export() {
                Some(Export::Json(v)) => Ok(ConfigMap::from_value(v.clone())?),
                Some(Export::StyleSheet(_)) => Err(ConfigError::Invalid(format!(
                    "{specifier} exports a stylesheet, expected a config map"
                ))
                .into()),
                // no default export reads as an absent map
                None => Ok(ConfigMap::new()),
            }
        }
    }
}

//! Load pipeline: config source, stylesheet attacher, bundle resolver, and
//! the orchestrator driving them.

pub mod bundle;
pub mod config_source;
pub mod options;
pub mod orchestrator;
pub mod stylesheet;

pub use bundle::{resolve_bundle, ResolvedBundle};
pub use config_source::resolve_config;
pub use options::{LoadOptions, LoadParams, SdkConfigs, DEFAULT_TIMEOUT_MS};
pub use orchestrator::{ResultMap, SdkLoader};
pub use stylesheet::{attach, AttachedCss};

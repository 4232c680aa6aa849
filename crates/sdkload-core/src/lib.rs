//! sdkload core: runtime-agnostic manifest types, validation, and errors.
//!
//! This crate defines the manifest contract and error surface shared by the
//! runtime and any tooling that produces manifests. It carries no async
//! runtime dependency so manifests can be checked anywhere.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `SdkLoadError`/`ConfigError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod css;
pub mod error;
pub mod manifest;
pub mod validate;

pub use css::CssEffect;
pub use error::{ConfigError, ErrorKind, Result, SdkLoadError};
pub use manifest::{BundleManifest, ConfigMap};
pub use validate::{decode_manifest, validate, NamedBundle};

//! sdkload runtime library entry.
//!
//! This crate wires the host collaborators (module substrate, fetch
//! capability, document root) into the load pipeline. It is consumed by the
//! `sdkload` binary and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod dom;
pub mod host;
pub mod load;

pub use load::{LoadOptions, LoadParams, ResolvedBundle, ResultMap, SdkConfigs, SdkLoader};

//! Top-level facade crate for sdkload.
//!
//! Re-exports the manifest core and the runtime so users can depend on a single crate.

pub mod core {
    pub use sdkload_core::*;
}

pub mod runtime {
    pub use sdkload_runtime::*;
}

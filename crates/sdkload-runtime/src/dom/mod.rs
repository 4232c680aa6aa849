//! Document-like roots that stylesheets are attached to.

mod document;
mod memory;

pub use document::{DocumentRoot, LinkElement, LinkState, Mount};
pub use memory::MemoryDocument;

use sdkload_core::error::Result;

/// Host fetch primitive. Remote module resolution assumes one exists.
pub trait FetchCapability: Send + Sync {
    fn is_available(&self) -> bool;
    /// Install a fallback. Only called when `is_available` is false.
    fn install(&self) -> Result<()>;
}

/// Host that already ships a fetch primitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFetch;

impl FetchCapability for NativeFetch {
    fn is_available(&self) -> bool {
        true
    }

    fn install(&self) -> Result<()> {
        Ok(())
    }
}

/// Ensure a fetch primitive exists. Returns whether a shim was installed.
pub fn ensure_fetch(cap: &dyn FetchCapability) -> Result<bool> {
    if cap.is_available() {
        return Ok(false);
    }
    cap.install()?;
    tracing::debug!("fetch shim installed");
    Ok(true)
}

//! Shared error type across sdkload crates.

use thiserror::Error;

/// Stable error kind codes (public API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or absent manifest.
    Config,
    /// A specifier could not be resolved by the module substrate.
    Load,
    /// A link-attached stylesheet reported an error signal.
    Stylesheet,
    /// The global deadline elapsed.
    Timeout,
    /// Internal failure (task panicked, broken invariant).
    Internal,
}

impl ErrorKind {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Config => "CONFIG",
            ErrorKind::Load => "LOAD",
            ErrorKind::Stylesheet => "STYLESHEET",
            ErrorKind::Timeout => "TIMEOUT",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Manifest problems. Always raised before any module resolution starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no bundles")]
    NoBundles,
    #[error("missing entry (bundle={bundle})")]
    MissingEntry { bundle: String },
    #[error("chunks not array (bundle={bundle})")]
    ChunksNotArray { bundle: String },
    #[error("css not array (bundle={bundle})")]
    CssNotArray { bundle: String },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SdkLoadError>;

/// Unified error type used by core and runtime.
#[derive(Debug, Error)]
pub enum SdkLoadError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("load error: {specifier}: {reason}")]
    Load { specifier: String, reason: String },
    #[error("stylesheet error: {href}: {reason}")]
    Stylesheet { href: String, reason: String },
    #[error("sdk load timeout {0}ms")]
    Timeout(u64),
    #[error("internal: {0}")]
    Internal(String),
}

impl SdkLoadError {
    /// Shorthand for a substrate resolution failure.
    pub fn load(specifier: impl Into<String>, reason: impl Into<String>) -> Self {
        SdkLoadError::Load {
            specifier: specifier.into(),
            reason: reason.into(),
        }
    }

    /// Map to a stable kind code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkLoadError::Config(_) => ErrorKind::Config,
            SdkLoadError::Load { .. } => ErrorKind::Load,
            SdkLoadError::Stylesheet { .. } => ErrorKind::Stylesheet,
            SdkLoadError::Timeout(_) => ErrorKind::Timeout,
            SdkLoadError::Internal(_) => ErrorKind::Internal,
        }
    }
}

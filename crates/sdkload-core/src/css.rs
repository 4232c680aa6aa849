//! Stylesheet attachment mode.
//!
//! Three option shapes exist in the wild: a plain boolean, a legacy/modern
//! flag, and the current link/auto flag. All of them collapse into
//! `CssEffect` here; nothing past deserialization sees the older spellings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CssEffect {
    /// Resolve stylesheets as regular modules.
    #[default]
    None,
    /// Attach `<link rel="stylesheet">` elements to the document root.
    Link,
    /// Adopt constructed stylesheets when the root supports it, else `Link`.
    Auto,
}

impl CssEffect {
    pub fn as_str(self) -> &'static str {
        match self {
            CssEffect::None => "none",
            CssEffect::Link => "link",
            CssEffect::Auto => "auto",
        }
    }

    /// Boolean shape: `true` enables element attachment.
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            CssEffect::Link
        } else {
            CssEffect::None
        }
    }
}

impl fmt::Display for CssEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CssEffect {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "" | "none" | "false" => Ok(CssEffect::None),
            "link" | "legacy" | "true" => Ok(CssEffect::Link),
            "auto" | "modern" => Ok(CssEffect::Auto),
            other => Err(ConfigError::Invalid(format!("unknown cssEffect: {other}"))),
        }
    }
}

impl<'de> Deserialize<'de> for CssEffect {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Mode(String),
        }

        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(CssEffect::None),
            Some(Raw::Flag(b)) => Ok(CssEffect::from_flag(b)),
            Some(Raw::Mode(s)) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

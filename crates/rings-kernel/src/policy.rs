//! Configurable layering policy.
//!
//! Whether the required stdlib may reach platform interaction (the `os` and
//! `importlib` case) is left open by the classification model, so it is a
//! policy knob rather than a fixed rule. The default accepts the edge; the
//! stricter readings are opt-in.

use crate::error::RingsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How `RequiredStdlib → PlatformInteraction` edges are judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformPolicy {
    /// Allowed only from members flagged as platform-mediated.
    Sanctioned,
    /// Never allowed.
    Forbidden,
    /// Always allowed.
    #[default]
    Permitted,
}

impl PlatformPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sanctioned => "sanctioned",
            Self::Forbidden => "forbidden",
            Self::Permitted => "permitted",
        }
    }

    /// Whether a required-stdlib member may call into platform interaction.
    pub fn allows(self, platform_mediated: bool) -> bool {
        match self {
            Self::Sanctioned => platform_mediated,
            Self::Forbidden => false,
            Self::Permitted => true,
        }
    }
}

impl fmt::Display for PlatformPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PlatformPolicy {
    type Err = RingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sanctioned" => Ok(Self::Sanctioned),
            "forbidden" => Ok(Self::Forbidden),
            "permitted" => Ok(Self::Permitted),
            _ => Err(RingsError::InvalidPolicy {
                value: s.to_string(),
            }),
        }
    }
}

/// Registry-wide policy settings, fixed when the registry is sealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct RegistryPolicy {
    pub required_stdlib_platform: PlatformPolicy,
}

impl RegistryPolicy {
    pub fn with_platform(platform: PlatformPolicy) -> Self {
        Self {
            required_stdlib_platform: platform,
        }
    }
}

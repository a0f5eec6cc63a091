//! Layering violations as values.
//!
//! Batch validation collects these instead of stopping at the first one;
//! single-edge checks wrap them in [`RingsError::LayerViolation`].
//!
//! [`RingsError::LayerViolation`]: crate::error::RingsError::LayerViolation

use crate::layer::Layer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which layering rule an edge broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationRule {
    /// A lower layer referenced a higher one.
    UpwardReference,
    /// Platform interaction called into something other than Core.
    PlatformInteractionTarget,
    /// The required stdlib reached platform interaction without the policy
    /// allowing it.
    UnsanctionedPlatformAccess,
}

impl ViolationRule {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UpwardReference => "upward_reference",
            Self::PlatformInteractionTarget => "platform_interaction_target",
            Self::UnsanctionedPlatformAccess => "unsanctioned_platform_access",
        }
    }
}

impl fmt::Display for ViolationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected dependency edge `from → to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerViolation {
    pub from: String,
    pub from_layer: Layer,
    pub to: String,
    pub to_layer: Layer,
    pub rule: ViolationRule,
}

impl fmt::Display for LayerViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) -> {} ({}): {}",
            self.from, self.from_layer, self.to, self.to_layer, self.rule
        )
    }
}

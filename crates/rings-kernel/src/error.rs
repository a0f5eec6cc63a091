//! Error types for registry operations.

use crate::layer::Layer;
use crate::member::Classification;
use crate::violation::LayerViolation;

/// Errors reported by registry registration and queries.
///
/// None of these are transient: every variant describes a property of the
/// input, so callers decide whether to abort or record it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingsError {
    /// The name is not in the registry.
    #[error("unknown member: {name}")]
    UnknownMember { name: String },

    /// The name is already registered with a different classification.
    #[error("duplicate member {name}: registered as {existing}, requested {requested} ({conflict} differs)")]
    DuplicateMember {
        name: String,
        existing: Classification,
        requested: Classification,
        conflict: &'static str,
    },

    /// A dependency edge breaks the layering rules.
    #[error("layer violation: {0}")]
    LayerViolation(LayerViolation),

    /// A ring or layer token outside the fixed enumerations.
    #[error("invalid {kind}: {value:?}")]
    InvalidRingOrLayer { kind: &'static str, value: String },

    /// A platform policy token outside sanctioned, forbidden and permitted.
    #[error("invalid platform policy: {value:?}")]
    InvalidPolicy { value: String },

    /// The member name is empty or not an identifier.
    #[error("invalid member name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// Component requirements declared outside the optional stdlib, or the
    /// platform-mediated flag declared outside the required stdlib.
    #[error("invalid declaration on {name} ({layer}): {reason}")]
    InvalidDeclaration {
        name: String,
        layer: Layer,
        reason: String,
    },
}

impl RingsError {
    /// Stable snake_case tag for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownMember { .. } => "unknown_member",
            Self::DuplicateMember { .. } => "duplicate_member",
            Self::LayerViolation(_) => "layer_violation",
            Self::InvalidRingOrLayer { .. } => "invalid_ring_or_layer",
            Self::InvalidPolicy { .. } => "invalid_policy",
            Self::InvalidName { .. } => "invalid_name",
            Self::InvalidDeclaration { .. } => "invalid_declaration",
        }
    }

    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownMember {
            name: name.to_string(),
        }
    }
}

impl From<LayerViolation> for RingsError {
    fn from(violation: LayerViolation) -> Self {
        Self::LayerViolation(violation)
    }
}

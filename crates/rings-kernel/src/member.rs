//! API members and their classification.

use crate::error::RingsError;
use crate::layer::Layer;
use crate::ring::Ring;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

/// The (ring, layer) pair assigned to one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub ring: Ring,
    pub layer: Layer,
}

impl Classification {
    pub fn new(ring: Ring, layer: Layer) -> Self {
        Self { ring, layer }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ring, self.layer)
    }
}

/// A named, classified API member.
///
/// `requires` lists the other optional-stdlib components this member
/// depends on and is only accepted on optional-stdlib members.
/// `platform_mediated` marks required-stdlib members that reach the platform
/// through the sanctioned exception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMember {
    pub name: String,
    pub ring: Ring,
    pub layer: Layer,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub requires: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub platform_mediated: bool,
}

impl ApiMember {
    pub fn new(name: impl Into<String>, ring: Ring, layer: Layer) -> Self {
        Self {
            name: name.into(),
            ring,
            layer,
            requires: BTreeSet::new(),
            platform_mediated: false,
        }
    }

    pub fn requiring<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires.extend(components.into_iter().map(Into::into));
        self
    }

    pub fn platform_mediated(mut self) -> Self {
        self.platform_mediated = true;
        self
    }

    pub fn classification(&self) -> Classification {
        Classification::new(self.ring, self.layer)
    }

    /// Check the name and the layer-specific declarations.
    pub fn validate(&self) -> Result<(), RingsError> {
        validate_name(&self.name)?;
        if !self.requires.is_empty() && !self.layer.allows_components() {
            return Err(RingsError::InvalidDeclaration {
                name: self.name.clone(),
                layer: self.layer,
                reason: "component requirements are only allowed in the optional stdlib"
                    .to_string(),
            });
        }
        for required in &self.requires {
            validate_name(required)?;
            if required == &self.name {
                return Err(RingsError::InvalidDeclaration {
                    name: self.name.clone(),
                    layer: self.layer,
                    reason: "a component cannot require itself".to_string(),
                });
            }
        }
        if self.platform_mediated && self.layer != Layer::RequiredStdlib {
            return Err(RingsError::InvalidDeclaration {
                name: self.name.clone(),
                layer: self.layer,
                reason: "platform mediation is only meaningful in the required stdlib".to_string(),
            });
        }
        Ok(())
    }

    /// Which field differs from `other`, if any.
    pub(crate) fn conflict_with(&self, other: &ApiMember) -> Option<&'static str> {
        if self.ring != other.ring {
            Some("ring")
        } else if self.layer != other.layer {
            Some("layer")
        } else if self.requires != other.requires {
            Some("requires")
        } else if self.platform_mediated != other.platform_mediated {
            Some("platform_mediated")
        } else {
            None
        }
    }
}

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*$")
            .expect("identifier regex must compile")
    })
}

/// Accepts C identifiers and dotted module paths (`importlib.machinery`).
pub fn validate_name(name: &str) -> Result<(), RingsError> {
    if name.trim().is_empty() {
        return Err(RingsError::InvalidName {
            name: name.to_string(),
            reason: "name must be non-empty",
        });
    }
    if !identifier_re().is_match(name) {
        return Err(RingsError::InvalidName {
            name: name.to_string(),
            reason: "name must be an identifier or dotted module path",
        });
    }
    Ok(())
}

//! Classification manifests: the fixed dataset a registry is loaded from.
//!
//! ```toml
//! schema = 1
//! kind = "rings.classification_manifest.v1"
//!
//! [policy]
//! required_stdlib_platform = "sanctioned"
//!
//! [[members]]
//! name = "idlelib"
//! ring = "python"
//! layer = "optional_stdlib"
//! requires = ["tkinter"]
//!
//! [[edges]]
//! from = "idlelib"
//! to = "tkinter"
//! ```

use crate::error::ManifestError;
use rings_kernel::{ApiMember, Layer, Registry, RegistryPolicy, Ring, RingsError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const MANIFEST_KIND: &str = "rings.classification_manifest.v1";
pub const MANIFEST_SCHEMA: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub schema: u32,
    pub kind: String,
    #[serde(default)]
    pub policy: RegistryPolicy,
    #[serde(default)]
    pub members: Vec<MemberRow>,
    #[serde(default)]
    pub edges: Vec<EdgeRow>,
}

/// One member declaration. Field names match [`ApiMember`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRow {
    pub name: String,
    pub ring: Ring,
    pub layer: Layer,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub platform_mediated: bool,
}

impl MemberRow {
    pub fn to_member(&self) -> ApiMember {
        let member = ApiMember::new(self.name.trim(), self.ring, self.layer)
            .requiring(self.requires.iter().map(|name| name.trim().to_string()));
        if self.platform_mediated {
            member.platform_mediated()
        } else {
            member
        }
    }
}

/// A declared dependency `from → to`, checked by batch validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRow {
    pub from: String,
    pub to: String,
}

impl Manifest {
    pub fn from_toml_str(text: &str, path: &str) -> Result<Self, ManifestError> {
        let manifest: Self = toml::from_str(text).map_err(|source| ManifestError::ParseToml {
            path: path.to_string(),
            source,
        })?;
        manifest.check_header(path)?;
        Ok(manifest)
    }

    pub fn from_json_str(text: &str, path: &str) -> Result<Self, ManifestError> {
        let manifest: Self =
            serde_json::from_str(text).map_err(|source| ManifestError::ParseJson {
                path: path.to_string(),
                source,
            })?;
        manifest.check_header(path)?;
        Ok(manifest)
    }

    /// Load a manifest, choosing TOML for `.toml` files and JSON otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let path_display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::ReadFile {
            path: path_display.clone(),
            source,
        })?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let manifest = if is_toml {
            Self::from_toml_str(&text, &path_display)?
        } else {
            Self::from_json_str(&text, &path_display)?
        };
        debug!(
            path = %path_display,
            members = manifest.members.len(),
            edges = manifest.edges.len(),
            "loaded classification manifest"
        );
        Ok(manifest)
    }

    fn check_header(&self, path: &str) -> Result<(), ManifestError> {
        if self.schema != MANIFEST_SCHEMA {
            return Err(ManifestError::Header {
                path: path.to_string(),
                message: format!("schema must equal {MANIFEST_SCHEMA}, got {}", self.schema),
            });
        }
        if self.kind.trim() != MANIFEST_KIND {
            return Err(ManifestError::Header {
                path: path.to_string(),
                message: format!("kind must equal {MANIFEST_KIND:?}, got {:?}", self.kind),
            });
        }
        Ok(())
    }

    /// Register every member in declaration order and seal.
    pub fn load_registry(&self) -> Result<Registry, RingsError> {
        self.load_registry_with_policy(self.policy)
    }

    /// As [`Manifest::load_registry`], overriding the manifest's policy.
    pub fn load_registry_with_policy(
        &self,
        policy: RegistryPolicy,
    ) -> Result<Registry, RingsError> {
        let mut builder = Registry::builder().with_policy(policy);
        for row in &self.members {
            builder.register_member(row.to_member())?;
        }
        Ok(builder.seal())
    }
}

//! The seed dataset compiled into the crate.

use crate::error::ManifestError;
use crate::manifest::Manifest;

pub const BUILTIN_MANIFEST_PATH: &str = "<builtin:cpython.toml>";

const BUILTIN_MANIFEST: &str = include_str!("../data/cpython.toml");

/// Parse the built-in CPython seed classification.
pub fn builtin_manifest() -> Result<Manifest, ManifestError> {
    Manifest::from_toml_str(BUILTIN_MANIFEST, BUILTIN_MANIFEST_PATH)
}

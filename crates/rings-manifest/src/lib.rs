//! Classification manifests for the rings registry.
//!
//! A manifest is the fixed dataset a [`Registry`](rings_kernel::Registry) is
//! populated from: member rows, declared dependency edges, and the layering
//! policy. [`validate_manifest`] checks a whole manifest into a
//! deterministic [`ValidationReport`] instead of stopping at the first error.

pub mod builtin;
pub mod error;
pub mod manifest;
pub mod report;

pub use builtin::{BUILTIN_MANIFEST_PATH, builtin_manifest};
pub use error::ManifestError;
pub use manifest::{EdgeRow, MANIFEST_KIND, MANIFEST_SCHEMA, Manifest, MemberRow};
pub use report::{ValidationIssue, ValidationReport, failure_class, validate_manifest};

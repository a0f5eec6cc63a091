//! # Rings Kernel
//!
//! A sealed registry that classifies every API member by **ring** (how
//! public and stable it is) and by **layer** (how fundamental it is), and
//! answers access, layering and availability questions over that
//! classification.
//!
//! This crate is **dataset-agnostic**: it does not prescribe which members
//! exist. Datasets are loaded once through a [`RegistryBuilder`] and then
//! sealed into a read-only [`Registry`].
//!
//! ## Architecture
//!
//! ```text
//! Ring / Layer            ← Fixed, totally ordered enumerations
//!     │
//! ApiMember               ← name + exactly one ring + exactly one layer
//!     │
//! RegistryBuilder         ← Loading phase (register, idempotent)
//!     │ seal()
//! Registry                ← Sealed phase (lookup, is_accessible,
//!                           validate_layer_dependency, closures)
//! ```

pub mod access;
pub mod availability;
pub mod dependency;
pub mod error;
pub mod layer;
pub mod member;
pub mod policy;
pub mod registry;
pub mod ring;
pub mod violation;

pub use access::AccessRequest;
pub use availability::{AvailabilityClosure, availability_closure};
pub use dependency::check_layer_edge;
pub use error::RingsError;
pub use layer::Layer;
pub use member::{ApiMember, Classification, validate_name};
pub use policy::{PlatformPolicy, RegistryPolicy};
pub use registry::{Registry, RegistryBuilder, SharedBuilder};
pub use ring::Ring;
pub use violation::{LayerViolation, ViolationRule};

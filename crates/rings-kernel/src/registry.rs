//! The classification registry.
//!
//! A registry has exactly two phases. [`RegistryBuilder`] is the loading
//! phase and is the only type with a write API. [`RegistryBuilder::seal`]
//! consumes it and returns a [`Registry`], which is read-only for the rest
//! of its life and can be shared between threads without locking.
//!
//! When several initialisation writers exist, [`SharedBuilder`] serialises
//! their registrations behind one mutex; sealing consumes it as well.

use crate::access::AccessRequest;
use crate::availability::{AvailabilityClosure, availability_closure};
use crate::dependency::check_layer_edge;
use crate::error::RingsError;
use crate::layer::Layer;
use crate::member::{ApiMember, Classification};
use crate::policy::RegistryPolicy;
use crate::ring::Ring;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;
use tracing::{debug, trace, warn};

/// Loading phase: accepts registrations until sealed.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    members: BTreeMap<String, ApiMember>,
    policy: RegistryPolicy,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: RegistryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Record `name` as `(ring, layer)`.
    ///
    /// Re-registering an identical classification is a no-op; a different
    /// one fails with [`RingsError::DuplicateMember`].
    pub fn register(
        &mut self,
        name: impl Into<String>,
        ring: Ring,
        layer: Layer,
    ) -> Result<(), RingsError> {
        self.register_member(ApiMember::new(name, ring, layer))
    }

    /// Record a member together with its component requirements and
    /// platform-mediation flag.
    pub fn register_member(&mut self, member: ApiMember) -> Result<(), RingsError> {
        member.validate()?;

        if let Some(existing) = self.members.get(&member.name) {
            return match existing.conflict_with(&member) {
                None => {
                    trace!(member = %member.name, "identical re-registration ignored");
                    Ok(())
                }
                Some(conflict) => {
                    warn!(
                        member = %member.name,
                        existing = %existing.classification(),
                        requested = %member.classification(),
                        conflict,
                        "conflicting registration rejected"
                    );
                    Err(RingsError::DuplicateMember {
                        name: member.name.clone(),
                        existing: existing.classification(),
                        requested: member.classification(),
                        conflict,
                    })
                }
            };
        }

        debug!(
            member = %member.name,
            ring = %member.ring,
            layer = %member.layer,
            "registered api member"
        );
        self.members.insert(member.name.clone(), member);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// End the loading phase.
    pub fn seal(self) -> Registry {
        let digest = compute_digest(&self.members);
        debug!(
            members = self.members.len(),
            digest = %digest,
            policy = %self.policy.required_stdlib_platform,
            "sealed classification registry"
        );
        Registry {
            members: self.members,
            policy: self.policy,
            digest,
        }
    }
}

/// Loading phase shared between concurrent writers.
///
/// Every registration runs inside a single exclusive section.
#[derive(Debug, Default)]
pub struct SharedBuilder {
    inner: Mutex<RegistryBuilder>,
}

impl SharedBuilder {
    pub fn new(builder: RegistryBuilder) -> Self {
        Self {
            inner: Mutex::new(builder),
        }
    }

    pub fn register(
        &self,
        name: impl Into<String>,
        ring: Ring,
        layer: Layer,
    ) -> Result<(), RingsError> {
        self.register_member(ApiMember::new(name, ring, layer))
    }

    pub fn register_member(&self, member: ApiMember) -> Result<(), RingsError> {
        // A panicking writer cannot leave a half-inserted member behind, so a
        // poisoned lock still guards a consistent map.
        let mut builder = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        builder.register_member(member)
    }

    pub fn seal(self) -> Registry {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .seal()
    }
}

/// Sealed phase: an immutable name → classification mapping.
#[derive(Debug, Clone)]
pub struct Registry {
    members: BTreeMap<String, ApiMember>,
    policy: RegistryPolicy,
    digest: String,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The `(ring, layer)` pair recorded for `name`.
    pub fn lookup(&self, name: &str) -> Result<Classification, RingsError> {
        self.member(name).map(ApiMember::classification)
    }

    pub fn member(&self, name: &str) -> Result<&ApiMember, RingsError> {
        self.members
            .get(name)
            .ok_or_else(|| RingsError::unknown(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Whether `name` is reachable by a user who selected `ring` and `layer`.
    ///
    /// True iff the member's ring is `ring` or lies outside it, and its layer
    /// is `layer` or lies beneath it.
    pub fn is_accessible(&self, name: &str, ring: Ring, layer: Layer) -> Result<bool, RingsError> {
        let classification = self.lookup(name)?;
        Ok(AccessRequest::at(ring, layer).grants(classification))
    }

    /// Members visible under `request`, in name order.
    pub fn visible_members(&self, request: &AccessRequest) -> Vec<&ApiMember> {
        self.members
            .values()
            .filter(|member| request.grants(member.classification()))
            .collect()
    }

    /// Check that `from` may depend on `to` under the layering rules and
    /// this registry's policy.
    pub fn validate_layer_dependency(&self, from: &str, to: &str) -> Result<(), RingsError> {
        let from_member = self.member(from)?;
        let to_member = self.member(to)?;
        check_layer_edge(from_member, to_member, &self.policy).map_err(|violation| {
            warn!(
                from = %violation.from,
                to = %violation.to,
                rule = %violation.rule,
                "layer dependency rejected"
            );
            RingsError::from(violation)
        })
    }

    /// Layer-level closure, with the registry's platform-mediated
    /// required-stdlib members flagged when the required stdlib is implied.
    pub fn layer_closure(&self, layer: Layer) -> AvailabilityClosure {
        let layers = availability_closure(layer);
        let platform_mediated = self.platform_mediated_within(&layers);
        AvailabilityClosure {
            layers,
            components: BTreeSet::new(),
            platform_mediated,
        }
    }

    /// Member-level closure.
    ///
    /// For an optional-stdlib member the closure also carries the member
    /// itself and every component it transitively requires. Requirement
    /// cycles terminate; a requirement on an unregistered name fails with
    /// [`RingsError::UnknownMember`] and one on a member outside the optional
    /// stdlib with [`RingsError::InvalidDeclaration`].
    pub fn member_closure(&self, name: &str) -> Result<AvailabilityClosure, RingsError> {
        let start = self.member(name)?;
        let layers = availability_closure(start.layer);

        let mut components = BTreeSet::new();
        if start.layer.allows_components() {
            let mut pending = vec![start];
            while let Some(member) = pending.pop() {
                if !components.insert(member.name.clone()) {
                    continue;
                }
                for required in &member.requires {
                    let next = self.member(required)?;
                    if !next.layer.allows_components() {
                        return Err(RingsError::InvalidDeclaration {
                            name: member.name.clone(),
                            layer: member.layer,
                            reason: format!(
                                "requires {} which is classified under {}",
                                next.name, next.layer
                            ),
                        });
                    }
                    if !components.contains(&next.name) {
                        pending.push(next);
                    }
                }
            }
        }

        let platform_mediated = self.platform_mediated_within(&layers);
        Ok(AvailabilityClosure {
            layers,
            components,
            platform_mediated,
        })
    }

    fn platform_mediated_within(&self, layers: &BTreeSet<Layer>) -> BTreeSet<String> {
        if !layers.contains(&Layer::RequiredStdlib) {
            return BTreeSet::new();
        }
        self.members
            .values()
            .filter(|member| member.platform_mediated)
            .map(|member| member.name.clone())
            .collect()
    }

    pub fn members(&self) -> impl Iterator<Item = &ApiMember> {
        self.members.values()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn policy(&self) -> &RegistryPolicy {
        &self.policy
    }

    /// Order-independent digest over every recorded classification,
    /// rendered as `sha256:<hex>`.
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

fn compute_digest(members: &BTreeMap<String, ApiMember>) -> String {
    let hasher = members.values().fold(Sha256::new(), |hasher, member| {
        let hasher = digest_field(hasher, "name", &member.name);
        let hasher = digest_field(hasher, "ring", member.ring.as_str());
        let hasher = digest_field(hasher, "layer", member.layer.as_str());
        let hasher = member
            .requires
            .iter()
            .fold(hasher, |hasher, required| digest_field(hasher, "requires", required));
        let mediated = if member.platform_mediated { "true" } else { "false" };
        digest_field(hasher, "platform_mediated", mediated)
    });
    format!("sha256:{:x}", hasher.finalize())
}

// One `key:value` line per field keeps adjacent values from running together.
fn digest_field(mut hasher: Sha256, key: &str, value: &str) -> Sha256 {
    hasher.update(key.as_bytes());
    hasher.update(b":");
    hasher.update(value.as_bytes());
    hasher.update(b"\n");
    hasher
}

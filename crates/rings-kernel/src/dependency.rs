//! Layering rules for dependency edges between members.
//!
//! Rules, in the order they are applied to an edge `from → to`:
//!
//! 1. Two optional-stdlib components may depend on each other freely.
//! 2. Platform interaction may only call into Core.
//! 3. A lower layer never references a higher one.
//! 4. Required stdlib reaching platform interaction is decided by
//!    [`PlatformPolicy`](crate::policy::PlatformPolicy).

use crate::layer::Layer;
use crate::member::ApiMember;
use crate::policy::RegistryPolicy;
use crate::violation::{LayerViolation, ViolationRule};

/// Check one dependency edge against the layering rules.
pub fn check_layer_edge(
    from: &ApiMember,
    to: &ApiMember,
    policy: &RegistryPolicy,
) -> Result<(), LayerViolation> {
    let violation = |rule| LayerViolation {
        from: from.name.clone(),
        from_layer: from.layer,
        to: to.name.clone(),
        to_layer: to.layer,
        rule,
    };

    if from.layer == Layer::OptionalStdlib && to.layer == Layer::OptionalStdlib {
        return Ok(());
    }
    if from.layer == Layer::PlatformInteraction && to.layer != Layer::Core {
        return Err(violation(ViolationRule::PlatformInteractionTarget));
    }
    if from.layer.is_below(to.layer) {
        return Err(violation(ViolationRule::UpwardReference));
    }
    if from.layer == Layer::RequiredStdlib
        && to.layer == Layer::PlatformInteraction
        && !policy
            .required_stdlib_platform
            .allows(from.platform_mediated)
    {
        return Err(violation(ViolationRule::UnsanctionedPlatformAccess));
    }
    Ok(())
}

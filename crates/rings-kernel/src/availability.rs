//! Availability closures: which layers a present layer guarantees.
//!
//! ```text
//! PlatformAdaptation   → {PlatformAdaptation}
//! Core                 → {Core, PlatformAdaptation}
//! PlatformInteraction  → {PlatformInteraction, Core, PlatformAdaptation}
//! RequiredStdlib       → {RequiredStdlib, Core, PlatformAdaptation}
//! OptionalStdlib       → {OptionalStdlib, RequiredStdlib, Core, PlatformAdaptation}
//! ```
//!
//! The required stdlib does not imply platform interaction. Its members that
//! reach the platform anyway (`os`, `importlib`) are reported separately in
//! [`AvailabilityClosure::platform_mediated`].

use crate::layer::Layer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The layers guaranteed present when `layer` is present.
///
/// Pure: no registry is consulted. The result always contains
/// `PlatformAdaptation`.
pub fn availability_closure(layer: Layer) -> BTreeSet<Layer> {
    let implied: &[Layer] = match layer {
        Layer::PlatformAdaptation => &[],
        Layer::Core => &[Layer::PlatformAdaptation],
        Layer::PlatformInteraction => &[Layer::Core, Layer::PlatformAdaptation],
        Layer::RequiredStdlib => &[Layer::Core, Layer::PlatformAdaptation],
        Layer::OptionalStdlib => &[
            Layer::RequiredStdlib,
            Layer::Core,
            Layer::PlatformAdaptation,
        ],
    };
    std::iter::once(layer)
        .chain(implied.iter().copied())
        .collect()
}

/// A closure resolved against a registry.
///
/// `components` holds the optional-stdlib members reached (the starting
/// member plus everything it transitively requires). `platform_mediated`
/// lists required-stdlib members that reach platform interaction even though
/// the closure itself does not contain it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityClosure {
    pub layers: BTreeSet<Layer>,
    pub components: BTreeSet<String>,
    pub platform_mediated: BTreeSet<String>,
}

impl AvailabilityClosure {
    pub fn contains_layer(&self, layer: Layer) -> bool {
        self.layers.contains(&layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(layers: &[Layer]) -> BTreeSet<Layer> {
        layers.iter().copied().collect()
    }

    #[test]
    fn closure_table() {
        assert_eq!(
            availability_closure(Layer::PlatformAdaptation),
            set(&[Layer::PlatformAdaptation])
        );
        assert_eq!(
            availability_closure(Layer::Core),
            set(&[Layer::Core, Layer::PlatformAdaptation])
        );
        assert_eq!(
            availability_closure(Layer::PlatformInteraction),
            set(&[
                Layer::PlatformInteraction,
                Layer::Core,
                Layer::PlatformAdaptation
            ])
        );
        assert_eq!(
            availability_closure(Layer::RequiredStdlib),
            set(&[Layer::RequiredStdlib, Layer::Core, Layer::PlatformAdaptation])
        );
        assert_eq!(
            availability_closure(Layer::OptionalStdlib),
            set(&[
                Layer::OptionalStdlib,
                Layer::RequiredStdlib,
                Layer::Core,
                Layer::PlatformAdaptation
            ])
        );
    }

    #[test]
    fn every_closure_contains_its_layer_and_the_bottom() {
        for layer in Layer::ALL {
            let closure = availability_closure(layer);
            assert!(closure.contains(&layer));
            assert!(closure.contains(&Layer::PlatformAdaptation));
        }
    }

    #[test]
    fn required_stdlib_does_not_imply_platform_interaction() {
        assert!(!availability_closure(Layer::RequiredStdlib).contains(&Layer::PlatformInteraction));
        assert!(!availability_closure(Layer::OptionalStdlib).contains(&Layer::PlatformInteraction));
    }

    #[test]
    fn closure_never_reaches_upward() {
        for layer in Layer::ALL {
            for implied in availability_closure(layer) {
                assert!(implied.is_at_or_below(layer));
            }
        }
    }

    #[test]
    fn closure_serializes_in_layer_order() {
        let closure = AvailabilityClosure {
            layers: availability_closure(Layer::RequiredStdlib),
            components: BTreeSet::new(),
            platform_mediated: ["os".to_string()].into_iter().collect(),
        };
        insta::assert_json_snapshot!(closure, @r###"
        {
          "layers": [
            "required_stdlib",
            "core",
            "platform_adaptation"
          ],
          "components": [],
          "platformMediated": [
            "os"
          ]
        }
        "###);
    }
}

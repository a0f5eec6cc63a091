//! Availability layers.
//!
//! A layer says how fundamental an API member is, top to bottom:
//!
//! ```text
//! OptionalStdlib       ← independent components, may be missing
//!     │
//! RequiredStdlib       ← always shipped with the interpreter
//!     │
//! PlatformInteraction  ← optional as a whole; calls into Core only
//!     │
//! Core                 ← the object model and evaluation loop
//!     │
//! PlatformAdaptation   ← always present, opaque
//! ```
//!
//! Lower layers never reference higher ones. Selecting a layer requires and
//! grants that layer plus everything beneath it.

use crate::error::RingsError;

/// An availability layer, ordered top (`OptionalStdlib`) to bottom
/// (`PlatformAdaptation`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Standard-library components that a distribution may leave out.
    ///
    /// The only layer whose members are independent named sub-components
    /// with dependency edges among themselves.
    #[serde(alias = "optional-stdlib", alias = "OptionalStdlib")]
    OptionalStdlib,

    /// Standard-library modules every installation carries.
    #[serde(alias = "required-stdlib", alias = "RequiredStdlib")]
    RequiredStdlib,

    /// Files, processes, signals and other OS services.
    #[serde(alias = "platform-interaction", alias = "PlatformInteraction")]
    PlatformInteraction,

    /// Objects, types and the interpreter loop.
    #[serde(alias = "Core")]
    Core,

    /// Portability shims over the compiler and C library.
    #[serde(alias = "platform-adaptation", alias = "PlatformAdaptation")]
    PlatformAdaptation,
}

impl Layer {
    /// Every layer, topmost first.
    pub const ALL: [Layer; 5] = [
        Layer::OptionalStdlib,
        Layer::RequiredStdlib,
        Layer::PlatformInteraction,
        Layer::Core,
        Layer::PlatformAdaptation,
    ];

    /// Returns true if `self` lies strictly beneath `other`.
    pub fn is_below(self, other: Self) -> bool {
        self > other
    }

    /// Returns true if `self` is `other` or lies beneath it.
    pub fn is_at_or_below(self, other: Self) -> bool {
        self >= other
    }

    /// The layers granted by selecting `selected`: itself and everything below.
    pub fn granted_by(selected: Self) -> Vec<Layer> {
        Self::ALL
            .into_iter()
            .filter(|layer| layer.is_at_or_below(selected))
            .collect()
    }

    /// Whether members of this layer may be split into named components that
    /// depend on each other.
    pub fn allows_components(self) -> bool {
        matches!(self, Self::OptionalStdlib)
    }

    /// Stable token used in manifests and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OptionalStdlib => "optional_stdlib",
            Self::RequiredStdlib => "required_stdlib",
            Self::PlatformInteraction => "platform_interaction",
            Self::Core => "core",
            Self::PlatformAdaptation => "platform_adaptation",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OptionalStdlib => write!(f, "OptionalStdlib"),
            Self::RequiredStdlib => write!(f, "RequiredStdlib"),
            Self::PlatformInteraction => write!(f, "PlatformInteraction"),
            Self::Core => write!(f, "Core"),
            Self::PlatformAdaptation => write!(f, "PlatformAdaptation"),
        }
    }
}

impl std::str::FromStr for Layer {
    type Err = RingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "optional_stdlib" | "optionalstdlib" => Ok(Self::OptionalStdlib),
            "required_stdlib" | "requiredstdlib" => Ok(Self::RequiredStdlib),
            "platform_interaction" | "platforminteraction" => Ok(Self::PlatformInteraction),
            "core" => Ok(Self::Core),
            "platform_adaptation" | "platformadaptation" => Ok(Self::PlatformAdaptation),
            _ => Err(RingsError::InvalidRingOrLayer {
                kind: "layer",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_are_ordered_top_to_bottom() {
        for pair in Layer::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[1].is_below(pair[0]));
        }
        assert!(!Layer::Core.is_below(Layer::Core));
        assert!(Layer::Core.is_at_or_below(Layer::Core));
    }

    #[test]
    fn selecting_core_grants_core_and_platform_adaptation() {
        assert_eq!(
            Layer::granted_by(Layer::Core),
            vec![Layer::Core, Layer::PlatformAdaptation]
        );
        assert_eq!(Layer::granted_by(Layer::OptionalStdlib), Layer::ALL.to_vec());
        assert_eq!(
            Layer::granted_by(Layer::PlatformAdaptation),
            vec![Layer::PlatformAdaptation]
        );
    }

    #[test]
    fn only_optional_stdlib_allows_components() {
        let with_components: Vec<Layer> = Layer::ALL
            .into_iter()
            .filter(|layer| layer.allows_components())
            .collect();
        assert_eq!(with_components, vec![Layer::OptionalStdlib]);
    }

    #[test]
    fn parses_snake_kebab_and_display_spellings() {
        for layer in Layer::ALL {
            assert_eq!(layer.as_str().parse::<Layer>().unwrap(), layer);
            assert_eq!(layer.to_string().parse::<Layer>().unwrap(), layer);
        }
        assert_eq!(
            "platform-interaction".parse::<Layer>().unwrap(),
            Layer::PlatformInteraction
        );
        assert_eq!(
            "middle".parse::<Layer>().unwrap_err().to_string(),
            "invalid layer: \"middle\""
        );
    }

    #[test]
    fn serde_tokens_match_as_str() {
        for layer in Layer::ALL {
            assert_eq!(
                serde_json::to_value(layer).unwrap(),
                serde_json::json!(layer.as_str())
            );
        }
    }
}

//! Stability rings.
//!
//! A ring says how public and how stable an API member is:
//!
//! - **Python**: the outermost ring, usable from any implementation
//! - **CPython**: implementation-specific but supported
//! - **Internal**: the innermost ring, no stability promise
//!
//! Rings are totally ordered outermost → innermost. Selecting a ring grants
//! access to that ring and to every ring outside it.

use crate::error::RingsError;

/// A stability ring, ordered outermost (`Python`) to innermost (`Internal`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Ring {
    /// Portable API, valid for every implementation of the language.
    #[serde(rename = "python", alias = "Python")]
    Python,

    /// API specific to the reference implementation, still supported.
    #[serde(rename = "cpython", alias = "CPython", alias = "c_python")]
    CPython,

    /// Private API. May change between any two releases.
    #[serde(rename = "internal", alias = "Internal")]
    Internal,
}

impl Ring {
    /// Every ring, outermost first.
    pub const ALL: [Ring; 3] = [Ring::Python, Ring::CPython, Ring::Internal];

    /// Returns true if `self` is `other` or lies outside it.
    pub fn is_outer_or_equal(self, other: Self) -> bool {
        self <= other
    }

    /// The rings granted by selecting `selected`: itself and every outer ring.
    pub fn granted_by(selected: Self) -> Vec<Ring> {
        Self::ALL
            .into_iter()
            .filter(|ring| ring.is_outer_or_equal(selected))
            .collect()
    }

    /// Stable token used in manifests and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::CPython => "cpython",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for Ring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "Python"),
            Self::CPython => write!(f, "CPython"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

impl std::str::FromStr for Ring {
    type Err = RingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "python" => Ok(Self::Python),
            "cpython" | "c_python" => Ok(Self::CPython),
            "internal" => Ok(Self::Internal),
            _ => Err(RingsError::InvalidRingOrLayer {
                kind: "ring",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_are_ordered_outermost_first() {
        assert!(Ring::Python < Ring::CPython);
        assert!(Ring::CPython < Ring::Internal);
        assert_eq!(Ring::ALL.len(), 3);
    }

    #[test]
    fn selecting_cpython_grants_python_but_not_internal() {
        assert_eq!(
            Ring::granted_by(Ring::CPython),
            vec![Ring::Python, Ring::CPython]
        );
        assert_eq!(Ring::granted_by(Ring::Python), vec![Ring::Python]);
        assert_eq!(Ring::granted_by(Ring::Internal), Ring::ALL.to_vec());
    }

    #[test]
    fn parses_tokens_and_display_spellings() {
        assert_eq!("python".parse::<Ring>().unwrap(), Ring::Python);
        assert_eq!("CPython".parse::<Ring>().unwrap(), Ring::CPython);
        assert_eq!(" internal ".parse::<Ring>().unwrap(), Ring::Internal);
        for ring in Ring::ALL {
            assert_eq!(ring.as_str().parse::<Ring>().unwrap(), ring);
            assert_eq!(ring.to_string().parse::<Ring>().unwrap(), ring);
        }
    }

    #[test]
    fn rejects_values_outside_the_enumeration() {
        let err = "limited".parse::<Ring>().unwrap_err();
        assert_eq!(err.kind(), "invalid_ring_or_layer");
        assert_eq!(err.to_string(), "invalid ring: \"limited\"");
    }

    #[test]
    fn serde_uses_stable_tokens() {
        assert_eq!(
            serde_json::to_value(Ring::CPython).unwrap(),
            serde_json::json!("cpython")
        );
        let parsed: Ring = serde_json::from_value(serde_json::json!("CPython")).unwrap();
        assert_eq!(parsed, Ring::CPython);
    }
}

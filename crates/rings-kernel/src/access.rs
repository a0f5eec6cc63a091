//! Access requests: what a selected ring and layer make visible.

use crate::layer::Layer;
use crate::member::Classification;
use crate::ring::Ring;
use serde::{Deserialize, Serialize};

/// A query over the two monotonic access rules.
///
/// Ring access widens outward: choosing `ring` grants it and every ring
/// outside it. Layer access widens downward: choosing `layer` grants it and
/// every layer beneath it. An absent axis is unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring: Option<Ring>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<Layer>,
}

impl AccessRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request for exactly one ring and one layer.
    pub fn at(ring: Ring, layer: Layer) -> Self {
        Self {
            ring: Some(ring),
            layer: Some(layer),
        }
    }

    pub fn ring(mut self, ring: Ring) -> Self {
        self.ring = Some(ring);
        self
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn visible_rings(&self) -> Vec<Ring> {
        match self.ring {
            Some(ring) => Ring::granted_by(ring),
            None => Ring::ALL.to_vec(),
        }
    }

    pub fn visible_layers(&self) -> Vec<Layer> {
        match self.layer {
            Some(layer) => Layer::granted_by(layer),
            None => Layer::ALL.to_vec(),
        }
    }

    /// Whether a member with `classification` is visible under this request.
    pub fn grants(&self, classification: Classification) -> bool {
        let ring_ok = self
            .ring
            .is_none_or(|ring| classification.ring.is_outer_or_equal(ring));
        let layer_ok = self
            .layer
            .is_none_or(|layer| classification.layer.is_at_or_below(layer));
        ring_ok && layer_ok
    }
}

//! Search configuration.

use serde::{Deserialize, Serialize};

/// How a crossing that lands exactly on an edge endpoint is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Open bounds: a crossing at an edge endpoint is not on the edge.
    #[default]
    Exclusive,
    /// Closed bounds: endpoints count. A vertex hit registers on both
    /// adjacent edges.
    Inclusive,
}

/// Geometry configuration for the chord search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeomCfg {
    pub boundary: Boundary,
}

impl GeomCfg {
    #[inline]
    pub fn inclusive() -> Self {
        Self {
            boundary: Boundary::Inclusive,
        }
    }
}

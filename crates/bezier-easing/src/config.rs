//! Serde configuration for easings.
//!
//! An easing can be written as a keyword, CSS text, an object or an array:
//!
//! ```json
//! "ease-in-out"
//! "cubic-bezier(0.68, -0.55, 0.265, 1.55)"
//! { "x1": 0.25, "y1": 0.1, "x2": 0.25, "y2": 1.0 }
//! [0.25, 0.1, 0.25, 1.0]
//! ```
//!
//! All forms are validated through the same factory as [`bezier`](crate::bezier),
//! so deserialising an [`Easing`] directly rejects bad control points.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::easing::{ControlPoints, Easing};
use crate::error::EasingError;

/// Unvalidated description of an easing as it appears in configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EasingConfig {
    /// A CSS keyword or `cubic-bezier(...)` text.
    Text(String),
    /// Control points, either as named fields or as `[x1, y1, x2, y2]`.
    Points(ControlPoints),
}

impl EasingConfig {
    /// Validate and build the easing.
    ///
    /// # Errors
    ///
    /// Returns [`EasingError::InvalidTimingFunction`] for unparseable text and
    /// [`EasingError::InvalidControlPoint`] for out-of-range x coordinates.
    pub fn build(&self) -> Result<Easing, EasingError> {
        let result = match self {
            EasingConfig::Text(text) => text.parse(),
            EasingConfig::Points(points) => Easing::from_points(*points),
        };

        if let Err(err) = &result {
            debug!(config = ?self, error = %err, "easing configuration rejected");
        }

        result
    }
}

impl Default for EasingConfig {
    fn default() -> Self {
        EasingConfig::Text("linear".to_string())
    }
}

impl TryFrom<EasingConfig> for Easing {
    type Error = EasingError;

    fn try_from(config: EasingConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

impl From<Easing> for EasingConfig {
    fn from(easing: Easing) -> Self {
        match easing {
            Easing::Linear => EasingConfig::default(),
            Easing::CubicBezier(curve) => EasingConfig::Points(curve.control_points()),
        }
    }
}

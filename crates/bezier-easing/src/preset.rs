//! The CSS named timing functions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::easing::{ControlPoints, CubicBezier, Easing};
use crate::error::EasingError;

/// A CSS keyword timing function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// `linear`: cubic-bezier(0, 0, 1, 1).
    Linear,
    /// `ease`: cubic-bezier(0.25, 0.1, 0.25, 1).
    Ease,
    /// `ease-in`: cubic-bezier(0.42, 0, 1, 1).
    EaseIn,
    /// `ease-out`: cubic-bezier(0, 0, 0.58, 1).
    EaseOut,
    /// `ease-in-out`: cubic-bezier(0.42, 0, 0.58, 1).
    EaseInOut,
}

impl Preset {
    /// Every preset, in the order CSS lists them.
    pub const ALL: [Preset; 5] = [
        Preset::Linear,
        Preset::Ease,
        Preset::EaseIn,
        Preset::EaseOut,
        Preset::EaseInOut,
    ];

    /// CSS keyword for this preset.
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Linear => "linear",
            Preset::Ease => "ease",
            Preset::EaseIn => "ease-in",
            Preset::EaseOut => "ease-out",
            Preset::EaseInOut => "ease-in-out",
        }
    }

    /// Control points defined for this keyword.
    pub const fn control_points(self) -> ControlPoints {
        match self {
            Preset::Linear => ControlPoints::LINEAR,
            Preset::Ease => ControlPoints::new(0.25, 0.1, 0.25, 1.0),
            Preset::EaseIn => ControlPoints::new(0.42, 0.0, 1.0, 1.0),
            Preset::EaseOut => ControlPoints::new(0.0, 0.0, 0.58, 1.0),
            Preset::EaseInOut => ControlPoints::new(0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Evaluator for this preset. Preset control points are always valid.
    pub fn easing(self) -> Easing {
        match self {
            Preset::Linear => Easing::Linear,
            other => Easing::CubicBezier(CubicBezier::from_valid_points(other.control_points())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = EasingError;

    /// Match a CSS keyword, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim();
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(keyword))
            .ok_or_else(|| {
                EasingError::InvalidTimingFunction(format!("unknown keyword '{keyword}'"))
            })
    }
}

impl From<Preset> for Easing {
    fn from(preset: Preset) -> Self {
        preset.easing()
    }
}

//! CSS `<easing-function>` text for the cubic Bezier subset.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::easing::{ControlPoints, Easing};
use crate::error::EasingError;
use crate::preset::Preset;

const CUBIC_BEZIER: &str = "cubic-bezier";

impl FromStr for Easing {
    type Err = EasingError;

    /// Parse a keyword (`ease-in`, ...) or `cubic-bezier(x1, y1, x2, y2)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        trace!(text, "parsing timing function");

        if let Ok(preset) = text.parse::<Preset>() {
            return Ok(preset.easing());
        }

        let arguments = function_arguments(text, CUBIC_BEZIER).ok_or_else(|| {
            EasingError::InvalidTimingFunction(format!(
                "expected a keyword or {CUBIC_BEZIER}(x1, y1, x2, y2), got '{text}'"
            ))
        })?;

        Easing::from_points(parse_control_points(arguments)?)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str(Preset::Linear.name()),
            Easing::CubicBezier(curve) => fmt::Display::fmt(&curve.control_points(), f),
        }
    }
}

/// Return the text between the parentheses of `name(...)`.
fn function_arguments<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let open = text.find('(')?;
    let (head, rest) = text.split_at(open);
    if !head.trim_end().eq_ignore_ascii_case(name) {
        return None;
    }
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn parse_control_points(arguments: &str) -> Result<ControlPoints, EasingError> {
    let values = arguments
        .split(',')
        .map(|arg| {
            let arg = arg.trim();
            match arg.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(EasingError::InvalidTimingFunction(format!(
                    "'{arg}' is not a finite number"
                ))),
            }
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let [x1, y1, x2, y2] = <[f64; 4]>::try_from(values).map_err(|values| {
        EasingError::InvalidTimingFunction(format!(
            "{CUBIC_BEZIER} takes 4 arguments, got {}",
            values.len()
        ))
    })?;

    Ok(ControlPoints::new(x1, y1, x2, y2))
}

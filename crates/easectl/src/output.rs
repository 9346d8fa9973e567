//! Output formatting for CLI responses

use anyhow::Error;
use bezier_easing::{ControlPoints, Easing, EasingLut, Preset};
use colored::*;
use serde::Serialize;
use serde_json::json;

use crate::error::CliError;

/// One evaluated point on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub x: f64,
    pub y: f64,
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(err) => err.type_name(),
        None => "error",
    }
}

/// Print evaluated points, one per input
pub fn print_evaluations(easing: &Easing, evaluations: &[Evaluation], json: bool) {
    if json {
        let output = json!({
            "success": true,
            "curve": easing.to_string(),
            "results": evaluations
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format results as JSON: {}", e),
        }
    } else {
        println!("{} {}", "Curve:".bold(), easing);
        for evaluation in evaluations {
            println!("  f({}) = {}", evaluation.x, evaluation.y);
        }
    }
}

/// Print an evenly spaced sampling of the curve as a table
pub fn print_samples(easing: &Easing, samples: &[Evaluation], json: bool) {
    if json {
        let output = json!({
            "success": true,
            "curve": easing.to_string(),
            "samples": samples
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format samples as JSON: {}", e),
        }
    } else {
        println!("{} {}", "Curve:".bold(), easing);
        println!("  {:>8}  {:>10}", "x".dimmed(), "y".dimmed());
        for sample in samples {
            println!("  {:>8.4}  {:>10.6}", sample.x, sample.y);
        }
    }
}

/// Print a baked lookup table
pub fn print_lut(easing: &Easing, lut: &EasingLut, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "curve": easing.to_string(),
            "size": EasingLut::SIZE,
            "monotonic": lut.is_monotonic(),
            "min": lut.min_value(),
            "max": lut.max_value(),
            "table": lut
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format lookup table as JSON: {}", e),
        }
    } else {
        println!("{} {}", "Curve:".bold(), easing);
        println!(
            "  {} entries, range [{:.6}, {:.6}], {}",
            EasingLut::SIZE,
            lut.min_value(),
            lut.max_value(),
            if lut.is_monotonic() {
                "monotonic".green()
            } else {
                "non-monotonic".yellow()
            }
        );
        for row in lut.table().chunks(8) {
            let line: Vec<String> = row.iter().map(|v| format!("{v:>9.6}")).collect();
            println!("  {}", line.join(" "));
        }
    }
}

/// Print the CSS keyword presets
pub fn print_presets(json: bool) {
    if json {
        let presets: Vec<serde_json::Value> = Preset::ALL
            .into_iter()
            .map(|preset| {
                json!({
                    "name": preset.name(),
                    "control_points": preset.control_points(),
                    "css": css_text(preset.control_points())
                })
            })
            .collect();
        let output = json!({
            "success": true,
            "presets": presets
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format presets as JSON: {}", e),
        }
    } else {
        println!("{}", "Presets:".bold());
        for preset in Preset::ALL {
            println!(
                "  {:<12} {}",
                preset.name().cyan(),
                css_text(preset.control_points())
            );
        }
    }
}

/// `cubic-bezier(...)` text for the points, even on the identity line.
fn css_text(points: ControlPoints) -> String {
    points.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_serializes_as_pair() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&Evaluation { x: 0.5, y: 0.25 })?;
        assert_eq!(json, r#"{"x":0.5,"y":0.25}"#);
        Ok(())
    }

    #[test]
    fn error_type_name_uses_cli_error() {
        let err = Error::from(CliError::from(
            bezier_easing::EasingError::InvalidControlPoint {
                point: 1,
                value: -1.0,
            },
        ));
        assert_eq!(error_type_name(&err), "invalid_control_point");
        assert_eq!(error_type_name(&anyhow::anyhow!("other")), "error");
    }

    #[test]
    fn css_text_keeps_linear_points() {
        assert_eq!(
            css_text(Preset::Linear.control_points()),
            "cubic-bezier(0, 0, 1, 1)"
        );
    }
}

//! Evaluate an easing at given inputs

use anyhow::Result;
use tracing::debug;

use crate::commands::CurveArgs;
use crate::output::{self, Evaluation};

/// Execute the eval command
pub fn execute(curve: &CurveArgs, inputs: &[f64], json: bool) -> Result<()> {
    let easing = curve.load()?;
    debug!(%easing, count = inputs.len(), "evaluating easing");

    let evaluations: Vec<Evaluation> = inputs
        .iter()
        .map(|&x| Evaluation {
            x,
            y: easing.evaluate(x),
        })
        .collect();

    output::print_evaluations(&easing, &evaluations, json);
    Ok(())
}

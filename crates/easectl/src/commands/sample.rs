//! Sample an easing at evenly spaced inputs

use anyhow::Result;
use bezier_easing::Easing;
use tracing::debug;

use crate::commands::CurveArgs;
use crate::output::{self, Evaluation};

/// Execute the sample command
pub fn execute(curve: &CurveArgs, steps: u32, json: bool) -> Result<()> {
    let easing = curve.load()?;
    debug!(%easing, steps, "sampling easing");

    let samples = sample(&easing, steps);
    output::print_samples(&easing, &samples, json);
    Ok(())
}

/// `steps + 1` points at `x = i / steps`, endpoints included.
pub fn sample(easing: &Easing, steps: u32) -> Vec<Evaluation> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let x = f64::from(i) / f64::from(steps);
            Evaluation {
                x,
                y: easing.evaluate(x),
            }
        })
        .collect()
}

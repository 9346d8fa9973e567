//! Bake an easing into a lookup table

use anyhow::Result;
use tracing::debug;

use crate::commands::CurveArgs;
use crate::output;

/// Execute the lut command
pub fn execute(curve: &CurveArgs, json: bool) -> Result<()> {
    let easing = curve.load()?;
    let lut = easing.to_lut();
    debug!(%easing, monotonic = lut.is_monotonic(), "baked lookup table");

    output::print_lut(&easing, &lut, json);
    Ok(())
}

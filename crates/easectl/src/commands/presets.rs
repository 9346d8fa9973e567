//! List the CSS keyword presets

use anyhow::Result;

use crate::output;

/// Execute the presets command
pub fn execute(json: bool) -> Result<()> {
    output::print_presets(json);
    Ok(())
}

//! Command implementations for easectl CLI

pub mod eval;
pub mod lut;
pub mod presets;
pub mod sample;

use std::path::{Path, PathBuf};

use bezier_easing::{Easing, EasingConfig, EasingError, bezier};
use clap::Args;
use tracing::{debug, info};

use crate::error::CliError;

/// Where the easing comes from: inline text or a JSON config file.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct CurveArgs {
    /// Preset keyword, cubic-bezier(...) text, or four comma-separated numbers
    #[arg(short, long, allow_hyphen_values = true)]
    pub curve: Option<String>,

    /// JSON file holding an easing configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CurveArgs {
    /// Build the easing this argument group describes.
    pub fn load(&self) -> Result<Easing, CliError> {
        match (&self.curve, &self.config) {
            (_, Some(path)) => load_config(path),
            (Some(text), None) => Ok(parse_curve(text)?),
            (None, None) => Ok(Easing::default()),
        }
    }
}

/// Parse curve text given on the command line.
///
/// CSS text is tried first; `x1,y1,x2,y2` is accepted as a shorthand for
/// `cubic-bezier(x1, y1, x2, y2)`.
pub fn parse_curve(text: &str) -> Result<Easing, EasingError> {
    match text.parse::<Easing>() {
        Ok(easing) => Ok(easing),
        Err(err) => match parse_number_list(text) {
            Some([x1, y1, x2, y2]) => bezier(x1, y1, x2, y2),
            None => Err(err),
        },
    }
}

fn parse_number_list(text: &str) -> Option<[f64; 4]> {
    let numbers = text
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<Vec<f64>>>()?;
    <[f64; 4]>::try_from(numbers).ok()
}

/// Read and validate an easing configuration file.
pub fn load_config(path: &Path) -> Result<Easing, CliError> {
    info!(path = %path.display(), "loading easing config");

    let contents = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: EasingConfig =
        serde_json::from_str(&contents).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(?config, "parsed easing config");

    Ok(config.build()?)
}

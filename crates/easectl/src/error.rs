//! Error types for easectl CLI

use std::path::PathBuf;

use bezier_easing::EasingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Easing(#[from] EasingError),

    #[error("Cannot read config file {}: {}", .path.display(), .source)]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file {}: {}", .path.display(), .source)]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Easing(EasingError::InvalidControlPoint { .. }) => 2,
            CliError::Easing(EasingError::InvalidTimingFunction(_)) => 3,
            CliError::ConfigRead { .. } | CliError::ConfigParse { .. } => 4,
            CliError::JsonError(_) => 1,
        }
    }

    /// Stable name used in JSON error output.
    pub fn type_name(&self) -> &'static str {
        match self {
            CliError::Easing(EasingError::InvalidControlPoint { .. }) => "invalid_control_point",
            CliError::Easing(EasingError::InvalidTimingFunction(_)) => "invalid_timing_function",
            CliError::ConfigRead { .. } => "config_unreadable",
            CliError::ConfigParse { .. } => "config_malformed",
            CliError::JsonError(_) => "json",
        }
    }
}

//! easectl - cubic-bezier easing CLI
//!
//! Evaluate, sample and bake CSS timing functions from the command line.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::CurveArgs;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "easectl")]
#[command(about = "Evaluate, sample and bake cubic-bezier easing curves")]
#[command(version)]
#[command(long_about = "
easectl evaluates CSS timing functions: the keywords linear, ease, ease-in,
ease-out and ease-in-out, or any cubic-bezier(x1, y1, x2, y2) curve.

A curve is given with --curve as a keyword, as cubic-bezier(...) text or as
four comma-separated numbers, or loaded with --config from a JSON file.
Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the curve at one or more inputs
    Eval {
        #[command(flatten)]
        curve: CurveArgs,

        /// Input progress values
        #[arg(required = true, allow_negative_numbers = true)]
        inputs: Vec<f64>,
    },

    /// Print evenly spaced (x, y) samples of the curve
    Sample {
        #[command(flatten)]
        curve: CurveArgs,

        /// Number of intervals; prints steps + 1 points
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        steps: u32,
    },

    /// Print the 256-entry baked lookup table
    Lut {
        #[command(flatten)]
        curve: CurveArgs,
    },

    /// List the CSS keyword presets
    Presets,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            if let Err(print_err) = err.print() {
                eprintln!("{}", print_err);
            }
            std::process::exit(1);
        }
    };

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("easectl={log_level},bezier_easing={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let result = execute_command(&cli);

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);

            std::process::exit(exit_code);
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Eval { curve, inputs } => commands::eval::execute(curve, inputs, cli.json),
        Commands::Sample { curve, steps } => commands::sample::execute(curve, *steps, cli.json),
        Commands::Lut { curve } => commands::lut::execute(curve, cli.json),
        Commands::Presets => commands::presets::execute(cli.json),
    }
}

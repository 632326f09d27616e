//! Command line argument parsing for the Verdict CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default artifact location.
const DEFAULT_MODEL_PATH: &str = "verdict.model";

/// Verdict - sentiment classification for short movie reviews
#[derive(Parser, Debug, Clone)]
#[command(name = "verdict")]
#[command(about = "Classify movie review sentiment from the command line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VerdictArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VerdictArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model on the sample corpus and save the artifact
    Train(TrainArgs),

    /// Classify a review using a saved model
    Predict(PredictArgs),

    /// Report whether a trained model artifact is available
    Status(StatusArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Path the model artifact is written to
    #[arg(short, long, value_name = "MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// The review text to classify
    #[arg(value_name = "REVIEW")]
    pub review: String,

    /// Path the model artifact is read from
    #[arg(short, long, value_name = "MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,
}

/// Arguments for the status query
#[derive(Parser, Debug, Clone)]
pub struct StatusArgs {
    /// Path the model artifact is read from
    #[arg(short, long, value_name = "MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

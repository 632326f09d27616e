//! Command implementations for the Verdict CLI.

use std::time::Instant;

use crate::cli::args::{Command, PredictArgs, StatusArgs, TrainArgs, VerdictArgs};
use crate::cli::output::output_result;
use crate::error::Result;
use crate::service::SentimentService;

/// Execute a CLI command.
pub fn execute_command(args: VerdictArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Predict(predict_args) => predict(predict_args.clone(), &args),
        Command::Status(status_args) => status(status_args.clone(), &args),
    }
}

/// Train a model on the sample corpus and persist the artifact.
fn train(args: TrainArgs, cli_args: &VerdictArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Training on the sample corpus...");
    }

    // Training always starts from scratch; no point loading an old artifact.
    let service = SentimentService::untrained(&args.model)?;
    let start_time = Instant::now();
    let response = service.train()?;

    if cli_args.verbosity() > 1 {
        println!("Trained in {}ms", start_time.elapsed().as_millis());
        println!("Artifact written to: {}", args.model.display());
    }

    output_result("Model trained", &response, cli_args)
}

/// Classify a review with a saved model.
fn predict(args: PredictArgs, cli_args: &VerdictArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading model from: {}", args.model.display());
    }

    let service = SentimentService::open(&args.model)?;
    let response = service.predict(&args.review)?;

    output_result("Prediction", &response, cli_args)
}

/// Report whether a trained model artifact is available.
fn status(args: StatusArgs, cli_args: &VerdictArgs) -> Result<()> {
    let service = SentimentService::open(&args.model)?;
    output_result("Model status", &service.status(), cli_args)
}

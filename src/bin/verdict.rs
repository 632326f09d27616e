//! Verdict CLI binary.

use clap::Parser;
use std::process;
use verdict::cli::args::VerdictArgs;
use verdict::cli::commands::execute_command;

fn main() {
    let args = VerdictArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

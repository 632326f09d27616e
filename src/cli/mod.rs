//! Command line interface for the `verdict` binary.

pub mod args;
pub mod commands;
pub mod output;

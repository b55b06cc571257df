//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! lautrec binary.

mod commands;
mod run;

pub use commands::{Cli, Commands, EstimateArgs, OutputFormat, RunArgs};
pub use run::{run_campaign, show_estimate, show_health, show_platforms};

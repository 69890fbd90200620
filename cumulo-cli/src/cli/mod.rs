//! Command-line interface orchestration for the cumulo pipeline.
//!
//! Parses the four positional arguments, runs the extract-cluster-write
//! pipeline, and exposes the serialisation helpers used by the binary.

mod commands;

pub use commands::{
    Cli, CliError, ExecutionSummary, render_summary, run_cli, write_labels,
};

#[cfg(test)]
mod tests;

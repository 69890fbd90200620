//! CLI entry point for the cumulo cluster detector.
//!
//! Parses command-line arguments with clap, executes the
//! extract-cluster-write pipeline, renders the summary to stdout, and maps
//! every failure to the conventional exit status 255. Logging is initialised
//! eagerly so subsequent operations can emit structured diagnostics via
//! `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;

use cumulo_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Exit status reported on any failure, matching the historical `exit(-1)`.
const FAILURE_STATUS: u8 = 255;

/// Execute the pipeline, render the summary, and flush the output stream.
fn try_main(cli: Cli) -> Result<()> {
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::from(FAILURE_STATUS);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--help` and `--version` land here with a zero status; real
            // argument errors adopt the uniform failure status.
            let exits_cleanly =
                matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
            let _ = err.print();
            return if exits_cleanly {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(FAILURE_STATUS)
            };
        }
    };

    if let Err(err) = try_main(cli) {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Cluster(core) => Some(core.code()),
                _ => None,
            });
        let code_field = code.map(|code| field::display(code.as_str()));

        error!(error = %err, code = code_field, "command execution failed");
        return ExitCode::from(FAILURE_STATUS);
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}

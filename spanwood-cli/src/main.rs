//! CLI entry point for spanwood.
//!
//! Parses arguments with clap, computes the minimum spanning tree, renders
//! the summary to stdout and maps failures to a non-zero exit code. Logging
//! is initialised first so every later step can emit structured events.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use spanwood_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use spanwood_providers_edgelist::EdgeListError;
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

/// Returns the stable error code and, for heap failures, the inner heap code.
fn error_codes(err: &anyhow::Error) -> (Option<&'static str>, Option<&'static str>) {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Core(core)) => (
            Some(core.code().as_str()),
            core.heap_code().map(|code| code.as_str()),
        ),
        Some(CliError::EdgeList(EdgeListError::Graph(graph))) => {
            (Some(graph.code().as_str()), None)
        }
        _ => (None, None),
    }
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, heap_code) = error_codes(&err);
        let message = format!("{err:#}");
        error!(
            error = message.as_str(),
            code = code.map(field::display),
            heap_code = heap_code.map(field::display),
            "command execution failed"
        );
        return ExitCode::FAILURE;
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

//! Command-line interface for inspecting GeoJSON with the geoint adapter.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod inspect;
mod records;
mod source;

pub use error::CliError;

use inspect::{InspectArgs, run_inspect};
use records::{RecordsArgs, run_records};

const ARG_PATH: &str = "path";
const ARG_WKID: &str = "wkid";
const ARG_BUCKET: &str = "bucket";
const ENV_INSPECT_PATH: &str = "GEOINT_CMDS_INSPECT_PATH";
const ENV_RECORDS_PATH: &str = "GEOINT_CMDS_RECORDS_PATH";

/// Run the geoint CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, input or output fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Inspect(args) => run_inspect(args, writer),
        Command::Records(args) => run_records(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "geoint",
    about = "Load GeoJSON into styled points, lines and areas overlays",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report per-bucket graphic counts and load diagnostics.
    Inspect(InspectArgs),
    /// Print the flattened records of the loaded graphics.
    Records(RecordsArgs),
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::Serialise)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;

//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use sheetnorm_data::{DataEngine, DataError, Settings, TracingReporter, WorkbookFormat};

use crate::response::Response;

/// Output format for responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON output for programmatic consumers
    #[default]
    Json,
    /// Human-readable text output
    Text,
}

#[derive(Parser)]
#[command(name = "sheetnorm")]
#[command(author, version, about = "Normalize spreadsheet month columns", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sheets of a workbook
    Sheets {
        /// Input workbook (.xlsx, .xlsm, .xlsb, .xls, .ods)
        input: PathBuf,

        /// Output format (json or text)
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Normalize a sheet and print its records
    Process {
        /// Input workbook (.xlsx, .xlsm, .xlsb, .xls, .ods)
        input: PathBuf,

        /// Sheet to process (required when the workbook has several sheets)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Configuration file path (defaults to ./sheetnorm.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (json or text)
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments, installs logging and dispatches to the command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Sheets { input, format } => {
            sheets_command(&input, format)?;
        }
        Commands::Process {
            input,
            sheet,
            config,
            format,
        } => {
            process_command(&input, sheet.as_deref(), config.as_deref(), format)?;
        }
    }

    Ok(())
}

/// Install the stderr `tracing` subscriber
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Display name of an input path
fn file_name(input: &Path) -> String {
    input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

/// Check the extension, then read the workbook bytes
fn read_workbook(input: &Path) -> sheetnorm_data::Result<Vec<u8>> {
    WorkbookFormat::from_file_name(&file_name(input))?;
    Ok(fs::read(input)?)
}

/// Build the response for the sheets command
pub fn sheets_response(input: &Path) -> Response {
    let name = file_name(input);
    let result =
        read_workbook(input).and_then(|bytes| DataEngine::inventory(&name, bytes));

    match result {
        Ok(inventory) => {
            info!(file = %name, sheets = inventory.len(), "workbook inventoried");
            Response::inventory(&name, inventory)
        }
        Err(err) => Response::error(&name, &err),
    }
}

/// Build the response for the process command
pub fn process_response(input: &Path, sheet: Option<&str>, settings: &Settings) -> Response {
    let name = file_name(input);
    debug!(file = %name, sheet = ?sheet, "processing workbook");

    let result = read_workbook(input).and_then(|bytes| {
        DataEngine::process(&name, bytes, sheet, &settings.pipeline, &TracingReporter)
    });

    match result {
        Ok(outcome) => Response::outcome(&name, outcome),
        Err(err) => Response::error(&name, &err),
    }
}

/// Load settings from an explicit path or the current directory
fn load_settings(config: Option<&Path>) -> std::result::Result<Settings, DataError> {
    match config {
        Some(path) => Settings::load(path),
        None => Settings::discover(std::env::current_dir()?),
    }
}

/// Execute the sheets command
pub fn sheets_command(input: &Path, format: OutputFormat) -> Result<()> {
    let response = sheets_response(input);
    emit(&response, format)
}

/// Execute the process command
pub fn process_command(
    input: &Path,
    sheet: Option<&str>,
    config: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let response = match load_settings(config) {
        Ok(settings) => process_response(input, sheet, &settings),
        Err(err) => Response::error(&file_name(input), &err),
    };
    emit(&response, format)
}

/// Print a response and exit non-zero for errors
fn emit(response: &Response, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(response)
                .context("Failed to serialize response to JSON")?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_text(response)),
    }

    if response.is_error() {
        std::process::exit(1);
    }

    Ok(())
}

/// Render a response as human-readable text
pub fn render_text(response: &Response) -> String {
    let mut out = String::new();
    match response {
        Response::Inventory {
            file_name,
            sheet_names,
            ..
        } => {
            out.push_str(&format!("{}: {} sheet(s)\n", file_name, sheet_names.len()));
            for sheet in sheet_names {
                out.push_str(&format!("  {}\n", sheet));
            }
        }
        Response::SelectionRequired {
            file_name, sheets, ..
        } => {
            out.push_str(&format!(
                "{} has {} sheets; choose one with --sheet:\n",
                file_name,
                sheets.len()
            ));
            for sheet in sheets {
                out.push_str(&format!("  {}\n", sheet));
            }
        }
        Response::Table {
            columns, data, ..
        } => {
            out.push_str(&columns.join("\t"));
            out.push('\n');
            for record in data {
                let cells: Vec<String> = columns
                    .iter()
                    .map(|c| record.get(c).map(|v| v.to_string()).unwrap_or_default())
                    .collect();
                out.push_str(&cells.join("\t"));
                out.push('\n');
            }
        }
        Response::Error {
            file_name, error, ..
        } => {
            out.push_str(&format!(
                "error[{}]: {} ({})\n",
                error.code, error.message, file_name
            ));
        }
    }
    out
}

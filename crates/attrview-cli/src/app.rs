//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use attrview_core::FAILURE_MESSAGE;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::clipboard::{Clipboard, Osc52Clipboard};
use crate::config::{OutputFormat, Settings};
use crate::fetch::{source_for, DocumentSource};
use crate::logging::{self, LogTarget};
use crate::session::Session;
use crate::tui::{self, App};

#[derive(Parser)]
#[command(name = "attrview")]
#[command(author, version, about = "Browse AsciiDoc attributes", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./attrview.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Attributes document: URL or local file
    #[arg(short, long, global = true)]
    source: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print attributes matching a filter
    List {
        /// Case-insensitive text matched against names and values
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Browse attributes interactively
    Browse {
        /// Initial filter text
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Write logs to this file while the browser is open
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Copy one attribute value to the clipboard
    Copy {
        /// Attribute name
        name: String,

        /// Look the attribute up inside this condition
        #[arg(long)]
        condition: Option<String>,
    },
}

/// Text a command leaves for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// The command ran against the loaded document
    Done(String),
    /// The document could not be loaded; holds the fixed failure text
    Failed(String),
}

impl CommandOutput {
    pub fn text(&self) -> &str {
        match self {
            CommandOutput::Done(text) | CommandOutput::Failed(text) => text,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CommandOutput::Failed(_))
    }
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let log_target = match &cli.command {
        Commands::Browse { log_file, .. } => match log_file.as_deref() {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Discard,
        },
        _ => LogTarget::Stderr,
    };
    logging::init(cli.verbose, log_target).context("Failed to initialize logging")?;

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let mut settings = Settings::load(cli.config.as_deref(), &cwd)?;
    if let Some(source) = cli.source {
        settings.source.location = source;
    }

    let source = source_for(&settings.source.location, settings.source.timeout())
        .context("Failed to create HTTP client")?;

    let output = match cli.command {
        Commands::List { filter, format } => {
            let format = format.unwrap_or(settings.display.format);
            list_command(source.as_ref(), &filter, format)?
        }
        Commands::Browse { filter, .. } => {
            return browse_command(source.as_ref(), &filter);
        }
        Commands::Copy { name, condition } => {
            let mut clipboard = Osc52Clipboard::stdout();
            copy_command(source.as_ref(), &name, condition.as_deref(), &mut clipboard)?
        }
    };

    let mut stdout = io::stdout();
    write!(stdout, "{}", output.text()).context("Failed to write output")?;
    stdout.flush().context("Failed to write output")?;

    // The cause is already in the log; the user only sees the fixed text
    if output.is_failed() {
        std::process::exit(1);
    }

    Ok(())
}

/// Execute the list command
///
/// Returns the rendered attributes, or the failure text in the same format
/// when the document could not be loaded.
pub fn list_command(
    source: &dyn DocumentSource,
    filter: &str,
    format: OutputFormat,
) -> Result<CommandOutput> {
    let session = Session::load(source);
    let output = session
        .render(filter)
        .to_output(format)
        .context("Failed to render attributes")?;

    if session.is_loaded() {
        Ok(CommandOutput::Done(output))
    } else {
        Ok(CommandOutput::Failed(output))
    }
}

/// Execute the browse command
pub fn browse_command(source: &dyn DocumentSource, filter: &str) -> Result<()> {
    let session = Session::load(source);
    let mut app = App::new(session, filter, Box::new(Osc52Clipboard::stdout()));
    tui::run(&mut app).context("Terminal UI failed")?;
    Ok(())
}

/// Execute the copy command, returning the acknowledgment line
pub fn copy_command(
    source: &dyn DocumentSource,
    name: &str,
    condition: Option<&str>,
    clipboard: &mut dyn Clipboard,
) -> Result<CommandOutput> {
    let session = Session::load(source);
    let Some(result) = session.result() else {
        return Ok(CommandOutput::Failed(format!("{}\n", FAILURE_MESSAGE)));
    };

    let attribute = result.find(name, condition).with_context(|| match condition {
        Some(condition) => format!("Attribute '{}' not found in condition '{}'", name, condition),
        None => format!("Attribute '{}' not found", name),
    })?;

    info!(name, condition = ?condition, "copying attribute value");
    let ack = session
        .copy(&attribute.value, clipboard)
        .with_context(|| format!("Failed to copy value of '{}'", name))?;
    Ok(CommandOutput::Done(format!("{}\n", ack)))
}

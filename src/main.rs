//! pwgen-form CLI
//!
//! Interactive settings form for a password generator.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use pwgen_form::config::Config;
use pwgen_form::controller::Controller;
use pwgen_form::error::Result;
use pwgen_form::logging::{LogConfig, LogTarget, init_logging};
use pwgen_form::report::{OutputFormat, format_state};
use pwgen_form::tui;
use pwgen_form::view::HeadlessView;

#[derive(Parser)]
#[command(name = "pwgen-form")]
#[command(about = "Password generator settings form")]
#[command(version)]
struct Cli {
    /// Config file (default: <config dir>/pwgen-form/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive form
    Form {
        /// Starting password length
        #[arg(long)]
        length: Option<u32>,
    },

    /// Print the form state without opening the terminal UI
    State {
        /// Set the length as if the slider were moved
        #[arg(long)]
        length: Option<u32>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The form owns the terminal; never log to stderr underneath it.
    let target = match (&cli.log_file, &cli.command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Commands::Form { .. }) => LogTarget::Discard,
        (None, Commands::State { .. }) => LogTarget::Stderr,
    };
    if let Err(e) = init_logging(&LogConfig::from_verbosity(cli.verbose, target)) {
        eprintln!("Error: cannot open log file: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Form { length } => cmd_form(cli.config, length),
        Commands::State { length, format } => cmd_state(cli.config, length, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_form(config_path: Option<PathBuf>, length: Option<u32>) -> Result<()> {
    let config = Config::resolve(config_path.as_deref())?;
    let length = length.map(|l| config.check_length(l)).transpose()?;

    let state = tui::run(&config, length)?;

    print!("{}", format_state(&state, OutputFormat::Human));
    Ok(())
}

fn cmd_state(config_path: Option<PathBuf>, length: Option<u32>, format: OutputFormat) -> Result<()> {
    let config = Config::resolve(config_path.as_deref())?;
    let length = length.map(|l| config.check_length(l)).transpose()?;

    let mut state = config.initial_state();
    let mut view = HeadlessView::new();
    Controller::new(config.debug.log_state).initialize(&state, &mut view);

    if let Some(length) = length {
        view.slide_to(&mut state, length);
    }

    print!("{}", format_state(&state, format));
    Ok(())
}

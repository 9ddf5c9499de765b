//! blockworks CLI - building blocks from an abstract factory
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input failure or other error
//! - 2: Unknown block kind
//! - 3: Invalid dimension

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use blockworks::ops::{MakeError, SessionError};
use blockworks::util::diagnostic::Diagnostic;
use blockworks::util::Shell;
use cli::{Cli, Commands, MessageFormat, RunArgs};

/// Process exit codes.
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const SELECTION_ERROR: u8 = 2;
    pub const VALIDATION_ERROR: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("blockworks=debug")
    } else {
        EnvFilter::new("blockworks=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let shell = Shell::from_flags(
        cli.quiet,
        cli.verbose,
        cli.color,
        cli.message_format == MessageFormat::Json,
    );

    match run(cli.command, &shell) {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let (diag, code) = classify(&e);
            shell.diagnostic(&diag);
            ExitCode::from(code)
        }
    }
}

fn run(command: Option<Commands>, shell: &Shell) -> Result<()> {
    match command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => commands::run::execute(args, shell),
        Commands::Make(args) => commands::make::execute(args, shell),
        Commands::Kinds => commands::kinds::execute(shell),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Pick the diagnostic and exit code for a failed command.
fn classify(err: &anyhow::Error) -> (Diagnostic, u8) {
    if let Some(e) = err.downcast_ref::<SessionError>() {
        let code = match e {
            SessionError::Selection(_) => ExitCodes::SELECTION_ERROR,
            SessionError::Validation(_) | SessionError::TooManyAttempts { .. } => {
                ExitCodes::VALIDATION_ERROR
            }
            SessionError::UnexpectedEof | SessionError::Input(_) => ExitCodes::GENERAL_ERROR,
        };
        return (e.to_diagnostic(), code);
    }

    if let Some(e) = err.downcast_ref::<MakeError>() {
        let code = match e {
            MakeError::Selection(_) => ExitCodes::SELECTION_ERROR,
            MakeError::Validation(_) => ExitCodes::VALIDATION_ERROR,
        };
        return (e.to_diagnostic(), code);
    }

    (Diagnostic::error(format!("{:#}", err)), ExitCodes::GENERAL_ERROR)
}

//! CLI entry point and dispatch logic
//!
//! `run()` parses arguments, discovers configuration, initializes logging, dispatches the
//! command and handles all error output.

use clap::Parser;

use super::args::{Cli, Commands};
use super::commands;
use accessform_config::{CliArgs, Config};
use accessform_utils::error::{AccessFormError, ConfigError};
use accessform_utils::exit_codes::ExitCode;
use accessform_utils::logging::init_tracing;

/// Main CLI execution function.
///
/// Prints command output to stdout and errors to stderr. main.rs only maps the returned
/// `ExitCode` to the process exit status.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();
    let cli_args = cli_args_from(&cli);

    let config = match Config::discover(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            let err = config_error(err);
            eprintln!("{}", err.display_for_user());
            return Err(err.to_exit_code());
        }
    };

    // A subscriber may already be installed when embedded in tests
    let _ = init_tracing(config.logging.verbose);

    match dispatch(cli.command, &config) {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Err(error) => {
            if let Some(accessform_error) = error.downcast_ref::<AccessFormError>() {
                eprintln!("{}", accessform_error.display_for_user());
                Err(accessform_error.to_exit_code())
            } else {
                eprintln!("✗ Unexpected error: {error:#}");
                Err(ExitCode::INTERNAL)
            }
        }
    }
}

fn dispatch(command: Commands, config: &Config) -> anyhow::Result<String> {
    match command {
        Commands::Group { session, state } => {
            commands::execute_group_command(&session, state, config)
        }
        Commands::Secret { session } => commands::execute_secret_command(&session, config),
        Commands::Config => Ok(commands::execute_config_command(config)),
    }
}

/// Only flags the user actually set are passed on, so unset flags fall through to the file.
pub(crate) fn cli_args_from(cli: &Cli) -> CliArgs {
    CliArgs {
        config_path: cli.config.clone(),
        verbose: cli.verbose.then_some(true),
        strict: cli.strict.then_some(true),
        pretty: cli.compact.then_some(false),
    }
}

fn config_error(err: anyhow::Error) -> AccessFormError {
    match err.downcast::<ConfigError>() {
        Ok(config_error) => AccessFormError::Config(config_error),
        Err(other) => AccessFormError::Config(ConfigError::InvalidFile(format!("{other:#}"))),
    }
}

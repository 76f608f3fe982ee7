//! CLI argument definitions and parsing structures
//!
//! This module defines the command-line interface structure using clap.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// accessform - replay group and secret editor sessions
#[derive(Parser, Debug)]
#[command(name = "accessform")]
#[command(about = "Replay group membership and secret editor sessions and emit request JSON")]
#[command(long_about = r#"
accessform loads an editing session (the options a dialog was opened with plus the
user's actions), replays it through the group or secret form model, and prints the
request body the dialog would submit.

EXAMPLES:
  # Build the group request for a session
  accessform group session.json

  # Show which members and collections are selected/available after the actions
  accessform group session.json --state

  # Build a secret create/update request, reading the session from stdin
  cat secret.json | accessform secret -

  # Show the effective configuration and where each value came from
  accessform config

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  Config file is discovered by searching upward from CWD for .accessform/config.toml
  Use --config or ACCESSFORM_CONFIG to specify an explicit config file path
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Fail when an action references an id that is not among the loaded options
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a group editor session and print the group request
    Group {
        /// Session file (`-` for stdin)
        session: PathBuf,

        /// Print the selection state instead of the request
        #[arg(long)]
        state: bool,
    },

    /// Replay a secret editor session and print the create/update submission
    Secret {
        /// Session file (`-` for stdin)
        session: PathBuf,
    },

    /// Print the effective configuration with source attribution
    Config,
}

/// Build the clap command, for introspection in tests.
#[must_use]
pub fn build_cli() -> clap::Command {
    Cli::command()
}

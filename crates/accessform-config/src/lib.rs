//! Configuration management for accessform
//!
//! Hierarchical configuration with discovery and precedence: CLI > file > defaults.
//! Configuration files are TOML with optional `[output]`, `[selection]` and `[logging]`
//! sections.

mod discovery;
mod model;
mod sources;

pub use discovery::{CONFIG_DIR, CONFIG_ENV_VAR, CONFIG_FILE};
pub use model::{CliArgs, Config, ConfigSource, LoggingConfig, OutputConfig, SelectionConfig};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Where an effective configuration value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    ConfigFile(PathBuf),
    Defaults,
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub verbose: Option<bool>,
    pub strict: Option<bool>,
    pub pretty: Option<bool>,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// `[selection]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectionConfig {
    /// Treat session actions that reference unknown ids as errors instead of no-ops
    pub strict: bool,
}

/// `[logging]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub verbose: bool,
}

/// Effective configuration for accessform.
///
/// Use [`Config::discover()`] for CLI behavior: it searches upward from the current directory
/// for `.accessform/config.toml` (stopping at a repository root), honors the
/// `ACCESSFORM_CONFIG` environment variable, and layers CLI values on top.
///
/// ```rust,no_run
/// use accessform_config::{CliArgs, Config};
///
/// let config = Config::discover(&CliArgs::default())?;
/// println!("strict: {}", config.selection.strict);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub output: OutputConfig,
    pub selection: SelectionConfig,
    pub logging: LoggingConfig,
    /// Source of each effective value, keyed by setting name
    pub source_attribution: HashMap<String, ConfigSource>,
}

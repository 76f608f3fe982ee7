use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use accessform_utils::error::ConfigError;

use super::model::{CliArgs, Config, ConfigSource, LoggingConfig, OutputConfig, SelectionConfig};

/// Directory searched for the config file
pub const CONFIG_DIR: &str = ".accessform";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "ACCESSFORM_CONFIG";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    output: Option<TomlOutput>,
    selection: Option<TomlSelection>,
    logging: Option<TomlLogging>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct TomlOutput {
    pretty: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct TomlSelection {
    strict: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct TomlLogging {
    verbose: Option<bool>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > file > defaults
    ///
    /// Uses `ACCESSFORM_CONFIG` when no explicit path is given, otherwise searches from the
    /// current working directory.
    pub fn discover(cli_args: &CliArgs) -> Result<Self> {
        let start_dir = std::env::current_dir().context("Failed to get current directory")?;

        if cli_args.config_path.is_none()
            && let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR)
        {
            let args = CliArgs {
                config_path: Some(PathBuf::from(env_path)),
                ..cli_args.clone()
            };
            return Self::discover_from(&start_dir, &args);
        }

        Self::discover_from(&start_dir, cli_args)
    }

    /// Discover and load configuration starting from a specific directory
    ///
    /// This is the path-driven variant used by tests to avoid process-global state.
    pub fn discover_from(start_dir: &Path, cli_args: &CliArgs) -> Result<Self> {
        let mut source_attribution = HashMap::new();
        let mut output = OutputConfig::default();
        let mut selection = SelectionConfig::default();
        let mut logging = LoggingConfig::default();

        for key in ["pretty", "strict", "verbose"] {
            source_attribution.insert(key.to_string(), ConfigSource::Defaults);
        }

        let config_path = match &cli_args.config_path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(ConfigError::NotFound {
                        path: explicit.display().to_string(),
                    }
                    .into());
                }
                Some(explicit.clone())
            }
            None => Self::discover_config_file_from(start_dir),
        };

        if let Some(path) = &config_path {
            let file_config = Self::load_config_file(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?;
            let config_source = ConfigSource::ConfigFile(path.clone());

            if let Some(pretty) = file_config.output.and_then(|o| o.pretty) {
                output.pretty = pretty;
                source_attribution.insert("pretty".to_string(), config_source.clone());
            }
            if let Some(strict) = file_config.selection.and_then(|s| s.strict) {
                selection.strict = strict;
                source_attribution.insert("strict".to_string(), config_source.clone());
            }
            if let Some(verbose) = file_config.logging.and_then(|l| l.verbose) {
                logging.verbose = verbose;
                source_attribution.insert("verbose".to_string(), config_source);
            }
        }

        // CLI values override everything
        if let Some(pretty) = cli_args.pretty {
            output.pretty = pretty;
            source_attribution.insert("pretty".to_string(), ConfigSource::Cli);
        }
        if let Some(strict) = cli_args.strict {
            selection.strict = strict;
            source_attribution.insert("strict".to_string(), ConfigSource::Cli);
        }
        if let Some(verbose) = cli_args.verbose {
            logging.verbose = verbose;
            source_attribution.insert("verbose".to_string(), ConfigSource::Cli);
        }

        Ok(Self {
            output,
            selection,
            logging,
            source_attribution,
        })
    }

    /// Search upward from `start_dir` for `.accessform/config.toml`.
    ///
    /// Stops at a repository root (`.git`, `.hg`, `.svn`) or the filesystem root.
    #[must_use]
    pub fn discover_config_file_from(start_dir: &Path) -> Option<PathBuf> {
        for dir in start_dir.ancestors() {
            let config_path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
            if config_path.is_file() {
                return Some(config_path);
            }
            if [".git", ".hg", ".svn"]
                .iter()
                .any(|marker| dir.join(marker).exists())
            {
                break;
            }
        }
        None
    }

    fn load_config_file(path: &Path) -> Result<TomlConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: TomlConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {e}", path.display())))?;
        Ok(config)
    }
}

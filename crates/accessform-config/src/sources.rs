use std::collections::BTreeMap;

use super::model::{Config, ConfigSource};

impl ConfigSource {
    /// Stable label used in `accessform config` output
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::ConfigFile(_) => "config",
            Self::Defaults => "default",
        }
    }
}

impl Config {
    /// Effective configuration as `key -> (value, source)`, sorted by key.
    #[must_use]
    pub fn effective_config(&self) -> BTreeMap<String, (String, String)> {
        let source = |key: &str| {
            self.source_attribution
                .get(key)
                .unwrap_or(&ConfigSource::Defaults)
                .label()
                .to_string()
        };

        let mut config = BTreeMap::new();
        config.insert(
            "pretty".to_string(),
            (self.output.pretty.to_string(), source("pretty")),
        );
        config.insert(
            "strict".to_string(),
            (self.selection.strict.to_string(), source("strict")),
        );
        config.insert(
            "verbose".to_string(),
            (self.logging.verbose.to_string(), source("verbose")),
        );
        config
    }
}

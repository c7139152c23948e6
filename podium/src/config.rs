use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{default_sections, CONFIG_FILENAME};
use crate::section::SectionSpec;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for podium.
    pub podium: PodiumConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for podium.
pub struct PodiumConfig {
    /// Page to process when the CLI does not name one.
    pub input: Option<String>,
    /// Treat a missing section marker as a run failure.
    pub strict: Option<bool>,
    /// Replacement for the built-in section list.
    pub sections: Option<Vec<SectionSpec>>,
}

impl Config {
    /// Loads configuration from default locations (.podium.toml in the
    /// current directory or above).
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// An absent file means built-in defaults; a malformed file is reported
    /// on stderr and skipped.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let podium_toml = current.join(CONFIG_FILENAME);
            if podium_toml.exists() {
                if let Ok(content) = fs::read_to_string(&podium_toml) {
                    match toml::from_str::<Config>(&content) {
                        Ok(mut config) => {
                            config.config_file_path = Some(podium_toml);
                            return config;
                        }
                        Err(e) => {
                            eprintln!("Warning: ignoring malformed {}: {e}", podium_toml.display());
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }

    /// Loads an explicitly named configuration file. Unlike discovery, a
    /// missing or malformed file is an error here.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.config_file_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// The section list in effect: the configured one, or the built-ins.
    #[must_use]
    pub fn effective_sections(&self) -> Vec<SectionSpec> {
        self.podium
            .sections
            .clone()
            .unwrap_or_else(default_sections)
    }
}

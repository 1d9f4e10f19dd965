//! Configuration file support.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::journal::{EncryptionSettings, JournalConfig};

/// Name of the journal directory under the home directory, and of the
/// config directory under the platform config dir.
const APP_DIR: &str = "a7-journal";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Journal directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_dir: Option<PathBuf>,

    /// SSH key file for encryption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key_file: Option<PathBuf>,

    /// Encrypt notes on save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypt: Option<bool>,

    /// Editor command for editing notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

/// Settings passed on the command line. `None` defers to the config file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub dir: Option<PathBuf>,
    pub key: Option<PathBuf>,
    pub encrypt: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Write configuration to the default config file location.
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Write configuration to a specific file, creating its directory.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(config_path, contents)
            .with_context(|| format!("failed to write config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/a7-journal/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Returns the journal directory used when nothing is configured.
    pub fn default_journal_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Resolve the journal directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `journal_dir` setting
    /// 3. `~/a7-journal`
    pub fn journal_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.journal_dir.clone())
            .unwrap_or_else(Self::default_journal_dir)
    }

    /// Merges command-line overrides over this config.
    pub fn journal_config(&self, overrides: &Overrides) -> JournalConfig {
        let encryption = EncryptionSettings {
            enabled: overrides.encrypt.or(self.encrypt).unwrap_or(false),
            key_path: overrides
                .key
                .clone()
                .or_else(|| self.ssh_key_file.clone()),
        };
        JournalConfig::new(self.journal_dir(overrides.dir.as_ref())).with_encryption(encryption)
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $EDITOR environment variable
    /// 3. $VISUAL environment variable
    /// 4. "vi" as fallback
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| "vi".to_string())
    }
}

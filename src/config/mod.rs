use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OnePasswordError, Result};

/// Program invoked when nothing else is configured.
pub const DEFAULT_PROGRAM: &str = "op";

/// Vault used when nothing else is configured.
pub const DEFAULT_VAULT: &str = "Private";

/// Overrides the path to the `op` binary.
pub const CLI_PATH_ENV: &str = "ONEPASSWORD_CLI_PATH";

/// Overrides the default vault.
pub const VAULT_ENV: &str = "ONEPASSWORD_VAULT";

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "ONEPASSWORD_CONFIG";

/// Configuration file format (`<config dir>/onepassword/config.toml`).
///
/// Example:
/// ```toml
/// [cli]
/// program = "/usr/local/bin/op"
///
/// [vault]
/// default = "Work"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub cli: CliConfig,
    #[serde(default)]
    pub vault: VaultConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    /// Name or path of the 1Password CLI binary
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaultConfig {
    /// Vault that clients bind to unless told otherwise
    #[serde(default = "default_vault")]
    pub default: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            default: default_vault(),
        }
    }
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_vault() -> String {
    DEFAULT_VAULT.to_string()
}

impl Config {
    /// Load config from a path. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| OnePasswordError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to a path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OnePasswordError::Config(format!("serialize error: {}", e)))?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Default config file location, honouring `ONEPASSWORD_CONFIG`.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = non_empty_env(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("onepassword").join("config.toml"))
    }

    /// Load the config file from [`Config::default_path`] and apply
    /// environment overrides on top.
    pub fn resolve() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply `ONEPASSWORD_CLI_PATH` and `ONEPASSWORD_VAULT`. Empty values are ignored.
    pub fn apply_env(&mut self) {
        if let Some(program) = non_empty_env(CLI_PATH_ENV) {
            self.cli.program = program;
        }
        if let Some(vault) = non_empty_env(VAULT_ENV) {
            self.vault.default = vault;
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

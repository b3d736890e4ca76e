//! Console configuration (console.toml)
//!
//! Settings for the cvar console. Stored in TOML in the platform-specific
//! config directory; every field has a default so a partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors from reading a TOML configuration or message file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Maximum characters of a value shown in a completion hint (default: 50)
    #[serde(default = "default_hint_max_chars")]
    pub hint_max_chars: usize,
    /// Also hide confidential values when a cvar is read (default: false)
    #[serde(default)]
    pub redact_reads: bool,
    /// Message file overriding the bundled English messages
    #[serde(default)]
    pub locale_file: Option<PathBuf>,
    /// Cvar definition files registered at startup, in order
    #[serde(default)]
    pub definitions: Vec<PathBuf>,
}

fn default_hint_max_chars() -> usize {
    50
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            hint_max_chars: default_hint_max_chars(),
            redact_reads: false,
            locale_file: None,
            definitions: Vec::new(),
        }
    }
}

impl ConsoleConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = read_file(path)?;
        Self::from_toml_str(&text)
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\Nethercore\CVars\config`
/// On macOS: `~/Library/Application Support/io.nethercore.CVars`
/// On Linux: `~/.config/cvars`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "nethercore", "cvars")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads `console.toml` from the platform's configuration directory.
///
/// Returns defaults if the file doesn't exist or cannot be parsed.
pub fn load() -> ConsoleConfig {
    let Some(path) = config_dir().map(|dir| dir.join("console.toml")) else {
        return ConsoleConfig::default();
    };

    if !path.exists() {
        return ConsoleConfig::default();
    }

    match ConsoleConfig::load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring {}: {}", path.display(), e);
            ConsoleConfig::default()
        }
    }
}

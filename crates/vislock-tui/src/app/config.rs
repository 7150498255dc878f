//! TUI configuration file
//!
//! `vislock/config.toml` under the user config directory holds the lock
//! configuration in a `[lock]` table plus a few terminal-specific settings.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use vislock_core::LockConfig;

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Log file name
const LOG_FILE_NAME: &str = "vislock.log";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "vislock";

/// Settings for one run of the terminal lock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// The lock itself
    #[serde(default)]
    pub lock: LockConfig,

    /// Redraw / poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_filter() -> String {
    "vislock=info,vislock_core=info,vislock_tui=info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            lock: LockConfig::default(),
            tick_rate_ms: default_tick_rate_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Get the default log file path
    pub fn log_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(LOG_FILE_NAME))
    }

    /// Tick interval as a duration
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Load configuration from the default location
    ///
    /// Falls back to defaults if the file doesn't exist or can't be parsed.
    /// The fallback reason is returned rather than logged, since this runs
    /// before the log subscriber is installed.
    pub fn load() -> Loaded {
        match Self::config_dir() {
            Some(dir) => Self::load_from_dir(&dir),
            None => Loaded::defaults(),
        }
    }

    /// Load `config.toml` from `dir`, falling back to defaults
    pub fn load_from_dir(dir: &Path) -> Loaded {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Loaded::defaults();
        }

        match Self::load_from(&path) {
            Ok(config) => Loaded {
                config,
                fallback: None,
            },
            Err(error) => Loaded {
                config: Self::default(),
                fallback: Some(Fallback { path, error }),
            },
        }
    }

    /// Load an explicit configuration file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// Result of loading the default configuration file
#[derive(Debug)]
pub struct Loaded {
    pub config: TuiConfig,
    /// Set when a config file existed but defaults were used instead
    pub fallback: Option<Fallback>,
}

impl Loaded {
    fn defaults() -> Self {
        Self {
            config: TuiConfig::default(),
            fallback: None,
        }
    }
}

/// A config file that was ignored
#[derive(Debug, thiserror::Error)]
#[error("Ignoring config file {path:?}: {error}")]
pub struct Fallback {
    pub path: PathBuf,
    #[source]
    pub error: ConfigError,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

//! Command-line arguments

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use vislock_core::{SizeClass, ThemeMode};

use crate::app::{Loaded, TuiConfig};

#[derive(Parser, Debug)]
#[command(name = "vislock")]
#[command(about = "Visual lock: pick the right image and enter the password", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML). Defaults to vislock/config.toml in the
    /// user config directory when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Failed attempts before the lock shuts
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Zero-based index of the correct image
    #[arg(long)]
    pub correct_index: Option<usize>,

    /// Expected password
    #[arg(long)]
    pub password: Option<String>,

    /// Colour theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Grid density
    #[arg(long, value_enum)]
    pub size: Option<SizeArg>,

    /// Hide the instructional hints and demo key
    #[arg(long)]
    pub no_instructions: bool,

    /// Resolve verification without the simulated latency
    #[arg(long)]
    pub instant: bool,

    /// Log file (defaults to vislock/vislock.log in the user config directory)
    #[arg(long)]
    pub log: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SizeArg {
    Sm,
    Md,
    Lg,
}

impl From<SizeArg> for SizeClass {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Sm => SizeClass::Small,
            SizeArg::Md => SizeClass::Medium,
            SizeArg::Lg => SizeClass::Large,
        }
    }
}

impl Cli {
    /// Load the configuration file and apply command-line overrides.
    ///
    /// An explicit `--config` must load. The default file may be broken, in
    /// which case defaults are used and the reason is carried in
    /// [`Loaded::fallback`] for the caller to report.
    pub fn load_settings(&self) -> Result<Loaded> {
        self.load_settings_in(TuiConfig::config_dir().as_deref())
    }

    fn load_settings_in(&self, default_dir: Option<&Path>) -> Result<Loaded> {
        let mut loaded = match (&self.config, default_dir) {
            (Some(path), _) => Loaded {
                config: TuiConfig::load_from(path)
                    .with_context(|| format!("Failed to load config {:?}", path))?,
                fallback: None,
            },
            (None, Some(dir)) => TuiConfig::load_from_dir(dir),
            (None, None) => Loaded {
                config: TuiConfig::default(),
                fallback: None,
            },
        };

        self.apply_overrides(&mut loaded.config);
        loaded
            .config
            .lock
            .validate()
            .context("Invalid lock configuration")?;

        Ok(loaded)
    }

    fn apply_overrides(&self, settings: &mut TuiConfig) {
        let lock = &mut settings.lock;

        if let Some(max) = self.max_attempts {
            lock.max_attempts = max;
        }
        if let Some(index) = self.correct_index {
            lock.correct_index = index;
        }
        if let Some(password) = &self.password {
            lock.expected_password = password.clone();
        }
        if let Some(theme) = self.theme {
            lock.display.theme = theme.into();
        }
        if let Some(size) = self.size {
            lock.display.size = size.into();
        }
        if self.no_instructions {
            lock.display.show_instructions = false;
        }
    }
}

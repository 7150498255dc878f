//! Lock configuration
//!
//! Immutable for the lifetime of a session. Every field has a default so an
//! embedder (or a TOML file) only needs to name what it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::{DEFAULT_MAX_ATTEMPTS, DEFAULT_PASSWORD};

/// Only this many items are ever offered for selection
pub const MAX_VISIBLE_ITEMS: usize = 12;

/// Built-in decorative palette used when no items are configured
pub const DEFAULT_PALETTE: [&str; MAX_VISIBLE_ITEMS] = [
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
    "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
    "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
    "linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%)",
    "linear-gradient(135deg, #ffecd2 0%, #fcb69f 100%)",
    "linear-gradient(135deg, #a18cd1 0%, #fbc2eb 100%)",
    "linear-gradient(135deg, #fad0c4 0%, #ffd1ff 100%)",
    "linear-gradient(135deg, #ffecd2 0%, #fcb69f 100%)",
    "linear-gradient(135deg, #84fab0 0%, #8fd3f4 100%)",
];

/// Opaque reference to a selectable visual (URL, gradient, file name...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `#rrggbb` colour mentioned in the reference, if any
    pub fn accent(&self) -> Option<[u8; 3]> {
        let bytes = self.0.as_bytes();
        bytes
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == b'#')
            .find_map(|(i, _)| {
                let digits = bytes.get(i + 1..i + 7)?;
                let mut rgb = [0u8; 3];
                hex::decode_to_slice(digits, &mut rgb).ok()?;
                Some(rgb)
            })
    }
}

impl From<&str> for ImageRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl From<String> for ImageRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

/// Visual density of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    #[serde(alias = "sm")]
    Small,
    #[default]
    #[serde(alias = "md")]
    Medium,
    #[serde(alias = "lg")]
    Large,
}

impl SizeClass {
    /// Number of grid columns
    pub fn grid_columns(&self) -> usize {
        match self {
            SizeClass::Small => 3,
            SizeClass::Medium | SizeClass::Large => 4,
        }
    }

    /// Cell width hint in terminal columns
    pub fn cell_width(&self) -> u16 {
        match self {
            SizeClass::Small => 8,
            SizeClass::Medium => 10,
            SizeClass::Large => 12,
        }
    }

    /// Cell height hint in terminal rows
    pub fn cell_height(&self) -> u16 {
        match self {
            SizeClass::Small => 3,
            SizeClass::Medium => 4,
            SizeClass::Large => 5,
        }
    }
}

/// Colour theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Display toggles. None of these affect the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Show the instructional hint and demo key
    pub show_instructions: bool,
    pub size: SizeClass,
    pub theme: ThemeMode,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_instructions: true,
            size: SizeClass::default(),
            theme: ThemeMode::default(),
        }
    }
}

/// Default latencies in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Simulated verification latency
    pub verification_ms: u64,
    /// How long a failure is shown before the lock returns to idle
    pub error_display_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            verification_ms: 1500,
            error_display_ms: 2000,
        }
    }
}

/// Complete lock configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    pub title: String,
    pub description: String,
    /// Ordered selectable items
    pub items: Vec<ImageRef>,
    /// Index of the correct item
    pub correct_index: usize,
    pub expected_password: String,
    /// Failed attempts before the lock shuts
    pub max_attempts: u32,
    pub display: DisplayOptions,
    pub timing: Timing,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            title: "Visual Lock".to_string(),
            description: "Pick the correct image and enter the password".to_string(),
            items: DEFAULT_PALETTE.iter().map(|r| ImageRef::new(*r)).collect(),
            correct_index: 0,
            expected_password: DEFAULT_PASSWORD.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            display: DisplayOptions::default(),
            timing: Timing::default(),
        }
    }
}

impl LockConfig {
    /// Start a builder from the defaults
    pub fn builder() -> LockConfigBuilder {
        LockConfigBuilder::default()
    }

    /// The items actually offered for selection
    pub fn visible_items(&self) -> &[ImageRef] {
        let end = self.items.len().min(MAX_VISIBLE_ITEMS);
        &self.items[..end]
    }

    /// Reject configurations the lock cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(ConfigError::NoItems);
        }

        let visible = self.visible_items().len();
        if self.correct_index >= visible {
            return Err(ConfigError::CorrectIndexOutOfRange {
                index: self.correct_index,
                visible,
            });
        }

        if self.expected_password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }

        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: LockConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("Loaded lock config from {:?}", path);
        Ok(config)
    }
}

/// Fluent construction of a [`LockConfig`]
#[derive(Debug, Clone, Default)]
pub struct LockConfigBuilder {
    config: LockConfig,
}

impl LockConfigBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = description.into();
        self
    }

    pub fn items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ImageRef>,
    {
        self.config.items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn correct_index(mut self, index: usize) -> Self {
        self.config.correct_index = index;
        self
    }

    pub fn expected_password(mut self, password: impl Into<String>) -> Self {
        self.config.expected_password = password.into();
        self
    }

    pub fn max_attempts(mut self, max: u32) -> Self {
        self.config.max_attempts = max;
        self
    }

    pub fn show_instructions(mut self, show: bool) -> Self {
        self.config.display.show_instructions = show;
        self
    }

    pub fn size(mut self, size: SizeClass) -> Self {
        self.config.display.size = size;
        self
    }

    pub fn theme(mut self, theme: ThemeMode) -> Self {
        self.config.display.theme = theme;
        self
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.config.timing = timing;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<LockConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = LockConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.items.len(), 12);
        assert_eq!(config.correct_index, 0);
        assert_eq!(config.expected_password, "demo123");
        assert_eq!(config.max_attempts, 3);
        assert!(config.display.show_instructions);
        assert_eq!(config.display.size, SizeClass::Medium);
        assert_eq!(config.display.theme, ThemeMode::Light);
    }

    #[test]
    fn test_validation_rejects() {
        let empty = LockConfig::builder().items(Vec::<String>::new()).build();
        assert!(matches!(empty, Err(ConfigError::NoItems)));

        let out_of_range = LockConfig::builder()
            .items(["a", "b"])
            .correct_index(2)
            .build();
        assert!(matches!(
            out_of_range,
            Err(ConfigError::CorrectIndexOutOfRange { index: 2, visible: 2 })
        ));

        let no_password = LockConfig::builder().expected_password("").build();
        assert!(matches!(no_password, Err(ConfigError::EmptyPassword)));

        let zero = LockConfig::builder().max_attempts(0).build();
        assert!(matches!(zero, Err(ConfigError::ZeroAttempts)));
    }

    #[test]
    fn test_visible_items_capped() {
        let items: Vec<String> = (0..20).map(|i| format!("item-{}", i)).collect();
        let config = LockConfig::builder().items(items).build().unwrap();
        assert_eq!(config.visible_items().len(), MAX_VISIBLE_ITEMS);

        // The correct item must be one the user can actually pick
        let hidden = LockConfig::builder()
            .items((0..20).map(|i| format!("item-{}", i)))
            .correct_index(15)
            .build();
        assert!(hidden.is_err());
    }

    #[test]
    fn test_accent_extraction() {
        assert_eq!(
            ImageRef::new(DEFAULT_PALETTE[0]).accent(),
            Some([0x66, 0x7e, 0xea])
        );
        assert_eq!(ImageRef::new("photo.png").accent(), None);
        assert_eq!(ImageRef::new("#zz0000 then #00ff00").accent(), Some([0, 255, 0]));
        assert_eq!(ImageRef::new("trailing #12").accent(), None);
    }

    #[test]
    fn test_partial_toml() {
        let config = LockConfig::from_toml_str(
            r#"
            correct_index = 2
            max_attempts = 5

            [display]
            size = "sm"
            theme = "dark"
            "#,
        )
        .unwrap();

        assert_eq!(config.correct_index, 2);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.expected_password, "demo123");
        assert_eq!(config.display.size, SizeClass::Small);
        assert_eq!(config.display.theme, ThemeMode::Dark);
        assert!(config.display.show_instructions);
        assert_eq!(config.timing, Timing::default());
    }

    #[test]
    fn test_toml_validation_applies() {
        let result = LockConfig::from_toml_str("max_attempts = 0");
        assert!(matches!(result, Err(ConfigError::ZeroAttempts)));

        let result = LockConfig::from_toml_str("max_attempts = \"three\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "expected_password = \"hunter2\"").unwrap();
        writeln!(file, "items = [\"cat.png\", \"dog.png\"]").unwrap();

        let config = LockConfig::load(file.path()).unwrap();
        assert_eq!(config.expected_password, "hunter2");
        assert_eq!(config.items, vec![ImageRef::from("cat.png"), ImageRef::from("dog.png")]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = LockConfig::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}

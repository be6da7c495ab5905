//! Viewer configuration

use crate::sub_viewer::Dimensions;
use crate::MediaError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
///
/// Video and audio suffix sets are fixed and deliberately absent here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaViewConfig {
    pub panel: PanelConfig,
    pub image: ImageConfig,
    pub logging: LoggingConfig,
}

/// Initial panel geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl PanelConfig {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Where the image suffix set comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatSource {
    /// Formats the compiled image codecs can read
    #[serde(rename = "codec")]
    Codec,
    /// The `suffixes` list
    #[serde(rename = "list")]
    List,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub source: FormatSource,
    /// Suffixes without the leading dot, used when `source = "list"`
    pub suffixes: Vec<String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            source: FormatSource::Codec,
            suffixes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    pub level: String,
    pub retain_days: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            retain_days: 7,
        }
    }
}

impl MediaViewConfig {
    /// Load configuration from `path`, falling back to defaults if missing
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        match Self::read_from(path)? {
            Some(config) => {
                tracing::info!("Configuration loaded from {:?}", path);
                Ok(config)
            }
            None => {
                tracing::info!("Using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Read and validate `path` without logging; `None` if it does not exist
    ///
    /// Used before the logger is up, when the log level itself comes from
    /// the file.
    pub fn read_from(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("org", "media_view", "media_view")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("./config.toml"))
    }

    pub fn validate(&self) -> Result<(), MediaError> {
        if self.image.source == FormatSource::List && self.image.suffixes.is_empty() {
            return Err(MediaError::Config(
                "image.source = \"list\" requires at least one suffix".into(),
            ));
        }
        if self.image.suffixes.iter().any(|s| s.trim().is_empty()) {
            return Err(MediaError::Config("image.suffixes contains an empty entry".into()));
        }
        Ok(())
    }
}

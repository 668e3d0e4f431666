//! Configuration system
//!
//! Files are TOML or RON, chosen by extension. Flag sets are written as
//! `"SHOWN | RESIZABLE"` strings.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::flags::{InitFlags, RendererFlags, WindowFlags};
use crate::types::Dimensions;

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl Format {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Parse configuration text
    fn parse(contents: &str, format: Format) -> Result<Self, ConfigError> {
        match format {
            Format::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Render configuration text
    fn render(&self, format: Format) -> Result<String, ConfigError> {
        match format {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }

    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents, format)
    }

    /// Load configuration from file, falling back to defaults if it does not exist
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::info!("{} not found, using default configuration", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = self.render(Format::from_path(path)?)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Window and renderer setup for an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Subsystems to initialize
    pub init_flags: InitFlags,
    /// Window creation flags
    pub window_flags: WindowFlags,
    /// Renderer creation flags
    pub renderer_flags: RendererFlags,
}

impl DisplayConfig {
    /// Window size
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "SDL2 Window".to_string(),
            width: 640,
            height: 480,
            init_flags: InitFlags::EVERYTHING,
            window_flags: WindowFlags::SHOWN,
            renderer_flags: RendererFlags::ACCELERATED | RendererFlags::PRESENTVSYNC,
        }
    }
}

impl Config for DisplayConfig {}

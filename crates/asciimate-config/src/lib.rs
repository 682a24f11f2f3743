//! Configuration for asciimate.
//!
//! Settings live in `config.toml` under the platform config directory.
//! Every section and field is optional; anything left out falls back to its
//! default.

use std::path::{Path, PathBuf};

use asciimate_core::{AnimationSpeed, ColorTheme};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading or writing the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine a config directory")]
    NoConfigDir,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub art: ArtConfig,
    pub reveal: RevealConfig,
    pub display: DisplayConfig,
}

/// Where the art blocks come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtConfig {
    /// Art file to load instead of the bundled art.
    pub file: Option<PathBuf>,
}

/// Reveal/dissolve tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub chunk_size: usize,
    pub dissolve_chunk_size: usize,
    pub reveal_delay_ms: u64,
    pub dissolve_delay_ms: u64,
    pub intro_hold_ms: u64,
    pub pause_ms: u64,
    pub dissolve: bool,
    /// Replacement noise glyphs; the built-in palette when unset.
    pub noise_chars: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_theme: ColorTheme,
    pub speed: AnimationSpeed,
    /// Column width used to center art in plain output.
    pub max_width: usize,
    /// Fixed frame delay written to JSON exports.
    pub export_delay_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            chunk_size: 5,
            dissolve_chunk_size: 5,
            reveal_delay_ms: 50,
            dissolve_delay_ms: 40,
            intro_hold_ms: 1000,
            pause_ms: 2000,
            dissolve: true,
            noise_chars: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            speed: AnimationSpeed::default(),
            max_width: 80,
            export_delay_ms: 100,
        }
    }
}

/// Return the platform-specific configuration directory for asciimate.
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "asciimate").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Return the path to the default config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

impl Config {
    /// Load from the default path. A missing file (or no config directory
    /// at all) gives the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`. A missing file gives the defaults; an unreadable
    /// or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let data = toml::to_string_pretty(self)?;
        std::fs::write(path, data).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }
}

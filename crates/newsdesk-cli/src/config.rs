//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use newsdesk_core::{Address, Coordinates, DEFAULT_FEED_DELAY};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the database and captured images
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Simulated news feed delay in milliseconds
    #[serde(default)]
    pub feed_delay_ms: Option<u64>,

    /// Directory used as the photo gallery for downloads
    #[serde(default)]
    pub gallery_dir: Option<PathBuf>,

    /// Answers given to permission prompts
    #[serde(default)]
    pub permissions: PermissionsConfig,

    /// Fixed device location
    #[serde(default)]
    pub location: LocationConfig,
}

/// Permission grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionsConfig {
    /// Allow camera access
    #[serde(default = "default_true")]
    pub camera: bool,

    /// Allow location access
    #[serde(default = "default_true")]
    pub location: bool,

    /// Allow saving to the gallery
    #[serde(default = "default_true")]
    pub media_library: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            camera: true,
            location: true,
            media_library: true,
        }
    }
}

/// The position and address reported by the desktop location provider.
///
/// Without coordinates the location is treated as unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl LocationConfig {
    /// Configured coordinates, if both are set.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.latitude?, self.longitude?))
    }

    /// Configured address, if any field is set.
    pub fn address(&self) -> Option<Address> {
        let address = Address {
            street: self.street.clone(),
            city: self.city.clone(),
            subregion: self.subregion.clone(),
            region: self.region.clone(),
            country: self.country.clone(),
        };
        (address != Address::default()).then_some(address)
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("newsdesk")
            .join("config.toml")
    }

    /// Load config from the default path, or return default if not found
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load config from `path`, or return default if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config: {}", e);
                    }
                },
                Err(e) => {
                    eprintln!("Warning: Failed to read config: {}", e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Resolve the data directory: flag, then config, then platform default.
    pub fn resolve_data_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(default_data_dir)
    }

    /// Resolve the gallery directory.
    pub fn resolve_gallery_dir(&self, data_dir: &Path) -> PathBuf {
        self.gallery_dir
            .clone()
            .or_else(|| dirs::picture_dir().map(|p| p.join("Newsdesk")))
            .unwrap_or_else(|| data_dir.join("gallery"))
    }

    /// Simulated feed delay.
    pub fn feed_delay(&self) -> Duration {
        self.feed_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_FEED_DELAY)
    }
}

/// Default data directory following platform conventions.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("newsdesk")
}

//! Configuration loader - YAML settings + .env overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration loaded from atlas.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub dataset_file: String,
    pub map_image_file: String,
    pub window: WindowConfig,
    pub text: TextConfig,
}

/// Viewport size; the canvas adds scrollable rows below it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// On-screen copy. Empty strings are not drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub author: String,
    pub title: String,
    pub credit: String,
    pub caption: String,
    pub legend_heading: String,
    pub back_label: String,
}

/// Overrides loaded from the environment / .env
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            dataset_file: "volcanoes.csv".to_string(),
            map_image_file: "world_map.png".to_string(),
            window: WindowConfig::default(),
            text: TextConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 900.0,
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            title: "VOLCANOES OF THE WORLD".to_string(),
            credit: String::new(),
            caption: "Each triangle is a volcano. Click a volcano on the map to see its details."
                .to_string(),
            legend_heading: "Last known eruption".to_string(),
            back_label: "← BACK TO MAP".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    /// A file that exists but doesn't parse is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::info!("Loading config from {:?}", path);
            Self::load(path)
        } else {
            tracing::warn!("Config file not found: {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Apply environment overrides
    pub fn with_overrides(mut self, overrides: &EnvOverrides) -> Self {
        if let Some(dir) = &overrides.data_dir {
            self.data_dir = dir.clone();
        }
        self
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.data_dir.join(&self.dataset_file)
    }

    pub fn map_image_path(&self) -> PathBuf {
        self.data_dir.join(&self.map_image_file)
    }
}

impl EnvOverrides {
    /// Load overrides from .env file and the process environment
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_data_dir(std::env::var("ATLAS_DATA_DIR").ok())
    }

    /// An unset or empty `ATLAS_DATA_DIR` leaves the configured directory alone
    fn from_data_dir(value: Option<String>) -> Self {
        EnvOverrides {
            data_dir: value.filter(|s| !s.is_empty()).map(PathBuf::from),
        }
    }
}

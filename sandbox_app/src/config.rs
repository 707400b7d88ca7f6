//! Configuration system
//!
//! Sandbox settings load from TOML or RON files, picked by file extension.
//! Every section has a `Default`, so a missing file section or a missing
//! config path falls back to the built-in values.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Load from `path` when given, otherwise use the defaults
    fn load_or_default(path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.as_ref().display());
                Self::load_from_file(path)
            }
            None => {
                log::debug!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
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

/// Configuration for octree behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctreeConfig {
    /// Maximum items per node before subdivision
    pub max_items_per_node: usize,

    /// Maximum subdivision depth
    pub max_depth: u32,

    /// Minimum node half-size (prevents excessive subdivision)
    pub min_node_size: f64,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            max_items_per_node: 8,
            max_depth: 8,
            min_node_size: 1.0,
        }
    }
}

/// Turret firing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurretConfig {
    /// Projectile speed in world units per second
    pub bullet_speed: f64,

    /// Seconds between shots
    pub fire_interval: f64,

    /// Intercepts farther than this from the turret are not taken
    pub max_range: f64,
}

impl Default for TurretConfig {
    fn default() -> Self {
        Self {
            bullet_speed: 30.0,
            fire_interval: 2.0,
            max_range: 80.0,
        }
    }
}

/// Top-level sandbox configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Arena spans `-world_half_size..world_half_size` on every axis
    pub world_half_size: f64,

    /// Items spawned into the octree demo
    pub item_count: usize,

    /// Targets spawned into the turret demo
    pub target_count: usize,

    /// Largest item/target speed in world units per second
    pub max_speed: f64,

    /// Seed for the demo random generator
    pub seed: u64,

    /// Simulation step in seconds
    pub time_step: f64,

    /// Number of simulation steps to run
    pub steps: u32,

    /// Octree settings
    pub octree: OctreeConfig,

    /// Turret settings
    pub turret: TurretConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            world_half_size: 50.0,
            item_count: 40,
            target_count: 6,
            max_speed: 6.0,
            seed: 0x5eed,
            time_step: 1.0 / 30.0,
            steps: 300,
            octree: OctreeConfig::default(),
            turret: TurretConfig::default(),
        }
    }
}

impl Config for SandboxConfig {}

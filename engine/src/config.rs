//! Walkthrough Configuration
//!
//! Centralised tuning for the walkthrough, loadable from a JSON file. Every
//! section and field is optional in the file; missing values fall back to
//! the defaults, which match the hardcoded constants in each module.
//!
//! ```json
//! {
//!   "movement": { "walk_speed": 4.0, "jump": { "height": 2.0 } },
//!   "window": { "width": 1280, "height": 720 },
//!   "keys": { "forward": "ArrowUp", "jump": "ShiftRight" }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::input::KeyBindings;
use crate::player::MovementConfig;
use crate::world::ProximityConfig;

/// Window size; the cursor reference point is its centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

impl WindowConfig {
    /// Width over height, used for the projection matrix.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkthroughConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub movement: MovementConfig,
    pub proximity: ProximityConfig,
    pub keys: KeyBindings,
}

/// Errors that can occur while loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::JsonError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

impl WalkthroughConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&data)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialise as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

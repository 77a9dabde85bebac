//! Configuration and settings management for KitchenPlan
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Room defaults (initial boundary)
//! - Placement (counter height for elevated items)
//! - Diagram (top-down pixels per meter)
//! - Interaction (dimension readout grace period)
//! - Assets (model root directory, STL axis convention)
//! - UI preferences (measurement system)

pub use kitchenplan_core::units::MeasurementSystem;
use kitchenplan_core::constants::{
    COUNTER_HEIGHT, DEFAULT_ROOM_DEPTH, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, DIAGRAM_SCALE,
    READOUT_GRACE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Initial room boundary, in meters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomSettings {
    /// Extent along X
    pub width: f64,
    /// Extent along Z
    pub depth: f64,
    /// Wall height
    pub height: f64,
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_ROOM_WIDTH,
            depth: DEFAULT_ROOM_DEPTH,
            height: DEFAULT_ROOM_HEIGHT,
        }
    }
}

/// Placement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    /// Y position of counter-mounted items in meters
    pub counter_height: f64,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            counter_height: COUNTER_HEIGHT,
        }
    }
}

/// Top-down diagram settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramSettings {
    /// Diagram pixels per world meter
    pub pixels_per_meter: f64,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            pixels_per_meter: DIAGRAM_SCALE,
        }
    }
}

/// Interaction timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// How long the dimension readout lingers after a drag ends
    pub readout_grace_ms: u64,
}

impl InteractionSettings {
    /// Grace period as a `Duration`
    pub fn readout_grace(&self) -> Duration {
        Duration::from_millis(self.readout_grace_ms)
    }
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            readout_grace_ms: READOUT_GRACE.as_millis() as u64,
        }
    }
}

/// Asset loading settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory that relative model references resolve against
    pub asset_root: PathBuf,
    /// Treat model files as Z-up and swap to the Y-up layout frame
    pub z_up: bool,
    /// Factor converting model file units to meters (0.001 for millimeter models)
    pub model_scale: f64,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets/models"),
            z_up: false,
            model_scale: 1.0,
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiSettings {
    /// Units used by dimension readouts
    pub measurement_system: MeasurementSystem,
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Initial room boundary
    pub room: RoomSettings,
    /// Placement heights
    pub placement: PlacementSettings,
    /// Diagram scale
    pub diagram: DiagramSettings,
    /// Interaction timing
    pub interaction: InteractionSettings,
    /// Asset loading
    pub assets: AssetSettings,
    /// UI preferences
    pub ui: UiSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location (`<config_dir>/kitchenplan/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("kitchenplan").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("No platform config directory".to_string())
            })
    }

    /// Load config from the default location, falling back to defaults when
    /// no file exists there yet.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match Self::format_of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Self::format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = [
            ("room.width", self.room.width),
            ("room.depth", self.room.depth),
            ("room.height", self.room.height),
            ("placement.counter_height", self.placement.counter_height),
            ("diagram.pixels_per_meter", self.diagram.pixels_per_meter),
            ("assets.model_scale", self.assets.model_scale),
        ];

        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }

        if self.placement.counter_height > self.room.height {
            return Err(SettingsError::invalid(
                "placement.counter_height",
                "must not exceed room.height",
            ));
        }

        Ok(())
    }

    fn format_of(path: &Path) -> SettingsResult<Format> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}

enum Format {
    Json,
    Toml,
}

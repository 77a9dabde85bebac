//! KitchenPlan Settings Crate
//!
//! Handles application configuration: room defaults, placement heights,
//! diagram scale, interaction timing and asset locations.

pub mod config;
pub mod error;

pub use config::{
    AssetSettings, Config, DiagramSettings, InteractionSettings, PlacementSettings, RoomSettings,
    UiSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};

//! # KitchenPlan
//!
//! Kitchen layout engine: a rectangular room, catalog placement and
//! constrained manipulation of cabinets, countertops and appliances.
//!
//! ## Architecture
//!
//! KitchenPlan is organized as a workspace with multiple crates:
//!
//! 1. **kitchenplan-core** - Errors, constants, units, layout events
//! 2. **kitchenplan-settings** - Configuration file model and validation
//! 3. **kitchenplan-designer** - Catalog, layout store, placement, diagram
//! 4. **kitchenplan** - Logging setup and config wiring for hosts

pub use kitchenplan_core::{
    format_length, thread_safe, AssetError, CatalogError, Error, EventBus, EventCategory,
    EventFilter, LayoutEvent, MeasurementSystem, Result, ThreadSafe,
};

pub use kitchenplan_designer::{
    Boundary, Catalog, DiagramTransform, Diagram, DragDelta, DropPayload, Fixture, FixtureKind,
    ItemId, ItemKind, KitchenItem, LayoutSession, LayoutSnapshot, PlacementOptions,
    SessionOptions, StlAssetProvider, Viewport,
};

pub use kitchenplan_settings::{Config, SettingsError, SettingsResult};

use std::sync::Arc;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// A session shared between a UI thread and workers
pub type SharedSession = ThreadSafe<LayoutSession>;

/// Initialize logging with the default configuration
///
/// Console output honouring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initial room from the `room` section
pub fn boundary_from_config(config: &Config) -> Boundary {
    Boundary::new(config.room.width, config.room.depth, config.room.height)
}

/// Session tunables from the `placement`, `diagram`, `interaction` and `ui`
/// sections
pub fn session_options_from_config(config: &Config) -> SessionOptions {
    SessionOptions {
        placement: PlacementOptions {
            counter_height: config.placement.counter_height,
        },
        diagram: DiagramTransform::new(config.diagram.pixels_per_meter),
        readout_grace: config.interaction.readout_grace(),
        measurement_system: config.ui.measurement_system,
    }
}

/// Builds a session with the built-in catalog and an STL asset provider
/// rooted at `assets.asset_root`.
pub fn session_from_config(config: &Config) -> LayoutSession {
    let assets = StlAssetProvider::new(config.assets.asset_root.clone())
        .with_z_up(config.assets.z_up)
        .with_scale(config.assets.model_scale);

    tracing::info!(
        "Room {}m x {}m x {}m, assets from {}",
        config.room.width,
        config.room.depth,
        config.room.height,
        config.assets.asset_root.display()
    );

    LayoutSession::new(
        boundary_from_config(config),
        Catalog::builtin(),
        session_options_from_config(config),
    )
    .with_assets(Arc::new(assets))
}

/// [`session_from_config`] wrapped for cross-thread use
pub fn shared_session_from_config(config: &Config) -> SharedSession {
    thread_safe(session_from_config(config))
}

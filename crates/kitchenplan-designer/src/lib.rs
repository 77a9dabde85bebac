//! # KitchenPlan Designer
//!
//! The layout state and spatial-constraint engine behind KitchenPlan. It
//! owns the room, its fixtures and the placed kitchen items, and turns user
//! input into valid item transforms.
//!
//! ## Core Components
//!
//! - **Model**: boundary, fixtures, items and their dimensions
//! - **Catalog**: read-only item definitions, built in or loaded from JSON
//! - **Viewport**: pixel ↔ world transforms for the 3D view and the diagram
//! - **Layout Store**: the single mutation gate, publishing layout events
//! - **Placement**: catalog, drop and drag constraints
//! - **Readouts**: transient dimension labels
//! - **Model3D**: STL loading and bounding-box measurement
//! - **Diagram**: top-down projection and hit testing
//!
//! ## Architecture
//!
//! ```text
//! input (drop / drag / click)
//!   └── Viewport (pixels → meters)
//!         └── Placement (clamp to room)
//!               └── LayoutStore (commit, publish event)
//!                     └── renderers read LayoutSnapshot
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use kitchenplan_designer::{Boundary, Catalog, LayoutSession, SessionOptions};
//!
//! let mut session = LayoutSession::new(
//!     Boundary::new(4.0, 3.0, 2.4),
//!     Catalog::builtin(),
//!     SessionOptions::default(),
//! );
//! let id = session.place_from_catalog("base-cabinet").unwrap();
//! assert_eq!(session.item(&id).unwrap().position.x, 0.3);
//! ```

pub mod catalog;
pub mod diagram;
pub mod layout_store;
pub mod model;
pub mod model3d;
pub mod placement;
pub mod readout;
pub mod selection_manager;
pub mod session;
pub mod viewport;

pub use catalog::{Catalog, CatalogCategory, ItemDefinition};
pub use diagram::{Diagram, DiagramRect, DiagramShape};
pub use layout_store::{LayoutSnapshot, LayoutStore};
pub use model::{
    clamp_centered, Boundary, Dimensions, Fixture, FixtureKind, ItemId, ItemKind, ItemUpdate,
    KitchenItem, PlacementClass, RoomSurface, SurfaceKind,
};
pub use model3d::{AssetProvider, Mesh3D, Model3DImporter, StaticAssetProvider, StlAssetProvider};
pub use placement::{apply_drag, catalog_position, drop_position, DragDelta, DragResult, PlacementOptions};
pub use readout::{readout_text, DimensionReadouts};
pub use selection_manager::SelectionManager;
pub use session::{DropPayload, LayoutSession, SessionOptions};
pub use viewport::{DiagramTransform, FloorPoint, Viewport};

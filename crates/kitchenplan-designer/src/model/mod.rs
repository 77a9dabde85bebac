//! Layout data model.
//!
//! Everything the layout store owns: the room [`Boundary`], wall
//! [`Fixture`]s and placed [`KitchenItem`]s. Positions and extents are in
//! meters, rotations are Euler angles in radians. The room is centered at
//! the origin on the X/Z plane with +Y up.

mod fixture;
mod item;
mod room;

pub use fixture::{Fixture, FixtureKind};
pub use item::{Dimensions, ItemId, ItemKind, ItemUpdate, KitchenItem, PlacementClass};
pub use room::{clamp_centered, Boundary, RoomSurface, SurfaceKind};

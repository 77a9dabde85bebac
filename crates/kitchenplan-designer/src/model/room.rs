//! Room boundary and containment rules.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use kitchenplan_core::constants::{
    DEFAULT_ROOM_DEPTH, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, LENGTH_EPSILON,
};

use super::item::Dimensions;

/// Clamp a center coordinate so an extent of `item_extent` stays inside a
/// room extent of `room_extent` centered at the origin.
///
/// When the item is wider than the room the interval is empty and the item
/// is centered instead.
pub fn clamp_centered(value: f64, room_extent: f64, item_extent: f64) -> f64 {
    let limit = room_extent / 2.0 - item_extent / 2.0;
    if limit < 0.0 || !value.is_finite() {
        return 0.0;
    }
    value.clamp(-limit, limit)
}

/// Axis-aligned room extent centered at the origin on the X/Z plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    /// Extent along X
    pub width: f64,
    /// Extent along Z
    pub depth: f64,
    /// Wall height
    pub height: f64,
}

impl Default for Boundary {
    fn default() -> Self {
        Self::new(DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_DEPTH, DEFAULT_ROOM_HEIGHT)
    }
}

impl Boundary {
    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// All extents finite and strictly positive
    pub fn is_valid(&self) -> bool {
        [self.width, self.depth, self.height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_depth(&self) -> f64 {
        self.depth / 2.0
    }

    /// Clamp a point coordinate to `[-width/2, width/2]`
    pub fn clamp_x(&self, x: f64) -> f64 {
        x.clamp(-self.half_width(), self.half_width())
    }

    /// Clamp a point coordinate to `[-depth/2, depth/2]`
    pub fn clamp_z(&self, z: f64) -> f64 {
        z.clamp(-self.half_depth(), self.half_depth())
    }

    /// Clamp X/Z so the footprint of `dimensions` lies inside the room.
    /// Y passes through untouched.
    pub fn clamp_footprint(&self, position: Point3<f64>, dimensions: &Dimensions) -> Point3<f64> {
        Point3::new(
            clamp_centered(position.x, self.width, dimensions.width),
            position.y,
            clamp_centered(position.z, self.depth, dimensions.depth),
        )
    }

    /// Footprint containment with a small tolerance
    pub fn contains_footprint(&self, position: &Point3<f64>, dimensions: &Dimensions) -> bool {
        let fits = |value: f64, room: f64, item: f64| {
            let limit = (room / 2.0 - item / 2.0).max(0.0);
            value.abs() <= limit + LENGTH_EPSILON
        };
        fits(position.x, self.width, dimensions.width)
            && fits(position.z, self.depth, dimensions.depth)
    }

    /// Floor and the back, left and right wall planes.
    ///
    /// The front wall is left open so the room can be viewed from +Z.
    pub fn walls(&self) -> [RoomSurface; 4] {
        let half_height = self.height / 2.0;
        [
            RoomSurface {
                kind: SurfaceKind::Floor,
                center: Point3::origin(),
                width: self.width,
                height: self.depth,
                rotation: Vector3::new(-FRAC_PI_2, 0.0, 0.0),
            },
            RoomSurface {
                kind: SurfaceKind::BackWall,
                center: Point3::new(0.0, half_height, -self.half_depth()),
                width: self.width,
                height: self.height,
                rotation: Vector3::zeros(),
            },
            RoomSurface {
                kind: SurfaceKind::LeftWall,
                center: Point3::new(-self.half_width(), half_height, 0.0),
                width: self.depth,
                height: self.height,
                rotation: Vector3::new(0.0, FRAC_PI_2, 0.0),
            },
            RoomSurface {
                kind: SurfaceKind::RightWall,
                center: Point3::new(self.half_width(), half_height, 0.0),
                width: self.depth,
                height: self.height,
                rotation: Vector3::new(0.0, -FRAC_PI_2, 0.0),
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Floor,
    BackWall,
    LeftWall,
    RightWall,
}

/// A flat rectangle of the room shell, as a renderer would place a plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSurface {
    pub kind: SurfaceKind,
    pub center: Point3<f64>,
    /// Extent along the plane's local X
    pub width: f64,
    /// Extent along the plane's local Y
    pub height: f64,
    pub rotation: Vector3<f64>,
}

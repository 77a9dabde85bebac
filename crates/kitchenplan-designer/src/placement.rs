//! Placement and drag constraints.
//!
//! Turns raw input (a catalog click, a drop point, a manipulation delta)
//! into a transform that keeps the item's footprint inside the room.
//! Out-of-range input is clamped, never rejected.

use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

use kitchenplan_core::constants::COUNTER_HEIGHT;

use crate::model::{clamp_centered, Boundary, Dimensions, KitchenItem, PlacementClass};
use crate::viewport::FloorPoint;

/// Heights used when resolving a placement class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementOptions {
    /// Y of elevated (counter-mounted) items
    pub counter_height: f64,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            counter_height: COUNTER_HEIGHT,
        }
    }
}

impl PlacementOptions {
    pub fn height_for(&self, class: PlacementClass) -> f64 {
        class.height(self.counter_height)
    }
}

/// Default position for a catalog click.
///
/// Tucks the item toward the positive corner:
/// `min(w / 2, W / 2 - w)` on X and the same on Z, then footprint-clamped.
pub fn catalog_position(dimensions: &Dimensions, boundary: &Boundary, y: f64) -> Point3<f64> {
    let x = (dimensions.width / 2.0).min(boundary.half_width() - dimensions.width);
    let z = (dimensions.depth / 2.0).min(boundary.half_depth() - dimensions.depth);
    boundary.clamp_footprint(Point3::new(x, y, z), dimensions)
}

/// Position for an item dropped at a floor point.
pub fn drop_position(
    point: FloorPoint,
    dimensions: &Dimensions,
    boundary: &Boundary,
    y: f64,
) -> Point3<f64> {
    boundary.clamp_footprint(Point3::new(point.x, y, point.z), dimensions)
}

/// Incremental change from a manipulation gesture.
///
/// Only the X/Z translation and the rotation about the vertical axis are
/// applied; vertical movement is discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDelta {
    pub translation: Vector3<f64>,
    /// Rotation about +Y in radians
    pub yaw: f64,
}

impl Default for DragDelta {
    fn default() -> Self {
        Self::zero()
    }
}

impl DragDelta {
    pub fn new(translation: Vector3<f64>, yaw: f64) -> Self {
        Self { translation, yaw }
    }

    pub fn zero() -> Self {
        Self::new(Vector3::zeros(), 0.0)
    }

    /// Pure floor translation
    pub fn translate(dx: f64, dz: f64) -> Self {
        Self::new(Vector3::new(dx, 0.0, dz), 0.0)
    }

    /// Pure rotation about the vertical axis
    pub fn rotate(yaw: f64) -> Self {
        Self::new(Vector3::zeros(), yaw)
    }

    /// Decomposes a homogeneous delta matrix.
    ///
    /// The translation column is taken as is. The yaw is read from the
    /// upper 3x3 block as `atan2(r13, r33)`, which covers the full
    /// `(-pi, pi]` range.
    pub fn from_matrix(matrix: &Matrix4<f64>) -> Self {
        let translation = Vector3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);
        let linear: Matrix3<f64> = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        // Scale along the third column cancels inside atan2
        let yaw = linear[(0, 2)].atan2(linear[(2, 2)]);
        Self { translation, yaw }
    }

    pub fn is_zero(&self) -> bool {
        self.translation == Vector3::zeros() && self.yaw == 0.0
    }
}

/// Position and rotation after a drag step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragResult {
    pub position: Point3<f64>,
    pub rotation: Vector3<f64>,
}

/// Applies a delta to an item's last committed transform.
///
/// ```text
/// x = clamp(x + dx, -W/2 + w/2, W/2 - w/2)
/// z = clamp(z + dz, -D/2 + d/2, D/2 - d/2)
/// ```
/// Y is left alone. Yaw accumulates; the X and Z rotation components are
/// preserved. Non-finite delta components count as zero.
pub fn apply_drag(item: &KitchenItem, boundary: &Boundary, delta: &DragDelta) -> DragResult {
    let finite = |value: f64| if value.is_finite() { value } else { 0.0 };

    let position = Point3::new(
        clamp_centered(
            item.position.x + finite(delta.translation.x),
            boundary.width,
            item.dimensions.width,
        ),
        item.position.y,
        clamp_centered(
            item.position.z + finite(delta.translation.z),
            boundary.depth,
            item.dimensions.depth,
        ),
    );
    let rotation = Vector3::new(
        item.rotation.x,
        item.rotation.y + finite(delta.yaw),
        item.rotation.z,
    );
    DragResult { position, rotation }
}

//! Placed kitchen items.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, unique item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Width (X), height (Y) and depth (Z) in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Build from an extent vector ordered X, Y, Z
    pub fn from_extent(extent: &Vector3<f64>) -> Self {
        Self::new(extent.x, extent.y, extent.z)
    }

    /// All three extents are finite and strictly positive
    pub fn is_valid(&self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// Closed set of placeable item types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Cabinet,
    Countertop,
    Appliance,
}

impl ItemKind {
    /// Lowercase type name as shown in readouts
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Cabinet => "cabinet",
            ItemKind::Countertop => "countertop",
            ItemKind::Appliance => "appliance",
        }
    }

    /// Fallback color when neither catalog nor caller supplies one
    pub fn default_color(&self) -> &'static str {
        match self {
            ItemKind::Cabinet => "#8B4513",
            ItemKind::Countertop => "#808080",
            ItemKind::Appliance => "#C0C0C0",
        }
    }

    /// Placement class used for drops, where only the type is known.
    ///
    /// Countertops sit at counter height, everything else on the floor.
    pub fn drop_placement(&self) -> PlacementClass {
        match self {
            ItemKind::Countertop => PlacementClass::Elevated,
            ItemKind::Cabinet | ItemKind::Appliance => PlacementClass::Floor,
        }
    }

    /// Default size for an item dropped by type alone
    pub fn drop_dimensions(&self) -> Dimensions {
        match self {
            ItemKind::Countertop => Dimensions::new(0.6, 0.04, 0.6),
            ItemKind::Cabinet | ItemKind::Appliance => Dimensions::new(0.6, 0.8, 0.6),
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical placement class, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementClass {
    Floor,
    Elevated,
}

impl PlacementClass {
    /// Resolve the Y coordinate for this class
    pub fn height(&self, counter_height: f64) -> f64 {
        match self {
            PlacementClass::Floor => 0.0,
            PlacementClass::Elevated => counter_height,
        }
    }
}

/// A placed item.
///
/// `position` X/Z stays inside the room footprint (see
/// [`Boundary::clamp_footprint`](super::Boundary::clamp_footprint)).
/// `dimensions_resolved` is set once the dimensions have been measured from
/// the linked model; it guards against measuring twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub position: Point3<f64>,
    pub rotation: Vector3<f64>,
    pub scale: Vector3<f64>,
    pub dimensions: Dimensions,
    pub color: String,
    pub model_ref: Option<String>,
    pub label: Option<String>,
    pub dimensions_resolved: bool,
}

impl KitchenItem {
    /// New item with a generated id, identity rotation and unit scale
    pub fn new(kind: ItemKind, position: Point3<f64>, dimensions: Dimensions) -> Self {
        Self {
            id: ItemId::generate(),
            kind,
            position,
            rotation: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            dimensions,
            color: kind.default_color().to_string(),
            model_ref: None,
            label: None,
            dimensions_resolved: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_model_ref(mut self, model_ref: impl Into<String>) -> Self {
        self.model_ref = Some(model_ref.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Rotation around the vertical axis
    pub fn yaw(&self) -> f64 {
        self.rotation.y
    }

    /// Label if set, otherwise the type name
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(self.kind.as_str())
    }

    /// Whether a model is linked but not yet measured
    pub fn needs_measurement(&self) -> bool {
        self.model_ref.is_some() && !self.dimensions_resolved
    }
}

/// Partial replacement of an item's fields.
///
/// Only `Some` fields are written. `model_ref` and `label` use a nested
/// option so they can be cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub position: Option<Point3<f64>>,
    pub rotation: Option<Vector3<f64>>,
    pub scale: Option<Vector3<f64>>,
    pub dimensions: Option<Dimensions>,
    pub color: Option<String>,
    pub model_ref: Option<Option<String>>,
    pub label: Option<Option<String>>,
    pub dimensions_resolved: Option<bool>,
}

impl ItemUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Point3<f64>) -> Self {
        self.position = Some(position);
        self
    }

    pub fn rotation(mut self, rotation: Vector3<f64>) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn scale(mut self, scale: Vector3<f64>) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn model_ref(mut self, model_ref: Option<String>) -> Self {
        self.model_ref = Some(model_ref);
        self
    }

    pub fn label(mut self, label: Option<String>) -> Self {
        self.label = Some(label);
        self
    }

    pub fn dimensions_resolved(mut self, resolved: bool) -> Self {
        self.dimensions_resolved = Some(resolved);
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write the present fields into `item`
    pub fn apply_to(self, item: &mut KitchenItem) {
        if let Some(position) = self.position {
            item.position = position;
        }
        if let Some(rotation) = self.rotation {
            item.rotation = rotation;
        }
        if let Some(scale) = self.scale {
            item.scale = scale;
        }
        if let Some(dimensions) = self.dimensions {
            item.dimensions = dimensions;
        }
        if let Some(color) = self.color {
            item.color = color;
        }
        if let Some(model_ref) = self.model_ref {
            item.model_ref = model_ref;
        }
        if let Some(label) = self.label {
            item.label = label;
        }
        if let Some(resolved) = self.dimensions_resolved {
            item.dimensions_resolved = resolved;
        }
    }
}

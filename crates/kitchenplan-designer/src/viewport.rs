//! Viewport and coordinate transformation.
//!
//! Converts between the two pixel spaces the layout is driven from and
//! floor coordinates in world meters:
//!
//! - the 3D rendering surface, where catalog items are dropped, mapped
//!   through normalized device coordinates
//! - the top-down diagram, a fixed pixels-per-meter projection with the
//!   room's back-left corner at the origin
//!
//! World X runs to the right on both surfaces and world Z runs down.

use serde::{Deserialize, Serialize};

use kitchenplan_core::constants::DIAGRAM_SCALE;

use crate::model::Boundary;

/// A point on the floor plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FloorPoint {
    pub x: f64,
    pub z: f64,
}

impl FloorPoint {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

/// The 3D rendering surface rectangle in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport for a surface at (`left`, `top`) of the given size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Surface anchored at the client origin.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Moves or resizes the surface (typically on window resize).
    pub fn set_surface(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.left = left;
        self.top = top;
        self.width = width;
        self.height = height;
    }

    /// A zero or negative sized surface cannot map pointers.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Converts client pixels to normalized device coordinates.
    ///
    /// ```text
    /// ndc_x = ((pixel_x - left) / width) * 2 - 1
    /// ndc_z = ((pixel_y - top) / height) * 2 - 1
    /// ```
    pub fn pixel_to_ndc(&self, pixel_x: f64, pixel_y: f64) -> (f64, f64) {
        (
            ((pixel_x - self.left) / self.width) * 2.0 - 1.0,
            ((pixel_y - self.top) / self.height) * 2.0 - 1.0,
        )
    }

    /// Inverse of [`Viewport::pixel_to_ndc`].
    pub fn ndc_to_pixel(&self, ndc_x: f64, ndc_z: f64) -> (f64, f64) {
        (
            (ndc_x + 1.0) / 2.0 * self.width + self.left,
            (ndc_z + 1.0) / 2.0 * self.height + self.top,
        )
    }

    /// Converts a pointer position to a floor point.
    ///
    /// NDC is scaled by half the room extent and clamped to the room, so
    /// pointers outside the surface land on the nearest wall. Returns `None`
    /// for a degenerate surface.
    pub fn pixel_to_world(
        &self,
        pixel_x: f64,
        pixel_y: f64,
        boundary: &Boundary,
    ) -> Option<FloorPoint> {
        if !self.is_valid() {
            return None;
        }
        let (ndc_x, ndc_z) = self.pixel_to_ndc(pixel_x, pixel_y);
        Some(FloorPoint::new(
            boundary.clamp_x(ndc_x * boundary.half_width()),
            boundary.clamp_z(ndc_z * boundary.half_depth()),
        ))
    }

    /// Converts a floor point to surface pixels.
    pub fn world_to_pixel(&self, point: FloorPoint, boundary: &Boundary) -> (f64, f64) {
        self.ndc_to_pixel(
            point.x / boundary.half_width(),
            point.z / boundary.half_depth(),
        )
    }
}

/// Top-down diagram projection.
///
/// ```text
/// pixel_x = (x + width / 2) * scale
/// pixel_y = (z + depth / 2) * scale
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramTransform {
    scale: f64,
}

impl Default for DiagramTransform {
    fn default() -> Self {
        Self::new(DIAGRAM_SCALE)
    }
}

impl DiagramTransform {
    /// Creates a projection with `scale` pixels per meter.
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Diagram canvas size in pixels
    pub fn canvas_size(&self, boundary: &Boundary) -> (f64, f64) {
        (boundary.width * self.scale, boundary.depth * self.scale)
    }

    /// Converts a length in meters to diagram pixels
    pub fn length(&self, meters: f64) -> f64 {
        meters * self.scale
    }

    pub fn world_to_diagram(&self, point: FloorPoint, boundary: &Boundary) -> (f64, f64) {
        (
            (point.x + boundary.half_width()) * self.scale,
            (point.z + boundary.half_depth()) * self.scale,
        )
    }

    pub fn diagram_to_world(&self, pixel_x: f64, pixel_y: f64, boundary: &Boundary) -> FloorPoint {
        FloorPoint::new(
            pixel_x / self.scale - boundary.half_width(),
            pixel_y / self.scale - boundary.half_depth(),
        )
    }
}

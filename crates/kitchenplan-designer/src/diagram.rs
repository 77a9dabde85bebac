//! Top-down diagram.
//!
//! Projects a layout snapshot onto a 2D canvas of `width * scale` by
//! `depth * scale` pixels and resolves clicks on that canvas back to items.

use serde::Serialize;

use crate::layout_store::LayoutSnapshot;
use crate::model::{Dimensions, FixtureKind, ItemId, ItemKind};
use crate::viewport::{DiagramTransform, FloorPoint};

const DOOR_FILL: &str = "#FDE047";
const WINDOW_FILL: &str = "#93C5FD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagramShape {
    Item(ItemKind),
    Fixture(FixtureKind),
}

/// A rectangle on the diagram canvas.
///
/// `left`/`top`/`width`/`height` describe the unrotated rectangle; it is
/// rotated by `rotation` radians about its center, clockwise on screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub label: String,
    pub fill: String,
    pub shape: DiagramShape,
    pub item_id: Option<ItemId>,
    pub selected: bool,
}

impl DiagramRect {
    fn centered(
        transform: &DiagramTransform,
        snapshot: &LayoutSnapshot,
        x: f64,
        z: f64,
        dimensions: &Dimensions,
        yaw: f64,
    ) -> (f64, f64, f64, f64, f64) {
        let (cx, cy) = transform.world_to_diagram(FloorPoint::new(x, z), &snapshot.boundary);
        let width = transform.length(dimensions.width);
        let height = transform.length(dimensions.depth);
        // World yaw turns +X toward -Z, which is counter-clockwise on screen
        (cx - width / 2.0, cy - height / 2.0, width, height, -yaw)
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Point-in-rectangle test honouring the rotation
    pub fn contains(&self, pixel_x: f64, pixel_y: f64) -> bool {
        let (cx, cy) = self.center();
        let (dx, dy) = (pixel_x - cx, pixel_y - cy);
        let (sin, cos) = self.rotation.sin_cos();
        let local_x = dx * cos + dy * sin;
        let local_y = -dx * sin + dy * cos;
        local_x.abs() <= self.width / 2.0 && local_y.abs() <= self.height / 2.0
    }
}

/// Projected diagram, fixtures first then items in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub fixtures: Vec<DiagramRect>,
    pub items: Vec<DiagramRect>,
}

impl Diagram {
    pub fn project(snapshot: &LayoutSnapshot, transform: &DiagramTransform) -> Self {
        let (width, height) = transform.canvas_size(&snapshot.boundary);

        let fixtures = snapshot
            .fixtures
            .iter()
            .map(|fixture| {
                let (left, top, w, h, rotation) = DiagramRect::centered(
                    transform,
                    snapshot,
                    fixture.position.x,
                    fixture.position.z,
                    &fixture.dimensions,
                    fixture.rotation.y,
                );
                let fill = match fixture.kind {
                    FixtureKind::Door => DOOR_FILL,
                    FixtureKind::Window => WINDOW_FILL,
                };
                DiagramRect {
                    left,
                    top,
                    width: w,
                    height: h,
                    rotation,
                    label: fixture.kind.to_string(),
                    fill: fill.to_string(),
                    shape: DiagramShape::Fixture(fixture.kind),
                    item_id: None,
                    selected: false,
                }
            })
            .collect();

        let items = snapshot
            .items
            .iter()
            .map(|item| {
                let (left, top, w, h, rotation) = DiagramRect::centered(
                    transform,
                    snapshot,
                    item.position.x,
                    item.position.z,
                    &item.dimensions,
                    item.yaw(),
                );
                DiagramRect {
                    left,
                    top,
                    width: w,
                    height: h,
                    rotation,
                    label: item.display_name().to_string(),
                    fill: item.color.clone(),
                    shape: DiagramShape::Item(item.kind),
                    item_id: Some(item.id.clone()),
                    selected: snapshot.is_selected(&item.id),
                }
            })
            .collect();

        Self {
            width,
            height,
            scale: transform.scale(),
            fixtures,
            items,
        }
    }

    /// Topmost item under the pointer
    pub fn item_at(&self, pixel_x: f64, pixel_y: f64) -> Option<&ItemId> {
        self.items
            .iter()
            .rev()
            .find(|rect| rect.contains(pixel_x, pixel_y))
            .and_then(|rect| rect.item_id.as_ref())
    }
}

//! Layout session.
//!
//! [`LayoutSession`] is the controller hosts drive. It owns the layout
//! store together with the catalog, the asset provider, the drop viewport
//! and the dimension readouts, and exposes the interaction entry points:
//! catalog placement, drop placement, drag deltas, clicks in the 3D view
//! and in the diagram, and dimension derivation from linked models.

use nalgebra::Matrix4;
use std::sync::Arc;
use std::time::{Duration, Instant};

use kitchenplan_core::constants::READOUT_GRACE;
use kitchenplan_core::{EventBus, LayoutEvent, MeasurementSystem};

use crate::catalog::Catalog;
use crate::diagram::Diagram;
use crate::layout_store::{LayoutSnapshot, LayoutStore};
use crate::model::{Boundary, Fixture, ItemId, ItemKind, ItemUpdate, KitchenItem};
use crate::model3d::AssetProvider;
use crate::placement::{self, DragDelta, PlacementOptions};
use crate::readout::{readout_text, DimensionReadouts};
use crate::viewport::{DiagramTransform, Viewport};

/// What was dragged onto the 3D view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPayload {
    /// A catalog entry; size, color and model come from the definition
    CatalogKey(String),
    /// A bare item type with default size and color
    Kind(ItemKind),
}

/// Tunables for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub placement: PlacementOptions,
    pub diagram: DiagramTransform,
    pub readout_grace: Duration,
    pub measurement_system: MeasurementSystem,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            placement: PlacementOptions::default(),
            diagram: DiagramTransform::default(),
            readout_grace: READOUT_GRACE,
            measurement_system: MeasurementSystem::Metric,
        }
    }
}

/// Interactive layout controller.
pub struct LayoutSession {
    store: LayoutStore,
    catalog: Catalog,
    assets: Option<Arc<dyn AssetProvider>>,
    viewport: Viewport,
    readouts: DimensionReadouts,
    options: SessionOptions,
}

impl Default for LayoutSession {
    fn default() -> Self {
        Self::new(Boundary::default(), Catalog::builtin(), SessionOptions::default())
    }
}

impl std::fmt::Debug for LayoutSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutSession")
            .field("store", &self.store)
            .field("catalog_entries", &self.catalog.len())
            .field("has_assets", &self.assets.is_some())
            .field("viewport", &self.viewport)
            .field("options", &self.options)
            .finish()
    }
}

impl LayoutSession {
    pub fn new(boundary: Boundary, catalog: Catalog, options: SessionOptions) -> Self {
        Self::with_event_bus(boundary, catalog, options, EventBus::new())
    }

    pub fn with_event_bus(
        boundary: Boundary,
        catalog: Catalog,
        options: SessionOptions,
        events: EventBus,
    ) -> Self {
        Self {
            store: LayoutStore::with_event_bus(boundary, events),
            catalog,
            assets: None,
            viewport: Viewport::with_size(0.0, 0.0),
            readouts: DimensionReadouts::new(options.readout_grace),
            options,
        }
    }

    /// Attach the provider used to measure linked models
    pub fn with_assets(mut self, assets: Arc<dyn AssetProvider>) -> Self {
        self.assets = Some(assets);
        self
    }

    pub fn set_assets(&mut self, assets: Option<Arc<dyn AssetProvider>>) {
        self.assets = assets;
    }

    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn events(&self) -> &EventBus {
        self.store.events()
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        self.store.snapshot()
    }

    pub fn item(&self, id: &ItemId) -> Option<&KitchenItem> {
        self.store.item(id)
    }

    pub fn selected_item_id(&self) -> Option<&ItemId> {
        self.store.selected_item_id()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Update the 3D surface rectangle used to map drop points.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // Placement

    /// Places a catalog item at its default position.
    ///
    /// Unknown keys are logged and ignored.
    pub fn place_from_catalog(&mut self, key: &str) -> Option<ItemId> {
        let Some(definition) = self.catalog.definition(key) else {
            tracing::warn!("Unknown catalog item '{}'", key);
            return None;
        };

        let dimensions = definition.default_dimensions;
        let y = self.options.placement.height_for(definition.placement_class());
        let position = placement::catalog_position(&dimensions, self.store.boundary(), y);

        let mut item = KitchenItem::new(definition.kind, position, dimensions)
            .with_color(definition.color());
        item.model_ref = definition.model_ref.clone();
        item.label = definition.label.clone();

        self.insert(item)
    }

    /// Places an item where it was dropped on the 3D view.
    ///
    /// Ignored when the key is unknown or the viewport has no area.
    pub fn place_from_drop(
        &mut self,
        payload: &DropPayload,
        pixel_x: f64,
        pixel_y: f64,
    ) -> Option<ItemId> {
        let item = match payload {
            DropPayload::CatalogKey(key) => {
                let Some(definition) = self.catalog.definition(key) else {
                    tracing::warn!("Dropped unknown catalog item '{}'", key);
                    return None;
                };
                let mut item = KitchenItem::new(
                    definition.kind,
                    nalgebra::Point3::origin(),
                    definition.default_dimensions,
                )
                .with_color(definition.color());
                item.model_ref = definition.model_ref.clone();
                item.label = definition.label.clone();
                item
            }
            DropPayload::Kind(kind) => {
                KitchenItem::new(*kind, nalgebra::Point3::origin(), kind.drop_dimensions())
            }
        };

        let boundary = *self.store.boundary();
        let Some(point) = self.viewport.pixel_to_world(pixel_x, pixel_y, &boundary) else {
            tracing::warn!("Drop ignored, viewport has no area");
            return None;
        };

        let y = self.options.placement.height_for(item.kind.drop_placement());
        let position = placement::drop_position(point, &item.dimensions, &boundary, y);
        self.insert(KitchenItem { position, ..item })
    }

    fn insert(&mut self, item: KitchenItem) -> Option<ItemId> {
        let id = item.id.clone();
        if !self.store.add_item(item) {
            return None;
        }
        if self.store.item(&id).is_some_and(KitchenItem::needs_measurement) {
            self.resolve_dimensions(&id);
        }
        Some(id)
    }

    pub fn remove_item(&mut self, id: &ItemId) -> Option<KitchenItem> {
        let removed = self.store.remove_item(id)?;
        self.readouts.forget(id);
        Some(removed)
    }

    // Dragging

    /// Start a manipulation gesture at host time `now`; forces the readout on.
    pub fn begin_drag(&mut self, id: &ItemId, now: Instant) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        let was_visible = self.readouts.is_visible(id, now);
        self.readouts.begin_drag(id);
        if !was_visible {
            self.publish_readout(id, true);
        }
        true
    }

    /// Apply one manipulation step to the item's committed transform.
    pub fn apply_drag_delta(&mut self, id: &ItemId, delta: &DragDelta) -> bool {
        let Some(item) = self.store.item(id) else {
            return false;
        };
        let result = placement::apply_drag(item, self.store.boundary(), delta);
        self.store.update_item(
            id,
            ItemUpdate::new()
                .position(result.position)
                .rotation(result.rotation),
        )
    }

    /// Like [`LayoutSession::apply_drag_delta`] for a homogeneous delta
    /// matrix as produced by manipulation gizmos.
    pub fn apply_drag_matrix(&mut self, id: &ItemId, delta: &Matrix4<f64>) -> bool {
        self.apply_drag_delta(id, &DragDelta::from_matrix(delta))
    }

    /// Finish a gesture; the readout lingers for the grace period.
    pub fn end_drag(&mut self, id: &ItemId, now: Instant) {
        self.readouts.end_drag(id, now);
    }

    pub fn is_dragging(&self) -> bool {
        self.readouts.any_dragging()
    }

    // Selection

    /// Click on an item in the 3D view.
    ///
    /// Selects an unselected item and shows its readout; clicking the
    /// selected item clears both. Ignored while a drag is in progress.
    /// `now` is the host clock also passed to `end_drag` and `tick`.
    pub fn click_item(&mut self, id: &ItemId, now: Instant) -> Option<ItemId> {
        if self.readouts.any_dragging() {
            tracing::debug!("Click on {} ignored during drag", id);
            return self.store.selected_item_id().cloned();
        }
        if !self.store.contains(id) {
            return self.store.selected_item_id().cloned();
        }

        if self.store.is_selected(id) {
            self.store.set_selected_item(None);
            self.hide_readout(id, now);
            None
        } else {
            if let Some(previous) = self.store.selected_item_id().cloned() {
                self.hide_readout(&previous, now);
            }
            self.store.set_selected_item(Some(id.clone()));
            self.readouts.show(id);
            self.publish_readout(id, true);
            Some(id.clone())
        }
    }

    /// Click on the top-down diagram. Selects the topmost item under the
    /// pointer; empty space leaves the selection alone.
    pub fn click_diagram(&mut self, pixel_x: f64, pixel_y: f64) -> Option<ItemId> {
        let diagram = self.diagram();
        if let Some(id) = diagram.item_at(pixel_x, pixel_y) {
            self.store.set_selected_item(Some(id.clone()));
        }
        self.store.selected_item_id().cloned()
    }

    pub fn select(&mut self, id: Option<ItemId>) {
        self.store.set_selected_item(id);
    }

    pub fn deselect(&mut self) {
        self.store.set_selected_item(None);
    }

    // Dimensions

    /// Measure the item's linked model once and adopt its size.
    ///
    /// Returns `true` if the dimensions were updated. Items without a
    /// model, items already measured, and models that fail to load keep
    /// their current dimensions.
    pub fn resolve_dimensions(&mut self, id: &ItemId) -> bool {
        let Some(item) = self.store.item(id) else {
            return false;
        };
        if item.dimensions_resolved {
            return false;
        }
        let Some(reference) = item.model_ref.clone() else {
            return false;
        };
        let Some(assets) = self.assets.clone() else {
            return false;
        };

        match assets.measure(&reference) {
            Ok(dimensions) => {
                tracing::debug!("Measured {} for {}: {:?}", reference, id, dimensions);
                self.store.update_item(
                    id,
                    ItemUpdate::new()
                        .dimensions(dimensions)
                        .dimensions_resolved(true),
                )
            }
            Err(e) => {
                tracing::warn!("Keeping default dimensions for {}: {}", id, e);
                false
            }
        }
    }

    /// Measure every item with an unmeasured model; returns how many were
    /// updated.
    pub fn resolve_pending(&mut self) -> usize {
        let pending: Vec<ItemId> = self
            .store
            .items()
            .iter()
            .filter(|item| item.needs_measurement())
            .map(|item| item.id.clone())
            .collect();
        pending
            .iter()
            .filter(|id| self.resolve_dimensions(id))
            .count()
    }

    /// Link a different model; it is measured on the next resolve.
    pub fn set_model(&mut self, id: &ItemId, model_ref: Option<String>) -> bool {
        let updated = self.store.update_item(
            id,
            ItemUpdate::new()
                .model_ref(model_ref)
                .dimensions_resolved(false),
        );
        if updated {
            self.resolve_dimensions(id);
        }
        updated
    }

    // Room

    pub fn set_boundary(&mut self, boundary: Boundary) -> bool {
        self.store.set_boundary(boundary)
    }

    pub fn set_fixtures(&mut self, fixtures: Vec<Fixture>) {
        self.store.set_fixtures(fixtures);
    }

    // Readouts and views

    /// Expire lingering readouts; returns the ids that were hidden.
    pub fn tick(&mut self, now: Instant) -> Vec<ItemId> {
        let expired = self.readouts.expire(now);
        for id in &expired {
            self.publish_readout(id, false);
        }
        expired
    }

    pub fn readout_visible(&self, id: &ItemId, now: Instant) -> bool {
        self.readouts.is_visible(id, now)
    }

    pub fn readout_text(&self, id: &ItemId) -> Option<String> {
        self.store
            .item(id)
            .map(|item| readout_text(item, self.options.measurement_system))
    }

    pub fn diagram(&self) -> Diagram {
        Diagram::project(&self.store.snapshot(), &self.options.diagram)
    }

    fn hide_readout(&mut self, id: &ItemId, now: Instant) {
        let was_visible = self.readouts.is_visible(id, now);
        self.readouts.hide(id);
        if was_visible {
            self.publish_readout(id, false);
        }
    }

    fn publish_readout(&self, id: &ItemId, visible: bool) {
        self.store.notify(LayoutEvent::ReadoutChanged {
            item_id: id.to_string(),
            visible,
        });
    }
}

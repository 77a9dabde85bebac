//! Layout store.
//!
//! The single owner of the room boundary, fixtures, placed items and the
//! selection. All mutation goes through the operations here:
//! - `items`: add, update, remove
//! - `selection`: singleton selection
//! - `room`: boundary and fixture replacement
//!
//! Each mutation is applied synchronously and then published on the
//! store's [`EventBus`], so subscribed handlers observe the new state before
//! the call returns.

mod items;
mod room;
mod selection;

use kitchenplan_core::{EventBus, LayoutEvent};
use serde::Serialize;

use crate::model::{Boundary, Fixture, ItemId, KitchenItem};
use crate::selection_manager::SelectionManager;

/// Point-in-time copy of the layout, the data renderers draw from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub boundary: Boundary,
    pub fixtures: Vec<Fixture>,
    pub items: Vec<KitchenItem>,
    pub selected_item_id: Option<ItemId>,
}

impl LayoutSnapshot {
    pub fn item(&self, id: &ItemId) -> Option<&KitchenItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected_item_id.as_ref() == Some(id)
    }
}

/// Authoritative layout state.
#[derive(Debug)]
pub struct LayoutStore {
    boundary: Boundary,
    fixtures: Vec<Fixture>,
    /// Insertion order doubles as draw order
    items: Vec<KitchenItem>,
    selection: SelectionManager,
    events: EventBus,
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new(Boundary::default())
    }
}

impl LayoutStore {
    /// Creates an empty layout for the given room.
    pub fn new(boundary: Boundary) -> Self {
        Self::with_event_bus(boundary, EventBus::new())
    }

    /// Creates an empty layout publishing on a caller-configured bus.
    pub fn with_event_bus(boundary: Boundary, events: EventBus) -> Self {
        Self {
            boundary,
            fixtures: Vec::new(),
            items: Vec::new(),
            selection: SelectionManager::new(),
            events,
        }
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn items(&self) -> &[KitchenItem] {
        &self.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&KitchenItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.item(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The bus mutations are published on. Subscribe here to observe the
    /// layout.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            boundary: self.boundary,
            fixtures: self.fixtures.clone(),
            items: self.items.clone(),
            selected_item_id: self.selection.selected_id().cloned(),
        }
    }

    fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub(crate) fn notify(&self, event: LayoutEvent) {
        let delivered = self.events.publish(event);
        tracing::trace!("Layout event delivered to {} listeners", delivered);
    }
}

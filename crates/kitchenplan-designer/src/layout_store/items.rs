//! Item insertion, update and removal.

use kitchenplan_core::LayoutEvent;

use super::LayoutStore;
use crate::model::{ItemId, ItemUpdate, KitchenItem};

impl LayoutStore {
    /// Inserts a fully formed item.
    ///
    /// The caller supplies an in-bounds position and a fresh id. An item
    /// whose id is already present is ignored; returns whether it was added.
    pub fn add_item(&mut self, item: KitchenItem) -> bool {
        if self.contains(&item.id) {
            tracing::warn!("Ignoring item with duplicate id {}", item.id);
            return false;
        }

        let id = item.id.clone();
        tracing::debug!(
            "Adding {} {} at ({:.3}, {:.3}, {:.3})",
            item.kind,
            id,
            item.position.x,
            item.position.y,
            item.position.z
        );
        self.items.push(item);
        self.notify(LayoutEvent::ItemAdded {
            item_id: id.to_string(),
        });
        true
    }

    /// Writes the fields present in `update` into the addressed item.
    ///
    /// Unknown ids are ignored. When the position or dimensions change the
    /// footprint is re-clamped to the room. Returns whether an item was
    /// found.
    pub fn update_item(&mut self, id: &ItemId, update: ItemUpdate) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::debug!("Update for unknown item {} ignored", id);
            return false;
        };

        let reclamp = update.position.is_some() || update.dimensions.is_some();
        let boundary = self.boundary;
        let item = &mut self.items[index];
        update.apply_to(item);
        if reclamp {
            item.position = boundary.clamp_footprint(item.position, &item.dimensions);
        }

        self.notify(LayoutEvent::ItemUpdated {
            item_id: id.to_string(),
        });
        true
    }

    /// Deletes an item, clearing the selection if it pointed at it.
    pub fn remove_item(&mut self, id: &ItemId) -> Option<KitchenItem> {
        let index = self.index_of(id)?;
        let removed = self.items.remove(index);
        tracing::debug!("Removed {} {}", removed.kind, id);

        self.notify(LayoutEvent::ItemRemoved {
            item_id: id.to_string(),
        });
        if self.selection.on_item_removed(id) {
            self.notify(LayoutEvent::SelectionChanged { item_id: None });
        }
        Some(removed)
    }
}

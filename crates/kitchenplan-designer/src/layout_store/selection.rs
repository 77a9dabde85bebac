//! Singleton selection.

use kitchenplan_core::LayoutEvent;

use super::LayoutStore;
use crate::model::ItemId;

impl LayoutStore {
    pub fn selected_item_id(&self) -> Option<&ItemId> {
        self.selection.selected_id()
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selection.is_selected(id)
    }

    /// Sets or clears the selection.
    ///
    /// The id is not checked against the item list. Setting the current
    /// value again publishes nothing.
    pub fn set_selected_item(&mut self, id: Option<ItemId>) {
        if !self.selection.set_selected_id(id) {
            return;
        }
        let item_id = self.selection.selected_id().map(ItemId::to_string);
        tracing::debug!("Selection set to {:?}", item_id);
        self.notify(LayoutEvent::SelectionChanged { item_id });
    }
}

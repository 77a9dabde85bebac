use crate::model::ItemId;

/// Tracks the single selected item.
///
/// The manager holds at most one id and does not validate it against the
/// item list. The layout store clears it when the referenced item is
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected_id: Option<ItemId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use kitchenplan_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the selected item id, if any.
    pub fn selected_id(&self) -> Option<&ItemId> {
        self.selected_id.as_ref()
    }

    /// Replaces the selection.
    ///
    /// Returns `true` when the selection actually changed.
    pub fn set_selected_id(&mut self, id: Option<ItemId>) -> bool {
        if self.selected_id == id {
            return false;
        }
        self.selected_id = id;
        true
    }

    /// Clears the selection, returning `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected_id.take().is_some()
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected_id.as_ref() == Some(id)
    }

    /// Selects `id` unless it is already selected, in which case the
    /// selection is cleared. Returns the new selection.
    pub fn toggle(&mut self, id: &ItemId) -> Option<&ItemId> {
        if self.is_selected(id) {
            self.selected_id = None;
        } else {
            self.selected_id = Some(id.clone());
        }
        self.selected_id.as_ref()
    }

    /// Drops the selection if it references `id`.
    ///
    /// Returns `true` when the selection was cleared.
    pub fn on_item_removed(&mut self, id: &ItemId) -> bool {
        if self.is_selected(id) {
            self.selected_id = None;
            true
        } else {
            false
        }
    }
}

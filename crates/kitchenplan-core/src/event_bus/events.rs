//! Event type definitions for the event bus.
//!
//! Every mutation of the layout store publishes one of these events after
//! the mutation has been applied. Events carry identifiers only; observers
//! read the current state from the store snapshot.

use serde::{Deserialize, Serialize};

/// Root event enum for all layout events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// An item was inserted into the layout.
    ItemAdded {
        /// Id of the new item.
        item_id: String,
    },
    /// An existing item's fields were replaced.
    ItemUpdated {
        /// Id of the updated item.
        item_id: String,
    },
    /// An item was deleted from the layout.
    ItemRemoved {
        /// Id of the removed item.
        item_id: String,
    },
    /// The singleton selection changed.
    SelectionChanged {
        /// Newly selected item id, `None` when cleared.
        item_id: Option<String>,
    },
    /// The room boundary was replaced.
    BoundaryChanged {
        /// Room width in meters.
        width: f64,
        /// Room depth in meters.
        depth: f64,
        /// Room height in meters.
        height: f64,
    },
    /// The fixture list was replaced.
    FixturesChanged {
        /// Number of fixtures after the change.
        count: usize,
    },
    /// A dimension readout was shown or hidden.
    ReadoutChanged {
        /// Item whose readout changed.
        item_id: String,
        /// Whether the readout is now visible.
        visible: bool,
    },
}

impl LayoutEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            LayoutEvent::ItemAdded { .. }
            | LayoutEvent::ItemUpdated { .. }
            | LayoutEvent::ItemRemoved { .. } => EventCategory::Items,
            LayoutEvent::SelectionChanged { .. } => EventCategory::Selection,
            LayoutEvent::BoundaryChanged { .. } | LayoutEvent::FixturesChanged { .. } => {
                EventCategory::Room
            }
            LayoutEvent::ReadoutChanged { .. } => EventCategory::Readout,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            LayoutEvent::ItemAdded { item_id } => format!("Item {} added", item_id),
            LayoutEvent::ItemUpdated { item_id } => format!("Item {} updated", item_id),
            LayoutEvent::ItemRemoved { item_id } => format!("Item {} removed", item_id),
            LayoutEvent::SelectionChanged { item_id: Some(id) } => format!("Selected {}", id),
            LayoutEvent::SelectionChanged { item_id: None } => "Selection cleared".to_string(),
            LayoutEvent::BoundaryChanged {
                width,
                depth,
                height,
            } => format!("Room resized to {}x{}x{}", width, depth, height),
            LayoutEvent::FixturesChanged { count } => format!("{} fixtures", count),
            LayoutEvent::ReadoutChanged { item_id, visible } => {
                let state = if *visible { "shown" } else { "hidden" };
                format!("Readout for {} {}", item_id, state)
            }
        }
    }

    /// Id of the item this event concerns, if any
    pub fn item_id(&self) -> Option<&str> {
        match self {
            LayoutEvent::ItemAdded { item_id }
            | LayoutEvent::ItemUpdated { item_id }
            | LayoutEvent::ItemRemoved { item_id }
            | LayoutEvent::ReadoutChanged { item_id, .. } => Some(item_id),
            LayoutEvent::SelectionChanged { item_id } => item_id.as_deref(),
            LayoutEvent::BoundaryChanged { .. } | LayoutEvent::FixturesChanged { .. } => None,
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Item insertion, update and removal.
    Items,
    /// Selection changes.
    Selection,
    /// Boundary and fixture changes.
    Room,
    /// Dimension readout visibility.
    Readout,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Items => write!(f, "Items"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Room => write!(f, "Room"),
            EventCategory::Readout => write!(f, "Readout"),
        }
    }
}

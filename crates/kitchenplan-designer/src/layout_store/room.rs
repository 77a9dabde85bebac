//! Boundary and fixture replacement.

use kitchenplan_core::LayoutEvent;

use super::LayoutStore;
use crate::model::{Boundary, Fixture};

impl LayoutStore {
    /// Replaces the room boundary.
    ///
    /// Every item is re-clamped into the new room; each one that moves
    /// publishes `ItemUpdated` ahead of the `BoundaryChanged` event. A
    /// boundary with a non-positive or non-finite extent is ignored.
    pub fn set_boundary(&mut self, boundary: Boundary) -> bool {
        if !boundary.is_valid() {
            tracing::warn!("Ignoring invalid boundary {:?}", boundary);
            return false;
        }

        self.boundary = boundary;

        let mut moved = Vec::new();
        for item in &mut self.items {
            let clamped = boundary.clamp_footprint(item.position, &item.dimensions);
            if clamped != item.position {
                item.position = clamped;
                moved.push(item.id.to_string());
            }
        }

        tracing::info!(
            "Room set to {}m x {}m x {}m ({} items moved)",
            boundary.width,
            boundary.depth,
            boundary.height,
            moved.len()
        );

        for item_id in moved {
            self.notify(LayoutEvent::ItemUpdated { item_id });
        }
        self.notify(LayoutEvent::BoundaryChanged {
            width: boundary.width,
            depth: boundary.depth,
            height: boundary.height,
        });
        true
    }

    /// Replaces the fixture list. Items are not affected.
    pub fn set_fixtures(&mut self, fixtures: Vec<Fixture>) {
        let count = fixtures.len();
        self.fixtures = fixtures;
        tracing::debug!("Fixtures replaced ({})", count);
        self.notify(LayoutEvent::FixturesChanged { count });
    }
}

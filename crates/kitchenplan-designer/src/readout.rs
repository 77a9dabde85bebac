//! Dimension readouts.
//!
//! Each item has a transient label showing its type and size. A click on
//! an item toggles it together with the selection. While a drag is in
//! progress the readout is forced on, and it lingers for a grace period
//! after the drag ends. Time is passed in explicitly so hosts can drive it
//! from their own clock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use kitchenplan_core::constants::READOUT_GRACE;
use kitchenplan_core::{format_length, MeasurementSystem};

use crate::model::{ItemId, KitchenItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ReadoutState {
    shown: bool,
    dragging: bool,
    hide_at: Option<Instant>,
}

impl ReadoutState {
    fn is_visible(&self, now: Instant) -> bool {
        self.dragging || (self.shown && self.hide_at.map_or(true, |deadline| now < deadline))
    }
}

/// Per-item readout visibility.
#[derive(Debug, Clone)]
pub struct DimensionReadouts {
    states: HashMap<ItemId, ReadoutState>,
    grace: Duration,
}

impl Default for DimensionReadouts {
    fn default() -> Self {
        Self::new(READOUT_GRACE)
    }
}

impl DimensionReadouts {
    pub fn new(grace: Duration) -> Self {
        Self {
            states: HashMap::new(),
            grace,
        }
    }

    pub fn grace(&self) -> Duration {
        self.grace
    }

    /// Show the readout until explicitly hidden
    pub fn show(&mut self, id: &ItemId) {
        let state = self.states.entry(id.clone()).or_default();
        state.shown = true;
        state.hide_at = None;
    }

    pub fn hide(&mut self, id: &ItemId) {
        if let Some(state) = self.states.get_mut(id) {
            state.shown = false;
            state.hide_at = None;
        }
    }

    /// Force the readout on for the duration of a drag
    pub fn begin_drag(&mut self, id: &ItemId) {
        let state = self.states.entry(id.clone()).or_default();
        state.dragging = true;
        state.shown = true;
        state.hide_at = None;
    }

    /// End a drag; the readout stays up until `now + grace`.
    ///
    /// A later drag of the same item resets the deadline.
    pub fn end_drag(&mut self, id: &ItemId, now: Instant) {
        if let Some(state) = self.states.get_mut(id) {
            state.dragging = false;
            state.hide_at = Some(now + self.grace);
        }
    }

    pub fn is_dragging(&self, id: &ItemId) -> bool {
        self.states.get(id).is_some_and(|s| s.dragging)
    }

    /// Any item currently being dragged
    pub fn any_dragging(&self) -> bool {
        self.states.values().any(|s| s.dragging)
    }

    pub fn is_visible(&self, id: &ItemId, now: Instant) -> bool {
        self.states.get(id).is_some_and(|s| s.is_visible(now))
    }

    /// Items whose readout is visible at `now`
    pub fn visible_items(&self, now: Instant) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self
            .states
            .iter()
            .filter(|(_, s)| s.is_visible(now))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Hides every readout whose grace deadline has passed and returns
    /// their ids.
    pub fn expire(&mut self, now: Instant) -> Vec<ItemId> {
        let mut expired = Vec::new();
        for (id, state) in self.states.iter_mut() {
            if state.dragging {
                continue;
            }
            if let Some(deadline) = state.hide_at {
                if now >= deadline {
                    state.shown = false;
                    state.hide_at = None;
                    expired.push(id.clone());
                }
            }
        }
        expired.sort();
        expired
    }

    /// Drop all state for a removed item
    pub fn forget(&mut self, id: &ItemId) {
        self.states.remove(id);
    }
}

/// Readout label: `"{type} ({w} × {h} × {d})"`.
pub fn readout_text(item: &KitchenItem, system: MeasurementSystem) -> String {
    format!(
        "{} ({} × {} × {})",
        item.kind,
        format_length(item.dimensions.width, system),
        format_length(item.dimensions.height, system),
        format_length(item.dimensions.depth, system)
    )
}

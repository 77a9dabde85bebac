//! # Event Bus Module
//!
//! Publish/subscribe notifications for layout state changes.
//!
//! ## Overview
//!
//! The layout store owns one bus and publishes a [`LayoutEvent`] after
//! every mutation:
//! - Renderers subscribe with a filter and re-read the store snapshot
//! - Handlers run synchronously on the publishing thread
//! - Async consumers can poll a broadcast receiver instead
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kitchenplan_core::event_bus::{EventBus, EventCategory, EventFilter, LayoutEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Selection]),
//!     |event| println!("{}", event.description()),
//! );
//!
//! bus.publish(LayoutEvent::SelectionChanged { item_id: None });
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;

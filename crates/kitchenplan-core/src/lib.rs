//! # KitchenPlan Core
//!
//! Core types and utilities shared by the KitchenPlan crates.
//! Provides the error taxonomy, placement constants, length formatting,
//! the layout event bus and shared-state type aliases.

pub mod constants;
pub mod error;
pub mod event_bus;
pub mod types;
pub mod units;

pub use error::{AssetError, CatalogError, Error, Result};

// Re-export event bus for convenience
pub use event_bus::{EventBus, EventCategory, EventFilter, LayoutEvent, SubscriptionId};

pub use types::{shared, thread_safe, Shared, ThreadSafe};

pub use units::{format_length, MeasurementSystem};

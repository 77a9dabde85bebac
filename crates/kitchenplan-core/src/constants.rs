//! Placement and presentation constants.
//!
//! All lengths are in meters.

use std::time::Duration;

/// Height at which counter-mounted (elevated) items rest.
pub const COUNTER_HEIGHT: f64 = 0.9;

/// Floor level for floor-standing items.
pub const FLOOR_HEIGHT: f64 = 0.0;

/// Default pixels per meter in the top-down diagram.
pub const DIAGRAM_SCALE: f64 = 40.0;

/// How long the dimension readout stays visible after a drag ends.
pub const READOUT_GRACE: Duration = Duration::from_millis(2000);

/// Default room width (X extent).
pub const DEFAULT_ROOM_WIDTH: f64 = 4.0;

/// Default room depth (Z extent).
pub const DEFAULT_ROOM_DEPTH: f64 = 3.0;

/// Default room height.
pub const DEFAULT_ROOM_HEIGHT: f64 = 2.4;

/// Tolerance used when comparing lengths in meters.
pub const LENGTH_EPSILON: f64 = 1e-9;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::item::Dimensions;

/// Kind of wall opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureKind {
    Door,
    Window,
}

impl std::fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureKind::Door => write!(f, "door"),
            FixtureKind::Window => write!(f, "window"),
        }
    }
}

/// A door or window set into a wall.
///
/// Fixtures are configured with the room and never move. They take no part
/// in selection or placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub kind: FixtureKind,
    pub position: Point3<f64>,
    pub rotation: Vector3<f64>,
    pub dimensions: Dimensions,
}

impl Fixture {
    pub fn new(kind: FixtureKind, position: Point3<f64>, dimensions: Dimensions) -> Self {
        Self {
            kind,
            position,
            rotation: Vector3::zeros(),
            dimensions,
        }
    }

    /// Set the fixture rotation (radians)
    pub fn with_rotation(mut self, rotation: Vector3<f64>) -> Self {
        self.rotation = rotation;
        self
    }
}

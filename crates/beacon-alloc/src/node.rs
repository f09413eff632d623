//! Positioned entities that receive channels.

use crate::geo::Coordinate;

/// An entity with a unique identity and a fixed position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    id: String,
    position: Coordinate,
}

impl Node {
    /// Create a node at the given latitude and longitude (degrees).
    pub fn new(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            position: Coordinate::new(lat, lon),
        }
    }

    /// Create a node at an existing coordinate.
    pub fn at(id: impl Into<String>, position: Coordinate) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }

    /// The node's identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The node's position.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.position.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.position.lon
    }

    /// Great-circle distance to another node, in kilometers.
    pub fn distance_km(&self, other: &Node) -> f64 {
        self.position.distance_km(&other.position)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.position)
    }
}

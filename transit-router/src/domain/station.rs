//! Station types.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A named, located stop in the network.
///
/// Station identity is the lowercased name: two stations whose names differ
/// only in case are the same vertex, whatever their coordinates say.
///
/// # Examples
///
/// ```
/// use transit_router::domain::{Coordinates, Station};
///
/// let a = Station::new("Châtelet", Coordinates::new(48.8584, 2.3470));
/// let b = Station::new("CHÂTELET", Coordinates::default());
/// assert_eq!(a, b);
/// assert_eq!(a.key(), "châtelet");
/// ```
#[derive(Debug, Clone)]
pub struct Station {
    name: String,
    coordinates: Coordinates,
}

impl Station {
    /// Create a new station.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }

    /// Returns the display name, as first supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the station's position.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Returns the normalized lookup key for this station.
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }

    /// Returns true if the name is blank, which no network will accept.
    pub fn is_unnamed(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Normalize a station name for index lookup.
///
/// Only case is folded. Accent stripping and fuzzy matching belong to
/// whatever builds the query string.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

//! Stop records and their handles.

use std::fmt;

use super::Coordinates;

/// Stable handle to a stop record inside the catalogue.
///
/// Handles index an append-only arena, so they stay valid for the lifetime
/// of the catalogue that issued them. They are only meaningful for that
/// catalogue.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub(crate) usize);

impl StopId {
    /// Returns the arena index behind this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

/// A named physical location with coordinates.
///
/// Stops are immutable once added. Re-adding a name creates a new record;
/// the old one stays in the arena but is no longer reachable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    name: String,
    coordinates: Coordinates,
}

impl Stop {
    /// Creates a stop record.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }

    /// Returns the stop name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stop coordinates.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

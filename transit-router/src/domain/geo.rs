//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for great-circle distances, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinates {
    /// Creates coordinates from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance between two points, in meters.
///
/// Uses the spherical law of cosines. Identical coordinates yield exactly
/// zero rather than whatever rounding `acos` produces near 1.0.
///
/// # Examples
///
/// ```
/// use transit_router::domain::{Coordinates, compute_distance};
///
/// let a = Coordinates::new(55.611087, 37.20829);
/// assert_eq!(compute_distance(a, a), 0.0);
///
/// let b = Coordinates::new(55.595884, 37.209755);
/// let d = compute_distance(a, b);
/// assert!((d - 1692.99).abs() < 1.0);
/// ```
pub fn compute_distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }

    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let dlng = (from.lng - to.lng).abs().to_radians();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlng.cos();

    // Rounding can push nearly-equal points just past 1.0
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coords() -> impl Strategy<Value = Coordinates> {
        (-89.0f64..89.0, -179.0f64..179.0).prop_map(|(lat, lng)| Coordinates::new(lat, lng))
    }

    proptest! {
        /// Distances are finite and never negative
        #[test]
        fn non_negative(a in coords(), b in coords()) {
            let d = compute_distance(a, b);
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
        }

        /// No two points are further apart than half the circumference
        #[test]
        fn bounded_by_half_circumference(a in coords(), b in coords()) {
            prop_assert!(compute_distance(a, b) <= std::f64::consts::PI * EARTH_RADIUS_M + 1e-6);
        }
    }
}

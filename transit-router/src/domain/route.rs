//! Route ("bus") records.

use std::fmt;

use super::StopId;

/// Stable handle to a route record inside the catalogue.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub(crate) usize);

impl RouteId {
    /// Returns the arena index behind this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

/// A named, ordered sequence of stops.
///
/// A round-trip route lists its stops so that the last one is the origin
/// again. Any other route is ridden forward and then back, which
/// [`Route::traversal`] spells out explicitly.
///
/// # Invariants
///
/// - At least one stop
/// - Every stop handle resolved to a live stop when the route was added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: String,
    stops: Vec<StopId>,
    is_roundtrip: bool,
}

impl Route {
    pub(crate) fn new(name: String, stops: Vec<StopId>, is_roundtrip: bool) -> Self {
        debug_assert!(!stops.is_empty());
        Self {
            name,
            stops,
            is_roundtrip,
        }
    }

    /// Returns the route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stops as declared.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    /// Returns true if the declared stops already end at the origin.
    pub fn is_roundtrip(&self) -> bool {
        self.is_roundtrip
    }

    /// Returns the full sequence of stops a vehicle visits.
    ///
    /// Round trips visit the declared stops as-is. Other routes visit them
    /// forward and then backward, without repeating the turnaround stop,
    /// so `[A, B, C]` becomes `[A, B, C, B, A]`.
    pub fn traversal(&self) -> Vec<StopId> {
        let mut sequence = self.stops.clone();
        if !self.is_roundtrip {
            sequence.extend(self.stops.iter().rev().skip(1));
        }
        sequence
    }

    /// Number of stops visited along the full traversal.
    pub fn traversal_len(&self) -> usize {
        if self.is_roundtrip {
            self.stops.len()
        } else {
            self.stops.len() * 2 - 1
        }
    }

    pub(crate) fn replace_stop(&mut self, old: StopId, new: StopId) {
        for stop in &mut self.stops {
            if *stop == old {
                *stop = new;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<StopId> {
        raw.iter().map(|&i| StopId(i)).collect()
    }

    #[test]
    fn roundtrip_traversal_is_declared_order() {
        let route = Route::new("1".into(), ids(&[0, 1, 2, 0]), true);
        assert_eq!(route.traversal(), ids(&[0, 1, 2, 0]));
        assert_eq!(route.traversal_len(), 4);
    }

    #[test]
    fn linear_traversal_goes_there_and_back() {
        let route = Route::new("2".into(), ids(&[0, 1, 2]), false);
        assert_eq!(route.traversal(), ids(&[0, 1, 2, 1, 0]));
        assert_eq!(route.traversal_len(), 5);
    }

    #[test]
    fn single_stop_linear_route() {
        let route = Route::new("3".into(), ids(&[4]), false);
        assert_eq!(route.traversal(), ids(&[4]));
        assert_eq!(route.traversal_len(), 1);
    }

    #[test]
    fn replace_stop_rewrites_every_occurrence() {
        let mut route = Route::new("1".into(), ids(&[0, 1, 0]), true);
        route.replace_stop(StopId(0), StopId(9));
        assert_eq!(route.stops(), ids(&[9, 1, 9]).as_slice());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// traversal_len agrees with the materialized traversal
        #[test]
        fn traversal_len_matches(raw in prop::collection::vec(0usize..20, 1..12), roundtrip in any::<bool>()) {
            let route = Route::new("p".into(), raw.iter().map(|&i| StopId(i)).collect(), roundtrip);
            prop_assert_eq!(route.traversal().len(), route.traversal_len());
        }

        /// A linear traversal is a palindrome
        #[test]
        fn linear_traversal_is_palindrome(raw in prop::collection::vec(0usize..20, 1..12)) {
            let route = Route::new("p".into(), raw.iter().map(|&i| StopId(i)).collect(), false);
            let forward = route.traversal();
            let mut backward = forward.clone();
            backward.reverse();
            prop_assert_eq!(forward, backward);
        }
    }
}

//! Route statistics computed from the catalogue.

use std::collections::HashSet;

use crate::domain::{Route, RouteStat, compute_distance};

use super::TransportCatalogue;

impl TransportCatalogue {
    /// Statistics for a named route, or `None` if the route is unknown.
    pub fn route_stat(&self, name: &str) -> Option<RouteStat> {
        self.route(name).map(|route| self.stat_for(route))
    }

    /// Statistics for a named route, zeroed if the route is unknown.
    pub fn route_stat_or_default(&self, name: &str) -> RouteStat {
        self.route_stat(name).unwrap_or_default()
    }

    /// Statistics for a route record.
    ///
    /// Both lengths follow the full traversal, so a linear route counts its
    /// way back: the great-circle length doubles and the road length uses
    /// the reverse-direction entries.
    pub fn stat_for(&self, route: &Route) -> RouteStat {
        let traversal = route.traversal();

        let unique_stop_count = route.stops().iter().collect::<HashSet<_>>().len();

        let mut geo_length = 0.0;
        let mut route_length: u64 = 0;
        for pair in traversal.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            geo_length += compute_distance(
                self.stop_record(from).coordinates(),
                self.stop_record(to).coordinates(),
            );
            route_length += u64::from(self.distance(from, to));
        }

        RouteStat {
            stop_count: traversal.len(),
            unique_stop_count,
            geo_length,
            route_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;

    fn abc() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", Coordinates::new(0.0, 0.0));
        catalogue.add_stop("B", Coordinates::new(0.0, 0.01));
        catalogue.add_stop("C", Coordinates::new(0.0, 0.02));
        catalogue.set_distance("A", "B", 100).unwrap();
        catalogue.set_distance("B", "C", 200).unwrap();
        catalogue
    }

    #[test]
    fn roundtrip_counts() {
        let mut catalogue = abc();
        catalogue.add_route("1", &["A", "B", "C", "A"], true).unwrap();

        let stat = catalogue.route_stat("1").unwrap();
        assert_eq!(stat.stop_count, 4);
        assert_eq!(stat.unique_stop_count, 3);
        // C -> A has no entry in either direction
        assert_eq!(stat.route_length, 300);
    }

    #[test]
    fn linear_route_goes_there_and_back() {
        let mut catalogue = abc();
        catalogue.set_distance("C", "B", 250).unwrap();
        catalogue.add_route("2", &["A", "B", "C"], false).unwrap();

        let stat = catalogue.route_stat("2").unwrap();
        assert_eq!(stat.stop_count, 5);
        assert_eq!(stat.unique_stop_count, 3);
        // A->B + B->C + C->B + B->A (fallback to A->B)
        assert_eq!(stat.route_length, 100 + 200 + 250 + 100);

        let one_way = compute_distance(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 0.02));
        // Four short hops and one long hop round differently
        assert!((stat.geo_length - 2.0 * one_way).abs() < 1e-3);
        assert!((stat.curvature() - 650.0 / stat.geo_length).abs() < 1e-12);
    }

    #[test]
    fn unknown_route() {
        let catalogue = abc();
        assert!(catalogue.route_stat("404").is_none());
        assert_eq!(catalogue.route_stat_or_default("404"), RouteStat::default());
    }

    #[test]
    fn single_stop_route() {
        let mut catalogue = abc();
        catalogue.add_route("loop", &["B"], true).unwrap();

        let stat = catalogue.route_stat("loop").unwrap();
        assert_eq!(stat.stop_count, 1);
        assert_eq!(stat.unique_stop_count, 1);
        assert_eq!(stat.route_length, 0);
        assert_eq!(stat.curvature(), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Coordinates;
    use proptest::prelude::*;

    const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

    fn catalogue() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        for (i, name) in NAMES.iter().enumerate() {
            catalogue.add_stop(*name, Coordinates::new(0.001 * i as f64, 0.01 * i as f64));
        }
        catalogue
    }

    proptest! {
        /// Linear routes visit 2N - 1 stops
        #[test]
        fn linear_stop_count(picks in prop::collection::vec(0usize..6, 1..10)) {
            let mut catalogue = catalogue();
            let stops: Vec<&str> = picks.iter().map(|&i| NAMES[i]).collect();
            catalogue.add_route("p", &stops, false).unwrap();

            let stat = catalogue.route_stat("p").unwrap();
            prop_assert_eq!(stat.stop_count, 2 * stops.len() - 1);
        }

        /// Unique stop count never exceeds the declared stop count
        #[test]
        fn unique_bounded(picks in prop::collection::vec(0usize..6, 1..10), roundtrip in any::<bool>()) {
            let mut catalogue = catalogue();
            let stops: Vec<&str> = picks.iter().map(|&i| NAMES[i]).collect();
            catalogue.add_route("p", &stops, roundtrip).unwrap();

            let stat = catalogue.route_stat("p").unwrap();
            prop_assert!(stat.unique_stop_count >= 1);
            prop_assert!(stat.unique_stop_count <= stops.len());
        }
    }
}

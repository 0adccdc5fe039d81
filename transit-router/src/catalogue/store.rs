//! Catalogue storage and lookups.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use tracing::{debug, warn};

use crate::domain::{CatalogueError, Coordinates, Route, RouteId, Stop, StopId};

/// Owner of every stop, route and distance record.
///
/// Populated once by a loader, then read-only. Lookups by name go through
/// ordered indexes, which also give the stable name-ordered enumeration
/// renderers rely on.
#[derive(Debug, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    routes: Vec<Route>,

    stop_index: BTreeMap<String, StopId>,
    route_index: BTreeMap<String, RouteId>,

    /// Route names touching each stop, keyed by stop name.
    routes_for_stop: HashMap<String, BTreeSet<String>>,

    /// Directional road distances in meters.
    /// (A, B) and (B, A) are independent entries.
    distances: HashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop, or replace the stop with the same name.
    ///
    /// Replacing a stop redirects every live route and distance entry to
    /// the new record, so nothing keeps pointing at the old one.
    pub fn add_stop(&mut self, name: impl Into<String>, coordinates: Coordinates) -> StopId {
        let name = name.into();
        let id = StopId(self.stops.len());
        self.stops.push(Stop::new(name.clone(), coordinates));

        match self.stop_index.insert(name.clone(), id) {
            Some(old) => {
                debug!(stop = %name, "replacing stop record");
                self.redirect_stop(old, id);
            }
            None => {
                self.routes_for_stop.insert(name, BTreeSet::new());
            }
        }

        id
    }

    /// Add a route, or replace the route with the same name.
    ///
    /// Every stop name must already be in the catalogue. On error nothing
    /// is recorded.
    ///
    /// # Errors
    ///
    /// - [`CatalogueError::EmptyRoute`] if `stop_names` is empty
    /// - [`CatalogueError::UnknownStop`] for the first name not in the catalogue
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<RouteId, CatalogueError> {
        let name = name.into();

        if stop_names.is_empty() {
            warn!(route = %name, "rejecting route without stops");
            return Err(CatalogueError::EmptyRoute(name));
        }

        let stops = stop_names
            .iter()
            .map(|stop| {
                let stop: &str = stop.as_ref();
                self.stop_id(stop).ok_or_else(|| {
                    warn!(route = %name, stop, "route references unknown stop");
                    CatalogueError::UnknownStop(stop.to_string())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(old) = self.route_index.get(&name).copied() {
            debug!(route = %name, "replacing route record");
            self.forget_memberships(old);
        }

        let id = RouteId(self.routes.len());
        for stop in &stops {
            let stop_name = self.stops[stop.0].name();
            self.routes_for_stop
                .entry(stop_name.to_string())
                .or_default()
                .insert(name.clone());
        }
        self.routes.push(Route::new(name.clone(), stops, is_roundtrip));
        self.route_index.insert(name, id);

        Ok(id)
    }

    /// Record the road distance from one stop to another, in meters.
    ///
    /// The entry is directional; it does not touch the reverse pair.
    /// A stop is always zero meters from itself, so self pairs are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::UnknownStop`] if either stop is missing.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: u32) -> Result<(), CatalogueError> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;
        if from_id == to_id {
            debug!(stop = from, meters, "ignoring distance from a stop to itself");
            return Ok(());
        }
        self.distances.insert((from_id, to_id), meters);
        Ok(())
    }

    /// Road distance between two stops, in meters.
    ///
    /// Falls back to the reverse entry when the forward one is unset, and
    /// to zero when neither is.
    pub fn distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    /// Road distance between two stops given by name.
    ///
    /// Returns `None` if either stop is unknown.
    pub fn distance_between(&self, from: &str, to: &str) -> Option<u32> {
        Some(self.distance(self.stop_id(from)?, self.stop_id(to)?))
    }

    /// Look up a stop by name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id.0])
    }

    /// Look up a stop handle by name.
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// Returns the stop record behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by a different catalogue.
    pub fn stop_record(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// Look up a route by name.
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.route_index.get(name).map(|id| &self.routes[id.0])
    }

    /// Look up a route by name, reporting unknown names as an error.
    pub fn try_route(&self, name: &str) -> Result<&Route, CatalogueError> {
        self.route(name)
            .ok_or_else(|| CatalogueError::UnknownRoute(name.to_string()))
    }

    /// Route names serving a stop, sorted.
    ///
    /// Returns an empty set for a known stop without routes, and `None`
    /// only when the stop itself is unknown.
    pub fn routes_for_stop(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.routes_for_stop.get(name)
    }

    /// Live stops in name order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> + '_ {
        self.stop_index.values().map(|&id| (id, &self.stops[id.0]))
    }

    /// Live routes in name order.
    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &Route)> + '_ {
        self.route_index.values().map(|&id| (id, &self.routes[id.0]))
    }

    /// Number of live stops.
    pub fn stop_count(&self) -> usize {
        self.stop_index.len()
    }

    /// Number of live routes.
    pub fn route_count(&self) -> usize {
        self.route_index.len()
    }

    /// Returns true if no stops have been added.
    pub fn is_empty(&self) -> bool {
        self.stop_index.is_empty()
    }

    fn require_stop(&self, name: &str) -> Result<StopId, CatalogueError> {
        self.stop_id(name).ok_or_else(|| {
            warn!(stop = name, "distance references unknown stop");
            CatalogueError::UnknownStop(name.to_string())
        })
    }

    /// Point live routes and distance entries at a replacement stop record.
    fn redirect_stop(&mut self, old: StopId, new: StopId) {
        for &route_id in self.route_index.values() {
            self.routes[route_id.0].replace_stop(old, new);
        }

        let stale: Vec<_> = self
            .distances
            .keys()
            .filter(|(from, to)| *from == old || *to == old)
            .copied()
            .collect();

        for key in stale {
            if let Some(meters) = self.distances.remove(&key) {
                let swap = |id: StopId| if id == old { new } else { id };
                self.distances.insert((swap(key.0), swap(key.1)), meters);
            }
        }
    }

    /// Remove a route's name from the membership sets of its stops.
    fn forget_memberships(&mut self, route_id: RouteId) {
        let route = &self.routes[route_id.0];
        let touched: HashSet<StopId> = route.stops().iter().copied().collect();

        for stop in touched {
            if let Some(set) = self.routes_for_stop.get_mut(self.stops[stop.0].name()) {
                set.remove(route.name());
            }
        }
    }
}

//! The load -> build -> query lifecycle.

use std::collections::BTreeSet;

use tracing::info;

use crate::catalogue::TransportCatalogue;
use crate::domain::{CatalogueError, Coordinates, RouteId, RouteStat, StopId};

use super::builder::{BuildError, TransitGraph};
use super::config::{ConfigError, RoutingSettings};
use super::itinerary::Itinerary;
use super::query::RouteQueryService;

/// Error from driving the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// The engine was used out of the load -> build -> query order.
    ///
    /// This is a bug in the calling code, not a data problem.
    #[error("invalid build state: {0}")]
    InvalidBuildState(&'static str),

    /// The catalogue rejected a record
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// Routing settings failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Graph construction failed
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Where the engine is in its lifecycle.
#[derive(Debug)]
enum BuildState {
    /// Nothing loaded yet
    Empty,
    /// At least one stop loaded; still accepting records
    Loaded,
    /// Graph built; read-only from here on
    Built(TransitGraph),
}

/// Catalogue plus routing graph, with the lifecycle enforced.
///
/// Records are loaded first, then the graph is built exactly once, then
/// queries run. Loading after the build, building twice, building an
/// empty catalogue and routing before the build all fail with
/// [`EngineError::InvalidBuildState`]. Descriptive queries about routes
/// and stops work in any state.
///
/// # Examples
///
/// ```
/// use transit_router::domain::Coordinates;
/// use transit_router::router::{RoutingSettings, TransitEngine};
///
/// let mut engine = TransitEngine::new();
/// engine.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap();
/// engine.add_stop("B", Coordinates::new(0.0, 0.01)).unwrap();
/// engine.set_distance("A", "B", 1000).unwrap();
/// engine.add_route("14", &["A", "B"], false).unwrap();
///
/// engine.configure(RoutingSettings::new(2, 30.0).unwrap()).unwrap();
/// engine.build().unwrap();
///
/// let itinerary = engine.route("A", "B").unwrap().unwrap();
/// assert!((itinerary.total_time() - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct TransitEngine {
    catalogue: TransportCatalogue,
    settings: Option<RoutingSettings>,
    state: BuildState,
}

impl Default for TransitEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitEngine {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self {
            catalogue: TransportCatalogue::new(),
            settings: None,
            state: BuildState::Empty,
        }
    }

    /// Add or replace a stop.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<StopId, EngineError> {
        self.ensure_loading()?;
        let id = self.catalogue.add_stop(name, coordinates);
        self.state = BuildState::Loaded;
        Ok(id)
    }

    /// Add or replace a route over stops that are already loaded.
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<RouteId, EngineError> {
        self.ensure_loading()?;
        Ok(self.catalogue.add_route(name, stop_names, is_roundtrip)?)
    }

    /// Record a directional road distance between loaded stops.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: u32) -> Result<(), EngineError> {
        self.ensure_loading()?;
        Ok(self.catalogue.set_distance(from, to, meters)?)
    }

    /// Set the routing settings used by [`TransitEngine::build`].
    pub fn configure(&mut self, settings: RoutingSettings) -> Result<(), EngineError> {
        self.ensure_loading()?;
        settings.validate()?;
        self.settings = Some(settings);
        Ok(())
    }

    /// Build the routing graph. Must be called exactly once, after loading.
    pub fn build(&mut self) -> Result<(), EngineError> {
        match self.state {
            BuildState::Empty => return Err(EngineError::InvalidBuildState("nothing loaded")),
            BuildState::Built(_) => return Err(EngineError::InvalidBuildState("graph already built")),
            BuildState::Loaded => {}
        }
        let settings = self
            .settings
            .ok_or(EngineError::InvalidBuildState("routing settings not configured"))?;

        let graph = TransitGraph::build(&self.catalogue, &settings)?;
        info!(
            stops = self.catalogue.stop_count(),
            routes = self.catalogue.route_count(),
            "routing graph ready"
        );
        self.state = BuildState::Built(graph);
        Ok(())
    }

    /// Returns true once the graph has been built.
    pub fn is_built(&self) -> bool {
        matches!(self.state, BuildState::Built(_))
    }

    /// Returns the catalogue for read-only access.
    pub fn catalogue(&self) -> &TransportCatalogue {
        &self.catalogue
    }

    /// Returns the routing settings, if configured.
    pub fn settings(&self) -> Option<&RoutingSettings> {
        self.settings.as_ref()
    }

    /// Statistics for a named route.
    pub fn route_stat(&self, name: &str) -> Option<RouteStat> {
        self.catalogue.route_stat(name)
    }

    /// Sorted route names serving a stop; `None` if the stop is unknown.
    pub fn routes_for_stop(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.catalogue.routes_for_stop(name)
    }

    /// A query service over the built graph.
    pub fn query_service(&self) -> Result<RouteQueryService<'_>, EngineError> {
        match &self.state {
            BuildState::Built(graph) => Ok(RouteQueryService::new(&self.catalogue, graph)),
            _ => Err(EngineError::InvalidBuildState("graph not built")),
        }
    }

    /// Fastest itinerary between two stops.
    ///
    /// `Ok(None)` means an unknown stop or no connection. `Err` only
    /// signals that the graph has not been built.
    pub fn route(&self, from: &str, to: &str) -> Result<Option<Itinerary>, EngineError> {
        Ok(self.query_service()?.route(from, to))
    }

    fn ensure_loading(&self) -> Result<(), EngineError> {
        match self.state {
            BuildState::Built(_) => Err(EngineError::InvalidBuildState(
                "catalogue is read-only after the graph is built",
            )),
            BuildState::Empty | BuildState::Loaded => Ok(()),
        }
    }
}

//! Route queries against a built graph.

use tracing::trace;

use crate::catalogue::TransportCatalogue;
use crate::graph::Router;

use super::builder::{StopVertices, TransitGraph};
use super::itinerary::{Itinerary, Segment};

/// Why a route query found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Stop name is not in the catalogue (or was added after the build)
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// Both stops exist but no sequence of rides connects them
    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },
}

/// Answers fastest-itinerary queries.
///
/// Borrows the catalogue and graph read-only, so any number of services
/// can query the same graph at once.
#[derive(Debug, Clone, Copy)]
pub struct RouteQueryService<'a> {
    catalogue: &'a TransportCatalogue,
    graph: &'a TransitGraph,
}

impl<'a> RouteQueryService<'a> {
    /// Create a query service over a catalogue and the graph built from it.
    pub fn new(catalogue: &'a TransportCatalogue, graph: &'a TransitGraph) -> Self {
        Self { catalogue, graph }
    }

    /// Fastest itinerary between two stops, or `None` if there is none.
    pub fn route(&self, from: &str, to: &str) -> Option<Itinerary> {
        self.find(from, to).ok()
    }

    /// Fastest itinerary between two stops, with the reason on failure.
    ///
    /// The search runs from the origin's wait vertex to the destination's
    /// wait vertex, so every itinerary starts by waiting at the origin.
    /// Asking for a stop to itself yields that single wait.
    pub fn find(&self, from: &str, to: &str) -> Result<Itinerary, QueryError> {
        let origin = self.resolve(from)?;
        let destination = self.resolve(to)?;

        if origin == destination {
            let wait = self.graph.segment_at(origin.wait_edge).clone();
            return Ok(Itinerary::new(wait.time(), vec![wait]));
        }

        let route = Router::new(self.graph.graph())
            .build_route(origin.wait, destination.wait)
            .ok_or_else(|| QueryError::Unreachable {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        let segments: Vec<Segment> = route
            .edges
            .iter()
            .map(|&id| self.graph.segment_at(id).clone())
            .collect();

        trace!(
            from,
            to,
            total_time = route.weight,
            segments = segments.len(),
            "route found"
        );

        Ok(Itinerary::new(route.weight, segments))
    }

    fn resolve(&self, name: &str) -> Result<StopVertices, QueryError> {
        self.catalogue
            .stop_id(name)
            .and_then(|id| self.graph.vertices(id))
            .ok_or_else(|| QueryError::UnknownStop(name.to_string()))
    }
}

//! Turns a finished catalogue into the routing graph.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::catalogue::TransportCatalogue;
use crate::domain::{Route, StopId};
use crate::graph::{DirectedWeightedGraph, Edge, EdgeId, GraphError, VertexId};

use super::config::{ConfigError, RoutingSettings};
use super::itinerary::Segment;

/// Error from graph construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// Settings failed validation
    #[error("invalid routing settings: {0}")]
    Config(#[from] ConfigError),

    /// An edge could not be added
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
}

/// The two graph vertices of a stop, plus the wait edge joining them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertices {
    /// Entry point: standing at the stop
    pub wait: VertexId,
    /// Exit point: on board, about to ride
    pub board: VertexId,
    /// The wait -> board edge
    pub wait_edge: EdgeId,
}

/// Routing graph built once from a catalogue.
///
/// Immutable after construction. Every edge has a matching [`Segment`] in
/// a side table indexed by edge id, which is how search results become
/// itineraries.
#[derive(Debug, Clone)]
pub struct TransitGraph {
    graph: DirectedWeightedGraph<f64>,
    vertices: HashMap<StopId, StopVertices>,
    segments: Vec<Segment>,
    settings: RoutingSettings,
}

impl TransitGraph {
    /// Build the graph for every live stop and route in `catalogue`.
    ///
    /// Stops get vertices `2k` (wait) and `2k + 1` (board) in name order.
    /// Each route contributes one ride edge per ordered pair of positions
    /// `i < j` along its traversal, weighted by the cumulative road
    /// distance between them at the configured speed.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] if the settings do not validate.
    pub fn build(
        catalogue: &TransportCatalogue,
        settings: &RoutingSettings,
    ) -> Result<Self, BuildError> {
        settings.validate()?;

        let mut transit = TransitGraph {
            graph: DirectedWeightedGraph::new(catalogue.stop_count() * 2),
            vertices: HashMap::with_capacity(catalogue.stop_count()),
            segments: Vec::new(),
            settings: *settings,
        };

        transit.add_stops(catalogue)?;
        for (_, route) in catalogue.routes() {
            transit.add_route(catalogue, route)?;
        }

        debug!(
            stops = catalogue.stop_count(),
            routes = catalogue.route_count(),
            vertices = transit.graph.vertex_count(),
            edges = transit.graph.edge_count(),
            "built transit graph"
        );

        Ok(transit)
    }

    /// Returns the underlying weighted graph.
    pub fn graph(&self) -> &DirectedWeightedGraph<f64> {
        &self.graph
    }

    /// Returns the vertices of a stop, if it was in the catalogue at build time.
    pub fn vertices(&self, stop: StopId) -> Option<StopVertices> {
        self.vertices.get(&stop).copied()
    }

    /// Returns the itinerary segment an edge stands for.
    pub fn segment(&self, edge: EdgeId) -> Option<&Segment> {
        self.segments.get(edge)
    }

    /// Segment for an edge id produced by this graph.
    pub(crate) fn segment_at(&self, edge: EdgeId) -> &Segment {
        &self.segments[edge]
    }

    /// Returns the settings the graph was built with.
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    fn add_stops(&mut self, catalogue: &TransportCatalogue) -> Result<(), GraphError> {
        let wait_minutes = self.settings.wait_minutes();

        for (k, (id, stop)) in catalogue.stops().enumerate() {
            let wait = 2 * k;
            let board = wait + 1;

            let wait_edge = self.add_edge(
                wait,
                board,
                Segment::wait(stop.name(), wait_minutes),
            )?;
            self.vertices.insert(
                id,
                StopVertices {
                    wait,
                    board,
                    wait_edge,
                },
            );
        }

        Ok(())
    }

    fn add_route(&mut self, catalogue: &TransportCatalogue, route: &Route) -> Result<(), GraphError> {
        let route_name: Arc<str> = Arc::from(route.name());
        let traversal = route.traversal();

        let vertices = traversal
            .iter()
            .map(|stop| {
                self.vertices(*stop)
                    .ok_or(GraphError::VertexOutOfRange {
                        vertex: stop.index(),
                        vertex_count: self.graph.vertex_count(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for i in 0..traversal.len() {
            let mut meters: u64 = 0;
            for j in (i + 1)..traversal.len() {
                meters += u64::from(catalogue.distance(traversal[j - 1], traversal[j]));
                let time = self.settings.ride_minutes(meters);

                self.add_edge(
                    vertices[i].board,
                    vertices[j].wait,
                    Segment::ride(route_name.clone(), j - i, time),
                )?;
            }
        }

        Ok(())
    }

    fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        segment: Segment,
    ) -> Result<EdgeId, GraphError> {
        let id = self.graph.add_edge(Edge {
            from,
            to,
            weight: segment.time(),
        })?;
        debug_assert_eq!(id, self.segments.len());
        self.segments.push(segment);
        Ok(id)
    }
}

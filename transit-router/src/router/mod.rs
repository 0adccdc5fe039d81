//! Transit routing on top of the generic graph.
//!
//! The catalogue is turned into a digraph with two vertices per stop: a
//! wait vertex ("standing at the stop") and a board vertex ("on a bus").
//! A wait edge joins them and costs the configured wait time; ride edges
//! go from a board vertex to the wait vertex of every later stop on the
//! same route. Shortest paths between wait vertices are then itineraries.

mod builder;
mod config;
mod engine;
mod itinerary;
mod query;


pub use builder::{BuildError, StopVertices, TransitGraph};
pub use config::{ConfigError, RoutingSettings};
pub use engine::{EngineError, TransitEngine};
pub use itinerary::{Itinerary, Ride, Segment, Wait};
pub use query::{QueryError, RouteQueryService};

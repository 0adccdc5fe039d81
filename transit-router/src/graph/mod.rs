//! Generic weighted digraph and shortest-path search.
//!
//! Nothing in here knows about stops or routes. Vertices and edges are
//! dense integer ids handed out in insertion order; the transit layer keeps
//! its own side tables to give them meaning.

mod digraph;
mod dijkstra;
mod weight;

pub use digraph::{DirectedWeightedGraph, Edge, EdgeId, GraphError, VertexId};
pub use dijkstra::{RouteInfo, Router};
pub use weight::Weight;

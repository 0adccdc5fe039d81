//! Adjacency-list digraph with weighted edges.

use super::Weight;

/// Dense vertex identifier, `0..vertex_count`.
pub type VertexId = usize;

/// Dense edge identifier in insertion order.
pub type EdgeId = usize;

/// Error from graph construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Edge endpoint does not exist
    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Edge weight is negative or NaN
    #[error("edge weight must be non-negative")]
    InvalidWeight,
}

/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
}

/// Directed graph with a fixed vertex set and non-negative edge weights.
///
/// Parallel edges and self-loops are allowed. Outgoing edges of a vertex
/// are kept in insertion order, which makes search tie-breaking
/// deterministic.
#[derive(Debug, Clone)]
pub struct DirectedWeightedGraph<W> {
    edges: Vec<Edge<W>>,
    incidence: Vec<Vec<EdgeId>>,
}

impl<W: Weight> DirectedWeightedGraph<W> {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge and return its id.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexOutOfRange`] if either endpoint is unknown
    /// - [`GraphError::InvalidWeight`] if the weight is negative or NaN
    pub fn add_edge(&mut self, edge: Edge<W>) -> Result<EdgeId, GraphError> {
        let vertex_count = self.vertex_count();
        for vertex in [edge.from, edge.to] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        if !edge.weight.is_valid() {
            return Err(GraphError::InvalidWeight);
        }

        let id = self.edges.len();
        self.edges.push(edge);
        self.incidence[edge.from].push(id);
        Ok(id)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<W>> {
        self.edges.get(id)
    }

    /// Ids of the edges leaving `vertex`, in insertion order.
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence
            .get(vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}

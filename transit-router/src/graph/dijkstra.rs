//! Label-setting shortest-path search (Dijkstra).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{DirectedWeightedGraph, EdgeId, VertexId, Weight};

/// A shortest path: its total weight and edges in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo<W> {
    pub weight: W,
    pub edges: Vec<EdgeId>,
}

/// Heap entry. Ordered so the `BinaryHeap` pops the cheapest entry first,
/// and among equal costs the one pushed earliest.
#[derive(Debug, Clone, Copy)]
struct State<W> {
    cost: W,
    seq: u64,
    vertex: VertexId,
}

impl<W: Weight> Ord for State<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flipped on both keys to turn the max-heap into a min-heap.
        // Weights are never NaN, so partial_cmp always succeeds.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<W: Weight> PartialOrd for State<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for State<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for State<W> {}

/// Shortest-path queries over a borrowed graph.
///
/// Each query runs a fresh search from the source and stops as soon as the
/// target is settled, so a router is cheap to create and holds no mutable
/// state. Any number of queries can run concurrently against one graph.
///
/// Ties between equal-weight paths are broken deterministically: edges are
/// relaxed in insertion order and a label is only replaced by a strictly
/// cheaper one.
#[derive(Debug, Clone, Copy)]
pub struct Router<'g, W> {
    graph: &'g DirectedWeightedGraph<W>,
}

impl<'g, W: Weight> Router<'g, W> {
    /// Create a router over `graph`.
    pub fn new(graph: &'g DirectedWeightedGraph<W>) -> Self {
        Self { graph }
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &'g DirectedWeightedGraph<W> {
        self.graph
    }

    /// Find the cheapest path from `from` to `to`.
    ///
    /// Returns `None` if either vertex is out of range or `to` cannot be
    /// reached. A query from a vertex to itself is the empty path with
    /// zero weight.
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<RouteInfo<W>> {
        let vertex_count = self.graph.vertex_count();
        if from >= vertex_count || to >= vertex_count {
            return None;
        }
        if from == to {
            return Some(RouteInfo {
                weight: W::zero(),
                edges: Vec::new(),
            });
        }

        let mut dist: Vec<Option<W>> = vec![None; vertex_count];
        let mut prev_edge: Vec<Option<EdgeId>> = vec![None; vertex_count];
        let mut settled = vec![false; vertex_count];
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;

        dist[from] = Some(W::zero());
        heap.push(State {
            cost: W::zero(),
            seq,
            vertex: from,
        });

        while let Some(State { cost, vertex, .. }) = heap.pop() {
            if settled[vertex] {
                continue;
            }
            settled[vertex] = true;

            if vertex == to {
                break;
            }

            for &edge_id in self.graph.incident_edges(vertex) {
                let Some(edge) = self.graph.edge(edge_id) else {
                    continue;
                };
                if settled[edge.to] {
                    continue;
                }

                let candidate = cost + edge.weight;
                let improves = match dist[edge.to] {
                    Some(current) => candidate < current,
                    None => true,
                };
                if improves {
                    dist[edge.to] = Some(candidate);
                    prev_edge[edge.to] = Some(edge_id);
                    seq += 1;
                    heap.push(State {
                        cost: candidate,
                        seq,
                        vertex: edge.to,
                    });
                }
            }
        }

        let weight = dist[to]?;
        let edges = self.unwind(from, to, &prev_edge)?;
        Some(RouteInfo { weight, edges })
    }

    /// Walk predecessor edges back from `to` to `from`.
    fn unwind(
        &self,
        from: VertexId,
        to: VertexId,
        prev_edge: &[Option<EdgeId>],
    ) -> Option<Vec<EdgeId>> {
        let mut edges = Vec::new();
        let mut vertex = to;
        while vertex != from {
            let edge_id = prev_edge[vertex]?;
            edges.push(edge_id);
            vertex = self.graph.edge(edge_id)?.from;
        }
        edges.reverse();
        Some(edges)
    }
}

//! Core data types for garden adjacency graphs.

use serde::{Deserialize, Serialize};

use crate::errors::GardenError;

/// Vertex ID type alias for clarity.
///
/// A garden is identified solely by its zero-based index; the set of valid
/// vertices is implicitly `{0, .., num_vertices - 1}` and is redefined
/// whenever the vertex count changes.
pub type VertexId = usize;

/// Undirected connection between two distinct gardens.
///
/// Stored in canonical orientation (smaller index first) so that equality
/// and deduplication are independent of entry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
}

impl Edge {
    /// Creates a canonical edge between two distinct vertices.
    ///
    /// Self-loops are rejected here, at the boundary; they never reach the
    /// coloring engine.
    pub fn new(a: VertexId, b: VertexId) -> Result<Self, GardenError> {
        if a == b {
            return Err(GardenError::validation(format!(
                "Self-loop edge ({}, {}): endpoints must be distinct",
                a, b
            )));
        }
        if a < b {
            Ok(Self { a, b })
        } else {
            Ok(Self { a: b, b: a })
        }
    }

    /// Smaller endpoint.
    pub fn a(&self) -> VertexId {
        self.a
    }

    /// Larger endpoint.
    pub fn b(&self) -> VertexId {
        self.b
    }

    /// Both endpoints, smaller first.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }
}

/// Insertion-ordered sequence of unique edges.
///
/// The entry order is preserved for display; for coloring purposes the list
/// behaves as a set (duplicates have no effect beyond the first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Creates an empty edge list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an edge unless an equal one was already recorded.
    ///
    /// Returns `true` when the edge was added.
    pub fn push(&mut self, edge: Edge) -> bool {
        if self.edges.contains(&edge) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    /// Removes all edges.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Number of recorded edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edges are recorded.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates edges in entry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Edges in entry order.
    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Garden adjacency graph.
///
/// The adjacency structure is a derived view: it is rebuilt from the edge
/// sequence for every coloring run and never mutated independently of the
/// edges that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Number of vertices in the graph
    pub num_vertices: usize,

    /// Number of distinct edges recorded in the adjacency structure
    pub num_edges: usize,

    /// Adjacency list representation: vertex -> sorted distinct neighbors
    pub adjacency: Vec<Vec<VertexId>>,
}

impl Graph {
    /// Creates a new empty graph with the specified number of vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            num_edges: 0,
            adjacency: vec![Vec::new(); num_vertices],
        }
    }

    /// Builds the adjacency view from an edge sequence.
    ///
    /// Edges referencing a vertex outside `[0, num_vertices)` are skipped
    /// rather than rejected: the vertex count can shrink after edges were
    /// recorded against a larger one, and stale edges must degrade
    /// gracefully. Duplicate neighbors are collapsed.
    pub fn from_edges<'a, I>(num_vertices: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut adjacency = vec![Vec::new(); num_vertices];

        for edge in edges {
            let (u, v) = edge.endpoints();
            if u >= num_vertices || v >= num_vertices {
                log::warn!(
                    "Skipping stale edge ({}, {}): out of range for {} vertices",
                    u,
                    v,
                    num_vertices
                );
                continue;
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }

        // Collapse duplicate edges from the input sequence
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }

        let num_edges = adjacency.iter().map(|n| n.len()).sum::<usize>() / 2;

        Self {
            num_vertices,
            num_edges,
            adjacency,
        }
    }

    /// Adds an undirected edge between two vertices.
    ///
    /// Self-loops and out-of-range endpoints are silently ignored, matching
    /// the tolerance of [`Graph::from_edges`]. Callers feeding edges one at
    /// a time are responsible for not adding the same edge twice.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        if u < self.num_vertices && v < self.num_vertices && u != v {
            self.adjacency[u].push(v);
            self.adjacency[v].push(u);
            self.num_edges += 1;
        }
    }

    /// Returns the degree of a vertex.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency[vertex].len()
    }

    /// Largest vertex degree in the graph.
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).max().unwrap_or(0)
    }

    /// Graph density: |E| / (|V| * (|V| - 1) / 2)
    pub fn density(&self) -> f64 {
        if self.num_vertices <= 1 {
            return 0.0;
        }
        (2.0 * self.num_edges as f64) / (self.num_vertices * (self.num_vertices - 1)) as f64
    }
}

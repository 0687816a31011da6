use crate::error::{Error, Result};

/// Stable index of a vertex within the graph's vertex array.
pub type NodeId = usize;

/// Weighted, directed connection between two vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
}

/// Adjacency-list graph used by the pathfinding algorithms.
///
/// Vertices are identified by their position in the list. Construction
/// validates every edge target and weight, so the search loop never has to
/// re-check either.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `len` vertices and no edges.
    pub fn with_vertices(len: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); len],
        }
    }

    /// Build a graph from a prepared adjacency list, validating every edge.
    pub fn from_adjacency(adjacency: Vec<Vec<Edge>>) -> Result<Self> {
        let len = adjacency.len();
        for (source, edges) in adjacency.iter().enumerate() {
            for edge in edges {
                validate_edge(source, edge, len)?;
            }
        }
        Ok(Self { adjacency })
    }

    /// Add a directed edge from `from` to `to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<()> {
        self.check_node(from)?;
        let edge = Edge { target: to, weight };
        validate_edge(from, &edge, self.len())?;
        self.adjacency[from].push(edge);
        Ok(())
    }

    /// Add directed edges with the same weight in both directions.
    pub fn add_undirected(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<()> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Return the outgoing edges of a vertex.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// `true` when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Validate that `id` names a vertex of this graph.
    pub fn check_node(&self, id: NodeId) -> Result<()> {
        if id < self.len() {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange {
                id,
                len: self.len(),
            })
        }
    }
}

fn validate_edge(source: NodeId, edge: &Edge, len: usize) -> Result<()> {
    if edge.target >= len {
        return Err(Error::NodeOutOfRange {
            id: edge.target,
            len,
        });
    }
    if !edge.weight.is_finite() || edge.weight < 0.0 {
        return Err(Error::InvalidEdgeWeight {
            from: source,
            to: edge.target,
            weight: edge.weight,
        });
    }
    Ok(())
}

/// Precomputed estimate of the remaining cost from each vertex to the target,
/// aligned by vertex id.
#[derive(Debug, Clone)]
pub struct Heuristics {
    values: Vec<f64>,
}

impl Heuristics {
    /// Validate and wrap a table of per-vertex estimates. Values must be
    /// non-negative and finite.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        for (id, &value) in values.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidHeuristic { id, value });
            }
        }
        Ok(Self { values })
    }

    /// An all-zero table, which degrades A* to Dijkstra's algorithm.
    pub fn zeroed(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Check that the table covers exactly the graph's vertices.
    pub fn check_alignment(&self, graph: &Graph) -> Result<()> {
        if self.values.len() == graph.len() {
            Ok(())
        } else {
            Err(Error::HeuristicLengthMismatch {
                expected: graph.len(),
                actual: self.values.len(),
            })
        }
    }

    /// Estimate for one vertex.
    pub fn get(&self, id: NodeId) -> f64 {
        self.values[id]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

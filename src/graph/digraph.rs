use std::fmt;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::graph::edge::DirectedEdge;
use crate::{Error, Result};

/// An edge-weighted digraph of vertices 0..V-1, implemented with adjacency lists
///
/// The vertex count is fixed at construction. Edges are appended one at a
/// time and never removed; parallel edges and self-loops are permitted.
/// Cloning produces a deep copy that preserves adjacency order.
#[derive(Debug, Clone)]
pub struct EdgeWeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// adj[v] = outgoing edges of vertex v, in insertion order
    adj: Vec<Vec<DirectedEdge<W>>>,

    /// indegree[v] = number of edges whose head is v
    indegree: Vec<usize>,

    /// Total number of edges added so far
    edge_count: usize,
}

impl<W> EdgeWeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an empty digraph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        EdgeWeightedDigraph {
            adj: vec![Vec::new(); vertices],
            indegree: vec![0; vertices],
            edge_count: 0,
        }
    }

    /// Returns the number of vertices in the digraph
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of edges in the digraph
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v >= self.adj.len() {
            return Err(Error::InvalidVertex(v));
        }
        Ok(())
    }

    /// Adds the directed edge `e` to the digraph
    ///
    /// Both endpoints must be in `[0, V)`; nothing is recorded otherwise.
    pub fn add_edge(&mut self, e: DirectedEdge<W>) -> Result<()> {
        self.validate_vertex(e.from())?;
        self.validate_vertex(e.to())?;
        self.indegree[e.to()] += 1;
        self.adj[e.from()].push(e);
        self.edge_count += 1;
        Ok(())
    }

    /// Returns an iterator over the edges incident from vertex `v`, in the
    /// order they were added
    pub fn adj<'a>(&'a self, v: usize) -> Result<impl Iterator<Item = &'a DirectedEdge<W>>> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].iter())
    }

    /// Returns the number of edges incident from vertex `v`
    pub fn outdegree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].len())
    }

    /// Returns the number of edges incident to vertex `v`
    pub fn indegree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.indegree[v])
    }

    /// Returns an iterator over every edge in the digraph: vertex 0's
    /// outgoing edges first, then vertex 1's, and so on
    pub fn edges<'a>(&'a self) -> impl Iterator<Item = &'a DirectedEdge<W>> {
        self.adj.iter().flatten()
    }
}

impl<W> fmt::Display for EdgeWeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy + fmt::Display,
{
    /// Renders the vertex and edge counts followed by one adjacency line per vertex
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count(), self.edge_count())?;
        for (v, edges) in self.adj.iter().enumerate() {
            write!(f, "{}: ", v)?;
            for e in edges {
                write!(f, "{}  ", e)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

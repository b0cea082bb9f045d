use std::fmt;
use std::fmt::Debug;

use num_traits::{Float, Zero};

/// A weighted edge from one vertex to another in a digraph
///
/// Edges are immutable value types. They carry no lifecycle of their own and
/// are copied freely between the digraph that owns them and query results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge<W>
where
    W: Float + Zero + Debug + Copy,
{
    from: usize,
    to: usize,
    weight: W,
}

impl<W> DirectedEdge<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a directed edge `from -> to` with the given weight
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        DirectedEdge { from, to, weight }
    }

    /// Returns the tail vertex of the edge
    pub fn from(&self) -> usize {
        self.from
    }

    /// Returns the head vertex of the edge
    pub fn to(&self) -> usize {
        self.to
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> W {
        self.weight
    }
}

impl<W> fmt::Display for DirectedEdge<W>
where
    W: Float + Zero + Debug + Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}

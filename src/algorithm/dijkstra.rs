use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::data_structures::IndexMinPQ;
use crate::graph::digraph::EdgeWeightedDigraph;
use crate::graph::edge::DirectedEdge;
use crate::{Error, Result};

/// A shortest-path tree from a single source, computed with Dijkstra's algorithm
///
/// The tree is computed once in [`DijkstraSP::new`] and is immutable
/// afterwards; the digraph is borrowed only for the duration of the
/// computation. All edge weights must be non-negative. A vertex that the
/// source cannot reach keeps an infinite distance and no predecessor edge.
#[derive(Debug, Clone)]
pub struct DijkstraSP<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// dist_to[v] = weight of the shortest known source -> v path
    dist_to: Vec<W>,

    /// edge_to[v] = last edge on the shortest source -> v path
    edge_to: Vec<Option<DirectedEdge<W>>>,

    source: usize,
}

impl<W> DijkstraSP<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Computes the shortest-path tree from `source` to every vertex of `graph`
    ///
    /// Fails before any distance is computed if some edge weight is negative
    /// or the source is out of range.
    pub fn new(graph: &EdgeWeightedDigraph<W>, source: usize) -> Result<Self> {
        for e in graph.edges() {
            if e.weight() < W::zero() {
                return Err(Error::NegativeWeight {
                    from: e.from(),
                    to: e.to(),
                });
            }
        }

        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidVertex(source));
        }

        let mut sp = DijkstraSP {
            dist_to: vec![W::infinity(); n],
            edge_to: vec![None; n],
            source,
        };
        sp.dist_to[source] = W::zero();

        // Settle vertices in order of their distance from the source
        let mut pq = IndexMinPQ::new(n);
        pq.insert(source, sp.dist_to[source])?;
        while !pq.is_empty() {
            let v = pq.del_min()?;
            for e in graph.adj(v)? {
                sp.relax(e, &mut pq)?;
            }
        }

        Ok(sp)
    }

    /// Relax edge `e`, re-prioritizing its head vertex if the path improves
    fn relax(&mut self, e: &DirectedEdge<W>, pq: &mut IndexMinPQ<W>) -> Result<()> {
        let (v, w) = (e.from(), e.to());
        let candidate = self.dist_to[v] + e.weight();
        if candidate < self.dist_to[w] {
            self.dist_to[w] = candidate;
            self.edge_to[w] = Some(*e);
            if pq.contains(w)? {
                pq.decrease_key(w, candidate)?;
            } else {
                pq.insert(w, candidate)?;
            }
        }
        Ok(())
    }

    /// Returns the source vertex the tree was computed from
    pub fn source(&self) -> usize {
        self.source
    }

    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v >= self.dist_to.len() {
            return Err(Error::InvalidVertex(v));
        }
        Ok(())
    }

    /// Returns the length of the shortest path from the source to `v`,
    /// infinite if there is no such path
    pub fn dist_to(&self, v: usize) -> Result<W> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v])
    }

    /// Returns true if some path leads from the source to `v`
    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v] < W::infinity())
    }

    /// Returns the edges of a shortest path from the source to `v` in path
    /// order, or `None` if `v` is unreachable
    ///
    /// The path to the source itself is the empty sequence.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        self.validate_vertex(v)?;
        if self.dist_to[v] == W::infinity() {
            return Ok(None);
        }
        let mut path = Vec::new();
        let mut cursor = self.edge_to[v];
        while let Some(e) = cursor {
            path.push(e);
            cursor = self.edge_to[e.from()];
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Verifies the optimality conditions of the computed tree against `graph`
    ///
    /// Checks that no edge weight is negative, that distances and
    /// predecessor edges are consistent at and off the source, that every
    /// edge is relaxed, and that every tree edge is tight. A violation is
    /// reported through `log::error!` and makes the check return false; it
    /// indicates a bug in the relaxation logic, not bad caller input.
    pub fn check_optimality(&self, graph: &EdgeWeightedDigraph<W>) -> bool {
        for e in graph.edges() {
            if e.weight() < W::zero() {
                log::error!("negative weight on edge {} -> {}", e.from(), e.to());
                return false;
            }
        }

        if self.dist_to[self.source] != W::zero() || self.edge_to[self.source].is_some() {
            log::error!("distance and predecessor of source {} are inconsistent", self.source);
            return false;
        }
        for v in 0..self.dist_to.len() {
            if v == self.source {
                continue;
            }
            if self.edge_to[v].is_none() && self.dist_to[v] != W::infinity() {
                log::error!("vertex {} has a finite distance but no predecessor edge", v);
                return false;
            }
        }

        // every edge v -> w satisfies dist_to[w] <= dist_to[v] + weight
        for e in graph.edges() {
            if self.dist_to[e.from()] + e.weight() < self.dist_to[e.to()] {
                log::error!("edge {} -> {} is not relaxed", e.from(), e.to());
                return false;
            }
        }

        // every tree edge v -> w satisfies dist_to[w] == dist_to[v] + weight
        for w in 0..self.dist_to.len() {
            if let Some(e) = self.edge_to[w] {
                if w != e.to() {
                    log::error!("predecessor edge of vertex {} does not point at it", w);
                    return false;
                }
                if self.dist_to[e.from()] + e.weight() != self.dist_to[w] {
                    log::error!("tree edge {} -> {} is not tight", e.from(), e.to());
                    return false;
                }
            }
        }

        true
    }
}

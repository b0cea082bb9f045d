//! Parsing of the whitespace-separated textual graph format.
//!
//! The format is the vertex count V, followed by the edge count E, followed
//! by E triples `from to weight`, all separated by arbitrary whitespace.
//! Tokens past the declared E triples are ignored.

use std::fmt::Debug;
use std::io::Read;
use std::str::FromStr;

use num_traits::{Float, Zero};

use crate::graph::digraph::EdgeWeightedDigraph;
use crate::graph::edge::DirectedEdge;
use crate::{Error, Result};

impl<W> EdgeWeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy + FromStr,
{
    /// Reads a digraph from `input` in the textual format
    pub fn from_reader<R: Read>(mut input: R) -> Result<Self> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        text.parse()
    }
}

impl<W> FromStr for EdgeWeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy + FromStr,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();

        let vertices = next_usize(&mut tokens, "vertex count")?;
        let edges = next_usize(&mut tokens, "edge count")?;

        let mut graph = EdgeWeightedDigraph::new(vertices);
        for _ in 0..edges {
            let from = next_usize(&mut tokens, "edge source")?;
            let to = next_usize(&mut tokens, "edge target")?;
            let weight = next_weight(&mut tokens)?;
            graph.add_edge(DirectedEdge::new(from, to, weight))?;
        }

        Ok(graph)
    }
}

fn next_token<'a, I>(tokens: &mut I, expected: &str) -> Result<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    tokens
        .next()
        .ok_or_else(|| Error::InvalidFormat(format!("unexpected end of input, expected {}", expected)))
}

fn next_usize<'a, I>(tokens: &mut I, expected: &str) -> Result<usize>
where
    I: Iterator<Item = &'a str>,
{
    let token = next_token(tokens, expected)?;
    token
        .parse()
        .map_err(|_| Error::InvalidFormat(format!("expected {}, found {:?}", expected, token)))
}

fn next_weight<'a, I, W>(tokens: &mut I) -> Result<W>
where
    I: Iterator<Item = &'a str>,
    W: Float + FromStr,
{
    let token = next_token(tokens, "edge weight")?;
    let weight: W = token
        .parse()
        .map_err(|_| Error::InvalidFormat(format!("expected edge weight, found {:?}", token)))?;
    // f64 parsing accepts "NaN", which would break the weight ordering
    if weight.is_nan() {
        return Err(Error::InvalidFormat(format!("edge weight {:?} is not a number", token)));
    }
    Ok(weight)
}

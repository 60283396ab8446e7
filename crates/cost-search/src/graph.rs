//! Directed weighted graph.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Graph construction and validation errors.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid cost {cost} on edge {from} -> {to}: costs must be finite and non-negative")]
    InvalidCost { from: String, to: String, cost: f64 },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Directed graph stored as `node -> (neighbor -> cost)`.
///
/// Adjacency is kept in ordered maps so neighbours are always expanded in
/// ascending identifier order. Nodes that only appear as a neighbour have no
/// outgoing edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "N: Ord + Serialize",
    deserialize = "N: Ord + Deserialize<'de>"
))]
pub struct Graph<N: Ord> {
    adjacency: BTreeMap<N, BTreeMap<N, f64>>,
}

impl<N: Ord> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<N: Ord + Clone + Debug> Graph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a node exists, even without outgoing edges.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Insert or replace the edge `from -> to`. Returns the previous cost, if any.
    pub fn add_edge(&mut self, from: N, to: N, cost: f64) -> Option<f64> {
        self.adjacency.entry(from).or_default().insert(to, cost)
    }

    /// Builder-style variant of [`Graph::add_edge`].
    pub fn with_edge(mut self, from: N, to: N, cost: f64) -> Self {
        self.add_edge(from, to, cost);
        self
    }

    /// Outgoing edges of `node` in ascending neighbour order.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, f64)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(n, c)| (n, *c)))
    }

    /// Cost of the edge `from -> to`, if present.
    pub fn edge_cost(&self, from: &N, to: &N) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Whether `node` appears anywhere in the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
            || self.adjacency.values().any(|edges| edges.contains_key(node))
    }

    /// Number of distinct nodes, including neighbour-only nodes.
    pub fn node_count(&self) -> usize {
        let mut nodes: BTreeSet<&N> = self.adjacency.keys().collect();
        for edges in self.adjacency.values() {
            nodes.extend(edges.keys());
        }
        nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Reject negative or non-finite edge costs.
    pub fn validate(&self) -> GraphResult<()> {
        for (from, edges) in &self.adjacency {
            for (to, &cost) in edges {
                if !cost.is_finite() || cost < 0.0 {
                    return Err(GraphError::InvalidCost {
                        from: format!("{:?}", from),
                        to: format!("{:?}", to),
                        cost,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Graph<i64> {
    /// Parse the `{"node": {"neighbor": cost, ...}, ...}` adjacency shape.
    ///
    /// Node identifiers are JSON object keys holding integers.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let graph: Self = serde_json::from_str(json)?;
        graph.validate()?;
        Ok(graph)
    }
}

impl<N: Ord + Clone + Debug> FromIterator<(N, N, f64)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N, f64)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (from, to, cost) in iter {
            graph.add_edge(from, to, cost);
        }
        graph
    }
}

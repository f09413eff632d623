//! Interference graph construction.
//!
//! Vertices are positions in the input node list. Two vertices are adjacent
//! iff the great-circle distance between them is strictly less than the
//! interference radius:
//!
//! ```text
//! (a, b) ∈ E  ⇔  a ≠ b ∧ haversine(a, b) < radius
//! ```
//!
//! A node exactly at the radius does not interfere. Every unordered pair is
//! examined once, so construction costs N(N-1)/2 distance computations.

use crate::error::{Error, Result};
use crate::node::Node;
use tracing::{debug, trace};

/// Symmetric adjacency structure over vertex indices.
///
/// `neighbors(i)` is sorted ascending and never contains `i`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterferenceGraph {
    adjacency: Vec<Vec<usize>>,
}

impl InterferenceGraph {
    /// Build the interference graph for `nodes` at `radius_km`.
    ///
    /// The result depends only on the node list and the radius.
    pub fn build(nodes: &[Node], radius_km: f64) -> Self {
        let n = nodes.len();
        let mut adjacency = vec![Vec::new(); n];

        // Outer index ascending and inner index ascending keep every
        // neighbor list sorted without a final sort.
        for i in 0..n {
            for j in (i + 1)..n {
                let d = nodes[i].distance_km(&nodes[j]);
                if d < radius_km {
                    trace!(a = nodes[i].id(), b = nodes[j].id(), distance_km = d, "interference");
                    adjacency[i].push(j);
                    adjacency[j].push(i);
                }
            }
        }

        let graph = Self { adjacency };
        debug!(
            vertices = graph.len(),
            edges = graph.edge_count(),
            max_degree = graph.max_degree(),
            radius_km,
            "built interference graph"
        );
        graph
    }

    /// Wrap a raw adjacency list without checking it.
    ///
    /// Use [`check_invariants`](Self::check_invariants) to validate.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Self {
        Self { adjacency }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbors of vertex `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Number of neighbors of vertex `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Check if two vertices interfere.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|ns| ns.binary_search(&b).is_ok())
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Largest vertex degree (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterate over each undirected edge once, as `(low, high)` index pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(a, ns)| ns.iter().filter(move |&&b| a < b).map(move |&b| (a, b)))
    }

    /// Verify the structural invariants of the adjacency structure.
    ///
    /// Every neighbor index is in range, no vertex lists itself, each list is
    /// strictly ascending, and adjacency is symmetric.
    pub fn check_invariants(&self) -> Result<()> {
        let n = self.len();
        for (v, ns) in self.adjacency.iter().enumerate() {
            for (k, &u) in ns.iter().enumerate() {
                if u >= n {
                    return Err(Error::InvariantViolation(format!(
                        "vertex {} lists neighbor {} but graph has {} vertices",
                        v, u, n
                    )));
                }
                if u == v {
                    return Err(Error::InvariantViolation(format!(
                        "vertex {} lists itself as a neighbor",
                        v
                    )));
                }
                if k > 0 && ns[k - 1] >= u {
                    return Err(Error::InvariantViolation(format!(
                        "neighbors of vertex {} are not strictly ascending",
                        v
                    )));
                }
                if self.adjacency[u].binary_search(&v).is_err() {
                    return Err(Error::InvariantViolation(format!(
                        "asymmetric edge: {} lists {} but {} does not list {}",
                        v, u, u, v
                    )));
                }
            }
        }
        Ok(())
    }
}

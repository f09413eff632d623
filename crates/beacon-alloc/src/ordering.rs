//! Degree-descending processing order.
//!
//! Highly constrained vertices are colored first. Vertices of equal degree
//! keep their relative position from the input list, so the order is a pure
//! function of the graph.

use crate::graph::InterferenceGraph;

/// Vertex indices sorted by degree, highest first, ties in input order.
pub fn degree_order(graph: &InterferenceGraph) -> Vec<usize> {
    let mut order: Vec<usize> = (0..graph.len()).collect();
    // `sort_by_key` is stable; indices start ascending.
    order.sort_by_key(|&v| std::cmp::Reverse(graph.degree(v)));
    order
}

/// Check that `order` visits every vertex of a graph with `n` vertices once.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in order {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

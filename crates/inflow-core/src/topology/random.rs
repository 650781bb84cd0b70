//! Erdos-Renyi G(n, p)

use super::Graph;
use crate::rng::SimRng;

/// Include each pair `i < j` independently with probability `p`.
/// Pairs are visited in ascending `(i, j)` order, one draw each.
pub(crate) fn erdos_renyi(n: usize, p: f64, rng: &mut SimRng) -> Graph {
    let mut graph = Graph::empty(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.bernoulli(p) {
                graph.add_edge(i, j);
            }
        }
    }
    graph
}

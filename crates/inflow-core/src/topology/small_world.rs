//! Watts-Strogatz small-world graphs

use super::Graph;
use crate::rng::SimRng;

/// Ring lattice: each node linked to its `k / 2` nearest neighbors on either side
pub fn ring_lattice(n: usize, k: usize) -> Graph {
    let mut graph = Graph::empty(n);
    for offset in 1..=k / 2 {
        for u in 0..n {
            graph.add_edge(u, (u + offset) % n);
        }
    }
    graph
}

/// Build a ring lattice, then rewire each lattice edge with probability `p`.
///
/// Edges are visited by offset `1..=k/2`, then by node in ascending order. A
/// rewired edge `(u, v)` becomes `(u, w)` with `w` drawn uniformly, resampled
/// while it would create a self-loop or a duplicate, so the edge count never
/// changes. Nodes already adjacent to every other node keep their edge.
pub(crate) fn watts_strogatz(n: usize, k: usize, p: f64, rng: &mut SimRng) -> Graph {
    let mut graph = ring_lattice(n, k);

    for offset in 1..=k / 2 {
        for u in 0..n {
            if !rng.bernoulli(p) {
                continue;
            }
            if graph.degree(u) >= n - 1 {
                continue;
            }

            let v = (u + offset) % n;
            let w = loop {
                let candidate = rng.index(n);
                if candidate != u && !graph.has_edge(u, candidate) {
                    break candidate;
                }
            };

            graph.remove_edge(u, v);
            graph.add_edge(u, w);
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_degree_is_k() {
        let graph = ring_lattice(20, 4);

        assert_eq!(graph.num_edges(), 20 * 4 / 2);
        for node in graph.nodes() {
            assert_eq!(graph.degree(node), 4);
        }
        assert!(graph.has_edge(0, 19));
        assert!(graph.has_edge(0, 18));
        assert!(!graph.has_edge(0, 17));
    }

    #[test]
    fn test_rewire_preserves_edge_count() {
        for seed in 0..20 {
            for &(n, k, p) in &[(30, 4, 0.1), (30, 6, 0.5), (10, 2, 1.0), (7, 6, 1.0)] {
                let mut rng = SimRng::seeded(seed);
                let graph = watts_strogatz(n, k, p, &mut rng);
                assert_eq!(graph.num_edges(), n * k / 2);
                for (u, v) in graph.edges() {
                    assert_ne!(u, v);
                }
            }
        }
    }

    #[test]
    fn test_zero_degree_lattice_is_edgeless() {
        let mut rng = SimRng::seeded(3);
        let graph = watts_strogatz(5, 0, 1.0, &mut rng);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.num_nodes(), 5);
    }

    #[test]
    fn test_zero_probability_keeps_lattice() {
        let mut rng = SimRng::seeded(3);
        let graph = watts_strogatz(25, 4, 0.0, &mut rng);
        assert_eq!(graph, ring_lattice(25, 4));
    }

    #[test]
    fn test_full_rewire_changes_lattice() {
        let mut rng = SimRng::seeded(3);
        let graph = watts_strogatz(50, 4, 1.0, &mut rng);
        assert_ne!(graph, ring_lattice(50, 4));
    }
}

//! Barabasi-Albert preferential attachment

use super::Graph;
use crate::rng::SimRng;
use inflow_records::NodeId;

/// Grow a graph from a fully connected seed set of `m` nodes.
///
/// Each later node, in id order, links to `m` distinct existing nodes chosen
/// with probability proportional to degree. Degrees are only updated once all
/// `m` edges of the new node are in place.
pub(crate) fn barabasi_albert(n: usize, m: usize, rng: &mut SimRng) -> Graph {
    let mut graph = Graph::empty(n);

    // Every node appears once per incident edge
    let mut endpoints: Vec<NodeId> = Vec::with_capacity(2 * m * n);

    for u in 0..m {
        for v in (u + 1)..m {
            graph.add_edge(u, v);
            endpoints.push(u);
            endpoints.push(v);
        }
    }

    for new_node in m..n {
        let mut targets: Vec<NodeId> = Vec::with_capacity(m);
        while targets.len() < m {
            // A single-node seed set has no edges yet; fall back to uniform choice
            let candidate = if endpoints.is_empty() {
                rng.index(new_node)
            } else {
                endpoints[rng.index(endpoints.len())]
            };
            if !targets.contains(&candidate) {
                targets.push(candidate);
            }
        }

        for &target in &targets {
            graph.add_edge(new_node, target);
        }
        for &target in &targets {
            endpoints.push(target);
            endpoints.push(new_node);
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_edges(n: usize, m: usize) -> usize {
        m * (m - 1) / 2 + m * (n - m)
    }

    #[test]
    fn test_edge_count_law() {
        for seed in 0..10 {
            for &(n, m) in &[(50, 2), (50, 1), (30, 5), (4, 3)] {
                let mut rng = SimRng::seeded(seed);
                let graph = barabasi_albert(n, m, &mut rng);
                assert_eq!(graph.num_edges(), expected_edges(n, m), "n={} m={}", n, m);
            }
        }
    }

    #[test]
    fn test_new_nodes_attach_m_edges_to_older_nodes() {
        let mut rng = SimRng::seeded(11);
        let graph = barabasi_albert(40, 3, &mut rng);

        for node in 3..40 {
            let older = graph
                .neighbors(node)
                .unwrap()
                .iter()
                .filter(|&&other| other < node)
                .count();
            assert_eq!(older, 3);
        }
        assert!(graph.is_connected());
    }

    #[test]
    fn test_hubs_emerge() {
        let mut rng = SimRng::seeded(42);
        let graph = barabasi_albert(500, 2, &mut rng);

        let max_degree = graph.nodes().map(|n| graph.degree(n)).max().unwrap();
        // Mean degree is about 4; preferential attachment yields far larger hubs
        assert!(max_degree > 15, "max degree was {}", max_degree);
    }
}

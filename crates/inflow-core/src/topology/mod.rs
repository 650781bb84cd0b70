//! Network Topology
//!
//! The undirected graph agents communicate over, and the three generators that
//! build it. A generated graph is never mutated; it carries no agent state and
//! can back any number of simulation runs.

mod random;
mod scale_free;
mod small_world;

pub use small_world::ring_lattice;

use std::collections::{BTreeSet, VecDeque};

use inflow_records::{round4, NetworkSummary, NodeId};
use tracing::info;

use crate::config::{TopologyKind, TopologyParams};
use crate::error::{SimError, SimResult};
use crate::rng::SimRng;

/// Undirected, unweighted graph over nodes `0..n` without self-loops or parallel edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<BTreeSet<NodeId>>,
    num_edges: usize,
}

impl Graph {
    /// Graph with `num_nodes` nodes and no edges
    pub(crate) fn empty(num_nodes: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); num_nodes],
            num_edges: 0,
        }
    }

    /// Build a graph from an explicit edge list.
    /// Repeated edges collapse into one; self-loops and unknown nodes are rejected.
    pub fn from_edges(num_nodes: usize, edges: &[(NodeId, NodeId)]) -> SimResult<Self> {
        if num_nodes == 0 {
            return Err(SimError::Configuration(
                "number of agents must be greater than 0".to_string(),
            ));
        }

        let mut graph = Self::empty(num_nodes);
        for &(u, v) in edges {
            for node in [u, v] {
                if node >= num_nodes {
                    return Err(SimError::Reference { node, num_nodes });
                }
            }
            if u == v {
                return Err(SimError::Configuration(format!(
                    "self-loop on node {} is not allowed",
                    u
                )));
            }
            graph.add_edge(u, v);
        }
        Ok(graph)
    }

    /// Add an undirected edge. Returns false if it already existed.
    pub(crate) fn add_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        debug_assert_ne!(u, v, "self-loops are not allowed");
        let inserted = self.adjacency[u].insert(v);
        if inserted {
            self.adjacency[v].insert(u);
            self.num_edges += 1;
        }
        inserted
    }

    /// Remove an undirected edge. Returns false if it did not exist.
    pub(crate) fn remove_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        let removed = self.adjacency[u].remove(&v);
        if removed {
            self.adjacency[v].remove(&u);
            self.num_edges -= 1;
        }
        removed
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    /// Node ids in ascending order
    pub fn nodes(&self) -> std::ops::Range<NodeId> {
        0..self.adjacency.len()
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency
            .get(u)
            .map(|neighbors| neighbors.contains(&v))
            .unwrap_or(false)
    }

    /// Neighbor set of a node, in ascending id order
    pub fn neighbors(&self, node: NodeId) -> SimResult<&BTreeSet<NodeId>> {
        self.adjacency.get(node).ok_or(SimError::Reference {
            node,
            num_nodes: self.num_nodes(),
        })
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(node).map(BTreeSet::len).unwrap_or(0)
    }

    /// Every edge once, as `(u, v)` with `u < v`, in ascending order
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbors)| {
            neighbors.range(u + 1..).map(move |&v| (u, v))
        })
    }

    /// `2 * |E| / |N|`, rounded to 4 decimal places
    pub fn avg_degree(&self) -> f64 {
        if self.adjacency.is_empty() {
            return 0.0;
        }
        round4(2.0 * self.num_edges as f64 / self.num_nodes() as f64)
    }

    /// True iff a breadth-first traversal from node 0 reaches every node
    pub fn is_connected(&self) -> bool {
        if self.adjacency.is_empty() {
            return false;
        }

        let mut visited = vec![false; self.num_nodes()];
        let mut queue = VecDeque::from([0]);
        visited[0] = true;
        let mut reached = 1;

        while let Some(node) = queue.pop_front() {
            for &next in &self.adjacency[node] {
                if !visited[next] {
                    visited[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }

        reached == self.num_nodes()
    }

    /// Structural statistics labelled with the topology name
    pub fn summary(&self, topology: &str) -> NetworkSummary {
        NetworkSummary {
            topology: topology.to_string(),
            num_nodes: self.num_nodes(),
            num_edges: self.num_edges,
            avg_degree: self.avg_degree(),
            is_connected: self.is_connected(),
        }
    }
}

/// Generate a graph of `n` nodes. Identical arguments always yield the same edge set.
pub fn generate(
    n: usize,
    kind: TopologyKind,
    seed: u64,
    params: &TopologyParams,
) -> SimResult<Graph> {
    let mut rng = SimRng::seeded(seed);
    generate_with_rng(n, kind, params, &mut rng)
}

/// Generate a graph drawing from a caller-owned random stream.
/// Parameters are validated before any draw; no partial graph is returned.
pub fn generate_with_rng(
    n: usize,
    kind: TopologyKind,
    params: &TopologyParams,
    rng: &mut SimRng,
) -> SimResult<Graph> {
    params.validate(kind, n)?;

    let graph = match kind {
        TopologyKind::Random => random::erdos_renyi(n, params.p, rng),
        TopologyKind::SmallWorld => small_world::watts_strogatz(n, params.k, params.p, rng),
        TopologyKind::ScaleFree => scale_free::barabasi_albert(n, params.m, rng),
    };

    info!(
        topology = %kind,
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        "generated network"
    );
    Ok(graph)
}

/// Generate from a topology name, as typed on a command line
pub fn generate_named(
    n: usize,
    kind: &str,
    seed: u64,
    params: &TopologyParams,
) -> SimResult<Graph> {
    generate(n, kind.parse()?, seed, params)
}

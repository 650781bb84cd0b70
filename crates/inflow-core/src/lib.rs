//! Information propagation simulation.
//!
//! Public API: network generation, agent population, the propagation engine
//! and the export layer.

pub mod agents;
pub mod config;
pub mod engine;
pub mod error;
pub mod information;
pub mod output;
pub mod recorder;
pub mod rng;
pub mod topology;

pub use agents::{Agent, AgentDirectory, Traits};
pub use config::{ConfigOverrides, SimConfig, TopologyKind, TopologyParams};
pub use engine::PropagationEngine;
pub use error::{SimError, SimResult};
pub use information::InformationItem;
pub use recorder::SpreadRecorder;
pub use rng::SimRng;
pub use topology::{generate, generate_named, Graph};

pub use inflow_records::{AgentRecord, ItemId, ItemRecord, NetworkSummary, NodeId, SpreadRecord};

/// Validate `config`, then build its network and populate one agent per node.
/// Both draw from streams seeded with the configured seed.
pub fn build_network(config: &SimConfig) -> SimResult<(Graph, AgentDirectory)> {
    config.validate()?;
    let sim = &config.simulation;
    let graph = generate(
        sim.num_agents,
        config.topology.kind,
        sim.seed,
        &config.topology.params(),
    )?;
    let agents = AgentDirectory::populate(&graph, sim.seed);
    Ok((graph, agents))
}

/// Pick a uniformly random origin node from a stream seeded with `seed`
pub fn pick_origin(graph: &Graph, seed: u64) -> NodeId {
    SimRng::seeded(seed).index(graph.num_nodes())
}

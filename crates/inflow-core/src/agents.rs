//! Agent Directory
//!
//! One agent per network node, with traits drawn once at creation.

use inflow_records::{AgentRecord, ItemId, NodeId};

use crate::rng::SimRng;
use crate::topology::Graph;

/// Agent personality traits - fixed at creation
/// All values are 0.0 to 1.0
///
/// Propagation currently ignores these; they are reserved for a
/// trust-weighted acceptance rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Traits {
    pub belief: f64,
    pub bias: f64,
    pub trust_radius: f64,
    pub skepticism: f64,
}

impl Traits {
    /// Draw traits in the fixed order belief, bias, trust_radius, skepticism
    fn generate(rng: &mut SimRng) -> Self {
        Self {
            belief: rng.uniform(),
            bias: rng.uniform(),
            trust_radius: rng.uniform(),
            skepticism: rng.uniform(),
        }
    }
}

/// A single agent living on a network node
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub agent_id: NodeId,
    pub traits: Traits,
    /// Items this agent is aware of, in arrival order, without duplicates
    received_info: Vec<ItemId>,
    /// One entry per neighbor this agent forwarded an item to
    shared_info: Vec<ItemId>,
}

impl Agent {
    pub fn new(agent_id: NodeId, traits: Traits) -> Self {
        Self {
            agent_id,
            traits,
            received_info: Vec::new(),
            shared_info: Vec::new(),
        }
    }

    pub fn is_aware_of(&self, item_id: ItemId) -> bool {
        self.received_info.contains(&item_id)
    }

    /// Mark an item as received. Returns false if the agent already had it.
    pub(crate) fn receive(&mut self, item_id: ItemId) -> bool {
        if self.is_aware_of(item_id) {
            return false;
        }
        self.received_info.push(item_id);
        true
    }

    pub(crate) fn record_share(&mut self, item_id: ItemId) {
        self.shared_info.push(item_id);
    }

    pub fn received_info(&self) -> &[ItemId] {
        &self.received_info
    }

    pub fn shared_info(&self) -> &[ItemId] {
        &self.shared_info
    }

    pub fn to_record(&self) -> AgentRecord {
        AgentRecord::new(
            self.agent_id,
            self.traits.belief,
            self.traits.bias,
            self.traits.trust_radius,
            self.traits.skepticism,
            self.received_info.len(),
            self.shared_info.len(),
        )
    }
}

/// All agents of a run, indexed by node id
#[derive(Debug, Clone, PartialEq)]
pub struct AgentDirectory {
    agents: Vec<Agent>,
}

impl AgentDirectory {
    /// Create one agent per graph node, visiting nodes in ascending id order
    pub fn populate(graph: &Graph, seed: u64) -> Self {
        let mut rng = SimRng::seeded(seed);
        Self::populate_with_rng(graph, &mut rng)
    }

    pub fn populate_with_rng(graph: &Graph, rng: &mut SimRng) -> Self {
        let agents = graph
            .nodes()
            .map(|node| Agent::new(node, Traits::generate(rng)))
            .collect();
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Agent> {
        self.agents.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Agent> {
        self.agents.get_mut(id)
    }

    /// Agents in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    /// Ids of agents aware of `item_id`, ascending
    pub fn holders_of(&self, item_id: ItemId) -> Vec<NodeId> {
        self.agents
            .iter()
            .filter(|agent| agent.is_aware_of(item_id))
            .map(|agent| agent.agent_id)
            .collect()
    }

    pub fn records(&self) -> Vec<AgentRecord> {
        self.agents.iter().map(Agent::to_record).collect()
    }
}

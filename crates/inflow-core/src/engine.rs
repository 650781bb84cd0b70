//! Propagation Engine
//!
//! Discrete-time spread of information items over a fixed network.
//!
//! Each step runs in two phases per item. The decision phase snapshots the
//! agents aware of the item at step start and draws one Bernoulli trial per
//! (holder, unaware neighbor) pair, holders and neighbors both in ascending id
//! order. The commit phase then applies the successful transmissions. An agent
//! informed during step `t` can forward only from step `t + 1`.

use std::collections::BTreeSet;

use inflow_records::{AgentRecord, ItemId, ItemRecord, NetworkSummary, NodeId, SpreadRecord};
use tracing::info;

use crate::agents::AgentDirectory;
use crate::config::check_probability;
use crate::error::{SimError, SimResult};
use crate::information::InformationItem;
use crate::recorder::SpreadRecorder;
use crate::rng::SimRng;
use crate::topology::Graph;

/// A successful share decided during the decision phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transmission {
    from: NodeId,
    to: NodeId,
}

/// Owns the mutable state of one simulation run over a borrowed network
#[derive(Debug)]
pub struct PropagationEngine<'g> {
    graph: &'g Graph,
    agents: AgentDirectory,
    /// Tracked items in injection order
    items: Vec<InformationItem>,
    recorder: SpreadRecorder,
    rng: SimRng,
    share_probability: f64,
    step: u64,
}

impl<'g> PropagationEngine<'g> {
    /// Create an engine whose random stream is seeded with `seed`
    pub fn new(
        graph: &'g Graph,
        agents: AgentDirectory,
        seed: u64,
        share_probability: f64,
    ) -> SimResult<Self> {
        Self::with_rng(graph, agents, SimRng::seeded(seed), share_probability)
    }

    pub fn with_rng(
        graph: &'g Graph,
        agents: AgentDirectory,
        rng: SimRng,
        share_probability: f64,
    ) -> SimResult<Self> {
        check_probability("share_probability", share_probability)?;
        if agents.len() != graph.num_nodes() {
            return Err(SimError::Configuration(format!(
                "agent directory has {} agents but the network has {} nodes",
                agents.len(),
                graph.num_nodes()
            )));
        }

        Ok(Self {
            graph,
            agents,
            items: Vec::new(),
            recorder: SpreadRecorder::new(),
            rng,
            share_probability,
            step: 0,
        })
    }

    /// Start tracking an item; its origin agent becomes aware immediately.
    ///
    /// Fails without touching any state if the origin is not a node, an
    /// attribute is outside [0, 1], or the item id is already in use.
    pub fn inject(&mut self, mut item: InformationItem) -> SimResult<()> {
        if !self.graph.contains(item.origin_node) {
            return Err(SimError::Reference {
                node: item.origin_node,
                num_nodes: self.graph.num_nodes(),
            });
        }
        item.validate()?;
        if self.item(item.item_id).is_some() {
            return Err(SimError::Configuration(format!(
                "item id {} was already injected",
                item.item_id
            )));
        }

        let origin = self
            .agents
            .get_mut(item.origin_node)
            .ok_or(SimError::Reference {
                node: item.origin_node,
                num_nodes: self.graph.num_nodes(),
            })?;
        origin.receive(item.item_id);
        item.mark_injected();

        info!(step = self.step, origin = item.origin_node, "injected {}", item);
        self.items.push(item);
        Ok(())
    }

    /// Execute exactly `num_steps` steps, recording spread after each one
    pub fn run(&mut self, num_steps: u64) {
        info!(
            steps = num_steps,
            agents = self.agents.len(),
            items = self.items.len(),
            "starting simulation"
        );

        for _ in 0..num_steps {
            self.step();
        }

        info!(step = self.step, "simulation complete");
    }

    /// Advance one step for every item, in injection order, then record spread
    pub fn step(&mut self) {
        self.step += 1;

        for index in 0..self.items.len() {
            let item_id = self.items[index].item_id;
            let transmissions = decide(
                self.graph,
                &self.agents,
                &mut self.rng,
                self.share_probability,
                item_id,
            );
            self.commit(index, &transmissions);
        }

        let total_agents = self.agents.len();
        for item in &self.items {
            let record = self.recorder.record(self.step, item, total_agents);
            info!(
                step = record.step,
                item = record.item_id,
                "reached {}/{} agents ({:.1}%)",
                record.spread_count,
                record.total_agents,
                record.spread_fraction * 100.0
            );
        }
    }

    /// Apply the transmissions of one item
    fn commit(&mut self, index: usize, transmissions: &[Transmission]) {
        let item = &mut self.items[index];
        for transmission in transmissions {
            let Some(receiver) = self.agents.get_mut(transmission.to) else {
                continue;
            };
            if !receiver.receive(item.item_id) {
                continue;
            }
            if let Some(sender) = self.agents.get_mut(transmission.from) {
                sender.record_share(item.item_id);
            }
            item.record_spread();
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn agents(&self) -> &AgentDirectory {
        &self.agents
    }

    /// Tracked items in injection order
    pub fn items(&self) -> &[InformationItem] {
        &self.items
    }

    pub fn item(&self, item_id: ItemId) -> Option<&InformationItem> {
        self.items.iter().find(|item| item.item_id == item_id)
    }

    pub fn recorder(&self) -> &SpreadRecorder {
        &self.recorder
    }

    /// Number of steps executed so far
    pub fn current_step(&self) -> u64 {
        self.step
    }

    pub fn share_probability(&self) -> f64 {
        self.share_probability
    }

    pub fn total_agents(&self) -> usize {
        self.agents.len()
    }

    pub fn spread_log(&self) -> &[SpreadRecord] {
        self.recorder.records()
    }

    pub fn agent_records(&self) -> Vec<AgentRecord> {
        self.agents.records()
    }

    pub fn item_records(&self) -> Vec<ItemRecord> {
        self.items.iter().map(InformationItem::to_record).collect()
    }

    pub fn network_summary(&self, topology: &str) -> NetworkSummary {
        self.graph.summary(topology)
    }
}

/// Decision phase for one item: reads state only, consumes the random stream
/// in (holder, neighbor) ascending order.
fn decide(
    graph: &Graph,
    agents: &AgentDirectory,
    rng: &mut SimRng,
    share_probability: f64,
    item_id: ItemId,
) -> Vec<Transmission> {
    let holders = agents.holders_of(item_id);
    let mut chosen: BTreeSet<NodeId> = BTreeSet::new();
    let mut transmissions = Vec::new();

    for &holder in &holders {
        let Ok(neighbors) = graph.neighbors(holder) else {
            continue;
        };
        for &neighbor in neighbors {
            let aware = agents
                .get(neighbor)
                .map(|agent| agent.is_aware_of(item_id))
                .unwrap_or(true);
            if aware || chosen.contains(&neighbor) {
                continue;
            }
            if rng.bernoulli(share_probability) {
                chosen.insert(neighbor);
                transmissions.push(Transmission {
                    from: holder,
                    to: neighbor,
                });
            }
        }
    }

    transmissions
}

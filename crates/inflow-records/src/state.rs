//! Final State Records
//!
//! Per-agent and per-item rows written at the end of a run.

use serde::{Deserialize, Serialize};

use crate::table::{float_cell, round4, TableRow};
use crate::{ItemId, NodeId};

/// Final state of one agent
/// Trait values are rounded to 4 decimal places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub agent_id: NodeId,
    pub belief: f64,
    pub bias: f64,
    pub trust_radius: f64,
    pub skepticism: f64,
    /// Number of distinct items the agent is aware of
    pub received_count: usize,
    /// Number of forwards the agent made (one per neighbor reached)
    pub shared_count: usize,
}

impl AgentRecord {
    pub fn new(
        agent_id: NodeId,
        belief: f64,
        bias: f64,
        trust_radius: f64,
        skepticism: f64,
        received_count: usize,
        shared_count: usize,
    ) -> Self {
        Self {
            agent_id,
            belief: round4(belief),
            bias: round4(bias),
            trust_radius: round4(trust_radius),
            skepticism: round4(skepticism),
            received_count,
            shared_count,
        }
    }
}

impl TableRow for AgentRecord {
    const COLUMNS: &'static [&'static str] = &[
        "agent_id",
        "belief",
        "bias",
        "trust_radius",
        "skepticism",
        "received_count",
        "shared_count",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.agent_id.to_string(),
            float_cell(self.belief),
            float_cell(self.bias),
            float_cell(self.trust_radius),
            float_cell(self.skepticism),
            self.received_count.to_string(),
            self.shared_count.to_string(),
        ]
    }
}

/// Final state of one information item
/// Attribute values are rounded to 4 decimal places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub item_id: ItemId,
    pub truth_value: f64,
    pub emotional_intensity: f64,
    pub complexity: f64,
    pub origin_node: NodeId,
    pub spread_count: usize,
}

impl ItemRecord {
    pub fn new(
        item_id: ItemId,
        truth_value: f64,
        emotional_intensity: f64,
        complexity: f64,
        origin_node: NodeId,
        spread_count: usize,
    ) -> Self {
        Self {
            item_id,
            truth_value: round4(truth_value),
            emotional_intensity: round4(emotional_intensity),
            complexity: round4(complexity),
            origin_node,
            spread_count,
        }
    }
}

impl TableRow for ItemRecord {
    const COLUMNS: &'static [&'static str] = &[
        "item_id",
        "truth_value",
        "emotional_intensity",
        "complexity",
        "origin_node",
        "spread_count",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.item_id.to_string(),
            float_cell(self.truth_value),
            float_cell(self.emotional_intensity),
            float_cell(self.complexity),
            self.origin_node.to_string(),
            self.spread_count.to_string(),
        ]
    }
}

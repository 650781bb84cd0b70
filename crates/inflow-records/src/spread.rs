//! Spread Records
//!
//! One row per (step, item) describing how far an item has spread.

use serde::{Deserialize, Serialize};

use crate::table::{float_cell, round4, TableRow};
use crate::ItemId;

/// Spread extent of one item at the end of one step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadRecord {
    pub step: u64,
    pub item_id: ItemId,
    pub spread_count: usize,
    pub total_agents: usize,
    /// `spread_count / total_agents`, rounded to 4 decimal places
    pub spread_fraction: f64,
}

impl SpreadRecord {
    pub fn new(step: u64, item_id: ItemId, spread_count: usize, total_agents: usize) -> Self {
        let spread_fraction = if total_agents == 0 {
            0.0
        } else {
            round4(spread_count as f64 / total_agents as f64)
        };

        Self {
            step,
            item_id,
            spread_count,
            total_agents,
            spread_fraction,
        }
    }

    /// True once every agent is aware of the item
    pub fn is_saturated(&self) -> bool {
        self.total_agents > 0 && self.spread_count >= self.total_agents
    }
}

impl TableRow for SpreadRecord {
    const COLUMNS: &'static [&'static str] = &[
        "step",
        "item_id",
        "spread_count",
        "total_agents",
        "spread_fraction",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.step.to_string(),
            self.item_id.to_string(),
            self.spread_count.to_string(),
            self.total_agents.to_string(),
            float_cell(self.spread_fraction),
        ]
    }
}

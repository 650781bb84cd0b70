//! Information Items
//!
//! A discrete piece of information injected at one node and spread by agents.

use std::fmt;

use inflow_records::{ItemRecord, ItemId, NodeId};

use crate::error::{check_unit_interval, SimResult};

/// A single piece of information in the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct InformationItem {
    pub item_id: ItemId,
    pub truth_value: f64,
    pub emotional_intensity: f64,
    pub complexity: f64,
    pub origin_node: NodeId,
    /// Number of distinct agents aware of the item; 1 once injected
    spread_count: usize,
}

impl InformationItem {
    pub fn new(
        item_id: ItemId,
        truth_value: f64,
        emotional_intensity: f64,
        complexity: f64,
        origin_node: NodeId,
    ) -> Self {
        Self {
            item_id,
            truth_value,
            emotional_intensity,
            complexity,
            origin_node,
            spread_count: 0,
        }
    }

    pub fn spread_count(&self) -> usize {
        self.spread_count
    }

    /// Checks the attribute values lie within [0, 1]
    pub(crate) fn validate(&self) -> SimResult<()> {
        check_unit_interval("truth_value", self.truth_value)?;
        check_unit_interval("emotional_intensity", self.emotional_intensity)?;
        check_unit_interval("complexity", self.complexity)?;
        Ok(())
    }

    pub(crate) fn mark_injected(&mut self) {
        self.spread_count = 1;
    }

    pub(crate) fn record_spread(&mut self) {
        self.spread_count += 1;
    }

    pub fn to_record(&self) -> ItemRecord {
        ItemRecord::new(
            self.item_id,
            self.truth_value,
            self.emotional_intensity,
            self.complexity,
            self.origin_node,
            self.spread_count,
        )
    }
}

impl fmt::Display for InformationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InformationItem(id={}, truth={:.2}, emotion={:.2}, origin={})",
            self.item_id, self.truth_value, self.emotional_intensity, self.origin_node
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn test_new_item_not_yet_spread() {
        let item = InformationItem::new(0, 0.2, 0.85, 0.5, 3);
        assert_eq!(item.spread_count(), 0);
        assert_eq!(
            item.to_string(),
            "InformationItem(id=0, truth=0.20, emotion=0.85, origin=3)"
        );
    }

    #[test]
    fn test_validate_attributes() {
        assert!(InformationItem::new(0, 0.0, 1.0, 0.5, 0).validate().is_ok());

        let err = InformationItem::new(0, 0.2, 1.5, 0.5, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            SimError::Value {
                field: "emotional_intensity",
                ..
            }
        ));
    }

    #[test]
    fn test_record_rounds_attributes() {
        let mut item = InformationItem::new(1, 0.123456, 0.85, 0.5, 2);
        item.mark_injected();
        item.record_spread();

        let record = item.to_record();
        assert_eq!(record.truth_value, 0.1235);
        assert_eq!(record.spread_count, 2);
    }
}

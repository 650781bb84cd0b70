//! Spread Recorder
//!
//! Append-only log of spread extent, one record per (step, item).

use inflow_records::{ItemId, SpreadRecord};

use crate::information::InformationItem;

/// Accumulates spread records in (step, injection order) order
#[derive(Debug, Clone, Default)]
pub struct SpreadRecorder {
    records: Vec<SpreadRecord>,
}

impl SpreadRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the current spread of `item` at `step`
    pub fn record(
        &mut self,
        step: u64,
        item: &InformationItem,
        total_agents: usize,
    ) -> &SpreadRecord {
        self.records.push(SpreadRecord::new(
            step,
            item.item_id,
            item.spread_count(),
            total_agents,
        ));
        &self.records[self.records.len() - 1]
    }

    /// Full log, read-only
    pub fn records(&self) -> &[SpreadRecord] {
        &self.records
    }

    /// History of a single item, in step order
    pub fn records_for(&self, item_id: ItemId) -> impl Iterator<Item = &SpreadRecord> {
        self.records.iter().filter(move |r| r.item_id == item_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_new() {
        let recorder = SpreadRecorder::new();
        assert!(recorder.is_empty());
        assert_eq!(recorder.len(), 0);
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut recorder = SpreadRecorder::new();
        let mut first = InformationItem::new(0, 0.2, 0.8, 0.5, 0);
        let mut second = InformationItem::new(1, 0.9, 0.1, 0.5, 3);
        first.mark_injected();
        second.mark_injected();

        recorder.record(1, &first, 4);
        recorder.record(1, &second, 4);
        first.record_spread();
        let latest = recorder.record(2, &first, 4);
        assert_eq!(latest.spread_count, 2);
        assert_eq!(latest.spread_fraction, 0.5);

        let steps: Vec<_> = recorder
            .records()
            .iter()
            .map(|r| (r.step, r.item_id))
            .collect();
        assert_eq!(steps, vec![(1, 0), (1, 1), (2, 0)]);

        let history: Vec<_> = recorder.records_for(0).map(|r| r.spread_count).collect();
        assert_eq!(history, vec![1, 2]);
    }
}

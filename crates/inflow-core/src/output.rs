//! Output
//!
//! Writes the results of a run as CSV tables plus a JSON network summary.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use inflow_records::{NetworkSummary, TableRow};
use tracing::info;

use crate::engine::PropagationEngine;
use crate::error::SimResult;

pub const SPREAD_LOG_FILE: &str = "spread_log.csv";
pub const AGENT_STATES_FILE: &str = "agent_states.csv";
pub const INFO_ITEMS_FILE: &str = "info_items.csv";
pub const NETWORK_SUMMARY_FILE: &str = "network_summary.json";

/// Write rows as a CSV table with a header line.
/// Returns false without creating a file when there are no rows.
pub fn write_table<T: TableRow>(path: impl AsRef<Path>, rows: &[T]) -> std::io::Result<bool> {
    if rows.is_empty() {
        return Ok(false);
    }

    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", T::COLUMNS.join(","))?;
    for row in rows {
        writeln!(writer, "{}", row.cells().join(","))?;
    }
    writer.flush()?;
    Ok(true)
}

/// Write a network summary as pretty-printed JSON
pub fn write_summary(path: impl AsRef<Path>, summary: &NetworkSummary) -> std::io::Result<()> {
    let json = summary
        .to_json()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    fs::write(path, json)
}

/// Write every export of a finished run into `output_dir`, creating it if needed.
/// Returns the paths of the files written.
pub fn save_outputs(
    engine: &PropagationEngine<'_>,
    topology: &str,
    output_dir: impl AsRef<Path>,
) -> SimResult<Vec<PathBuf>> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();

    let spread_path = output_dir.join(SPREAD_LOG_FILE);
    if write_table(&spread_path, engine.spread_log())? {
        written.push(spread_path);
    }

    let agent_path = output_dir.join(AGENT_STATES_FILE);
    if write_table(&agent_path, &engine.agent_records())? {
        written.push(agent_path);
    }

    let item_path = output_dir.join(INFO_ITEMS_FILE);
    if write_table(&item_path, &engine.item_records())? {
        written.push(item_path);
    }

    let summary_path = output_dir.join(NETWORK_SUMMARY_FILE);
    write_summary(&summary_path, &engine.network_summary(topology))?;
    written.push(summary_path);

    for path in &written {
        info!("saved {}", path.display());
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::AgentDirectory;
    use crate::information::InformationItem;
    use crate::topology::Graph;
    use inflow_records::SpreadRecord;

    #[test]
    fn test_write_table_skips_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        let rows: Vec<SpreadRecord> = Vec::new();
        assert!(!write_table(&path, &rows).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_table_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spread.csv");

        let rows = vec![SpreadRecord::new(1, 0, 2, 5), SpreadRecord::new(2, 0, 5, 5)];
        assert!(write_table(&path, &rows).unwrap());

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "step,item_id,spread_count,total_agents,spread_fraction",
                "1,0,2,5,0.4",
                "2,0,5,5,1.0",
            ]
        );
    }

    #[test]
    fn test_save_outputs_writes_all_files() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let agents = AgentDirectory::populate(&graph, 42);
        let mut engine = PropagationEngine::new(&graph, agents, 42, 1.0).unwrap();
        engine
            .inject(InformationItem::new(0, 0.2, 0.85, 0.5, 0))
            .unwrap();
        engine.run(2);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/output");
        let written = save_outputs(&engine, "path", &out).unwrap();
        assert_eq!(written.len(), 4);

        let agents_csv = fs::read_to_string(out.join(AGENT_STATES_FILE)).unwrap();
        assert_eq!(agents_csv.lines().count(), 4);
        assert!(agents_csv.starts_with(
            "agent_id,belief,bias,trust_radius,skepticism,received_count,shared_count"
        ));

        let items_csv = fs::read_to_string(out.join(INFO_ITEMS_FILE)).unwrap();
        assert_eq!(items_csv.lines().nth(1), Some("0,0.2,0.85,0.5,0,3"));

        let summary: NetworkSummary = serde_json::from_str(
            &fs::read_to_string(out.join(NETWORK_SUMMARY_FILE)).unwrap(),
        )
        .unwrap();
        assert_eq!(summary.topology, "path");
        assert_eq!(summary.num_edges, 2);
    }

    #[test]
    fn test_save_outputs_without_items_skips_tables() {
        let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
        let agents = AgentDirectory::populate(&graph, 1);
        let engine = PropagationEngine::new(&graph, agents, 1, 0.3).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let written = save_outputs(&engine, "pair", dir.path()).unwrap();

        assert!(!dir.path().join(SPREAD_LOG_FILE).exists());
        assert!(!dir.path().join(INFO_ITEMS_FILE).exists());
        assert_eq!(written.len(), 2);
    }
}

//! Network Summary
//!
//! Structural statistics of a generated topology.

use serde::{Deserialize, Serialize};

/// Structural summary of a network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSummary {
    /// Topology label, e.g. "small_world"
    pub topology: String,
    pub num_nodes: usize,
    pub num_edges: usize,
    /// `2 * num_edges / num_nodes`, rounded to 4 decimal places
    pub avg_degree: f64,
    pub is_connected: bool,
}

impl NetworkSummary {
    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_json_roundtrip_fields() {
        let summary = NetworkSummary {
            topology: "small_world".to_string(),
            num_nodes: 50,
            num_edges: 100,
            avg_degree: 4.0,
            is_connected: true,
        };

        let json = summary.to_json().unwrap();
        assert!(json.contains("\"topology\": \"small_world\""));
        assert!(json.contains("\"is_connected\": true"));

        let parsed: NetworkSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}

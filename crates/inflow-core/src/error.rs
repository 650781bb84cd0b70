//! Error Types
//!
//! Every precondition the simulation checks fails through [`SimError`].
//! Validation happens while building the network and injecting items; a run
//! that has started cannot fail.

use inflow_records::NodeId;

/// Errors that can occur while configuring or driving a simulation
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A configuration parameter is out of its valid range
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The requested topology name is not one of the supported generators
    #[error("unknown topology '{name}'. Choose from: random, small_world, scale_free")]
    UnknownTopology { name: String },

    /// An operation referenced a node id that is not in the graph
    #[error("unknown agent id {node} (network has {num_nodes} agents)")]
    Reference { node: NodeId, num_nodes: usize },

    /// A numeric input fell outside [0, 1] or was not finite
    #[error("{field} must be within [0, 1], got {value}")]
    Value { field: &'static str, value: f64 },

    /// The configuration file could not be read or parsed
    #[error("failed to load config file: {0}")]
    ConfigFile(String),

    /// Writing an export failed
    #[error("failed to write output: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },
}

impl SimError {
    /// True for errors caused by invalid configuration rather than bad input
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SimError::Configuration(_) | SimError::UnknownTopology { .. } | SimError::ConfigFile(_)
        )
    }
}

/// Result alias used throughout the crate
pub type SimResult<T> = Result<T, SimError>;

/// Checks that a value lies in [0, 1] and is finite
pub fn check_unit_interval(field: &'static str, value: f64) -> SimResult<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SimError::Value { field, value })
    }
}

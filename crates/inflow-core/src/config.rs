//! Configuration loading for a simulation run.
//!
//! Settings are read from an optional TOML file; any field left out falls back
//! to its default. The CLI overrides individual fields after loading.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{check_unit_interval, SimError, SimResult};

/// Supported network generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TopologyKind {
    /// Erdos-Renyi G(n, p)
    Random,
    /// Watts-Strogatz ring lattice with rewiring
    #[default]
    SmallWorld,
    /// Barabasi-Albert preferential attachment
    ScaleFree,
}

impl TopologyKind {
    pub const ALL: [TopologyKind; 3] = [
        TopologyKind::Random,
        TopologyKind::SmallWorld,
        TopologyKind::ScaleFree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TopologyKind::Random => "random",
            TopologyKind::SmallWorld => "small_world",
            TopologyKind::ScaleFree => "scale_free",
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopologyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopologyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SimError::UnknownTopology { name: s.to_string() })
    }
}

/// Generator parameters. Each generator reads only the ones it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopologyParams {
    /// Edge probability (random) or rewire probability (small_world)
    pub p: f64,
    /// Ring degree for small_world
    pub k: usize,
    /// Edges per new node for scale_free
    pub m: usize,
}

impl Default for TopologyParams {
    fn default() -> Self {
        Self { p: 0.1, k: 4, m: 2 }
    }
}

impl TopologyParams {
    /// Checks the parameters used by `kind` against a network of `num_nodes`
    pub fn validate(&self, kind: TopologyKind, num_nodes: usize) -> SimResult<()> {
        if num_nodes == 0 {
            return Err(SimError::Configuration(
                "number of agents must be greater than 0".to_string(),
            ));
        }

        match kind {
            TopologyKind::Random => check_probability("p", self.p),
            TopologyKind::SmallWorld => {
                check_probability("p", self.p)?;
                // k = 0 is allowed and yields an edgeless lattice
                if self.k % 2 != 0 {
                    return Err(SimError::Configuration(format!(
                        "k must be an even number, got {}",
                        self.k
                    )));
                }
                if self.k >= num_nodes {
                    return Err(SimError::Configuration(format!(
                        "k ({}) must be less than the number of agents ({})",
                        self.k, num_nodes
                    )));
                }
                Ok(())
            }
            TopologyKind::ScaleFree => {
                if self.m == 0 || self.m >= num_nodes {
                    return Err(SimError::Configuration(format!(
                        "m must satisfy 1 <= m < {}, got {}",
                        num_nodes, self.m
                    )));
                }
                Ok(())
            }
        }
    }
}

/// A configuration probability outside [0, 1] is a configuration error
pub(crate) fn check_probability(name: &'static str, value: f64) -> SimResult<()> {
    check_unit_interval(name, value)
        .map(|_| ())
        .map_err(|_| {
            SimError::Configuration(format!(
                "{} must be a probability in [0, 1], got {}",
                name, value
            ))
        })
}

/// Complete run configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Run parameters
    #[serde(default)]
    pub simulation: SimulationSettings,
    /// Network generator settings
    #[serde(default)]
    pub topology: TopologySettings,
    /// Export settings
    #[serde(default)]
    pub output: OutputSettings,
}

/// Run parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Number of agents (network nodes)
    pub num_agents: usize,
    /// Number of time steps to run
    pub num_steps: u64,
    /// Seed for every random stream in the run
    pub seed: u64,
    /// Probability that a holder passes an item to one unaware neighbor per step
    pub share_probability: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            num_agents: 50,
            num_steps: 15,
            seed: 42,
            share_probability: 0.3,
        }
    }
}

/// Network generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologySettings {
    pub kind: TopologyKind,
    /// Edge probability (random) or rewire probability (small_world)
    pub p: f64,
    /// Ring degree for small_world
    pub k: usize,
    /// Edges per new node for scale_free
    pub m: usize,
}

impl Default for TopologySettings {
    fn default() -> Self {
        let params = TopologyParams::default();
        Self {
            kind: TopologyKind::default(),
            p: params.p,
            k: params.k,
            m: params.m,
        }
    }
}

impl TopologySettings {
    pub fn params(&self) -> TopologyParams {
        TopologyParams {
            p: self.p,
            k: self.k,
            m: self.m,
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the export files are written to
    pub dir: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: "output".to_string(),
        }
    }
}

impl SimConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SimError::ConfigFile(format!("{}: {}", path.display(), e)))?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> SimResult<Self> {
        toml::from_str(content).map_err(|e| SimError::ConfigFile(e.to_string()))
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> SimResult<String> {
        toml::to_string_pretty(self).map_err(|e| SimError::ConfigFile(e.to_string()))
    }

    /// Replace the fields set in `overrides`, leaving the rest untouched.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        let sim = &mut self.simulation;
        if let Some(num_agents) = overrides.num_agents {
            sim.num_agents = num_agents;
        }
        if let Some(num_steps) = overrides.num_steps {
            sim.num_steps = num_steps;
        }
        if let Some(seed) = overrides.seed {
            sim.seed = seed;
        }
        if let Some(share_probability) = overrides.share_probability {
            sim.share_probability = share_probability;
        }

        let topology = &mut self.topology;
        if let Some(kind) = overrides.kind {
            topology.kind = kind;
        }
        if let Some(p) = overrides.p {
            topology.p = p;
        }
        if let Some(k) = overrides.k {
            topology.k = k;
        }
        if let Some(m) = overrides.m {
            topology.m = m;
        }

        if let Some(dir) = overrides.output_dir {
            self.output.dir = dir;
        }
    }

    /// Checks every parameter before anything is built.
    pub fn validate(&self) -> SimResult<()> {
        let sim = &self.simulation;
        self.topology.params().validate(self.topology.kind, sim.num_agents)?;
        check_probability("share_probability", sim.share_probability)
    }
}

/// Individual settings supplied on the command line.
/// `None` keeps the value from the file or the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub num_agents: Option<usize>,
    pub num_steps: Option<u64>,
    pub seed: Option<u64>,
    pub share_probability: Option<f64>,
    pub kind: Option<TopologyKind>,
    pub p: Option<f64>,
    pub k: Option<usize>,
    pub m: Option<usize>,
    pub output_dir: Option<String>,
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Information propagation simulation

[simulation]
num_agents = 50
num_steps = 15
seed = 42
share_probability = 0.3

[topology]
# random | small_world | scale_free
kind = "small_world"
p = 0.1
k = 4
m = 2

[output]
dir = "output"
"#
    .to_string()
}

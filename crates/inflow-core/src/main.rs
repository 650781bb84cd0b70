//! INFLOW - Information Propagation Simulation
//!
//! Builds a network, injects one information item at a random node and
//! records how far it spreads over a fixed number of steps.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use inflow_core::{
    build_network, output, pick_origin, ConfigOverrides, InformationItem, PropagationEngine, SimConfig,
    SimResult, TopologyKind,
};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "inflow")]
#[command(about = "INFLOW - Information Propagation Simulation")]
struct Args {
    /// TOML configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of agents in the network
    #[arg(long)]
    agents: Option<usize>,

    /// Number of simulation time steps
    #[arg(long)]
    steps: Option<u64>,

    /// Network topology: random, small_world or scale_free
    #[arg(long)]
    topology: Option<TopologyKind>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Uniform sharing probability per step
    #[arg(long = "share-prob")]
    share_prob: Option<f64>,

    /// Edge probability (random) or rewire probability (small_world)
    #[arg(long)]
    p: Option<f64>,

    /// Ring degree for small_world
    #[arg(long)]
    k: Option<usize>,

    /// Edges per new node for scale_free
    #[arg(long)]
    m: Option<usize>,

    /// Directory for output files
    #[arg(long = "output-dir")]
    output_dir: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Skip writing output files
    #[arg(long)]
    no_export: bool,
}

impl Args {
    /// Load the config file (or defaults) and apply flag overrides
    fn into_config(self) -> SimResult<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_file(path)?,
            None => SimConfig::default(),
        };

        config.apply_overrides(ConfigOverrides {
            num_agents: self.agents,
            num_steps: self.steps,
            seed: self.seed,
            share_probability: self.share_prob,
            kind: self.topology,
            p: self.p,
            k: self.k,
            m: self.m,
            output_dir: self.output_dir,
        });
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let print_config = args.print_config;
    let export = !args.no_export;

    let result = args.into_config().and_then(|config| {
        if print_config {
            print!("{}", config.to_toml()?);
            return Ok(());
        }
        run(&config, export)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &SimConfig, export: bool) -> SimResult<()> {
    let sim = &config.simulation;
    let topology = config.topology.kind;

    info!(
        "building '{}' network with {} agents",
        topology, sim.num_agents
    );
    let (graph, agents) = build_network(config)?;
    let summary = graph.summary(topology.as_str());
    info!(
        "nodes: {} | edges: {} | avg degree: {} | connected: {}",
        summary.num_nodes, summary.num_edges, summary.avg_degree, summary.is_connected
    );

    // A single high-emotion, low-truth item from a random origin node
    let origin = pick_origin(&graph, sim.seed);
    let item = InformationItem::new(0, 0.2, 0.85, 0.5, origin);

    let mut engine = PropagationEngine::new(&graph, agents, sim.seed, sim.share_probability)?;
    engine.inject(item)?;
    engine.run(sim.num_steps);

    if export {
        output::save_outputs(&engine, topology.as_str(), &config.output.dir)?;
    }
    Ok(())
}

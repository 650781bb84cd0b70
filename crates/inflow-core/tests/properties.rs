//! Structural and propagation invariants over generated networks.

use proptest::prelude::*;

use inflow_core::topology::ring_lattice;
use inflow_core::{
    build_network, generate, InformationItem, PropagationEngine, SimConfig, SpreadRecord,
    TopologyKind, TopologyParams,
};

fn run_log(config: &SimConfig, origin: usize) -> (Vec<SpreadRecord>, Vec<usize>) {
    let (graph, agents) = build_network(config).unwrap();
    let sim = &config.simulation;
    let mut engine = PropagationEngine::new(&graph, agents, sim.seed, sim.share_probability).unwrap();
    engine
        .inject(InformationItem::new(0, 0.2, 0.85, 0.5, origin))
        .unwrap();
    engine.run(sim.num_steps);

    let received = engine
        .agent_records()
        .iter()
        .map(|r| r.received_count)
        .collect();
    (engine.spread_log().to_vec(), received)
}

#[test]
fn test_small_world_degree_conservation() {
    let params = TopologyParams { p: 0.3, k: 6, m: 2 };
    let lattice = ring_lattice(40, 6);
    for node in lattice.nodes() {
        assert_eq!(lattice.degree(node), 6);
    }

    for seed in 0..10 {
        let graph = generate(40, TopologyKind::SmallWorld, seed, &params).unwrap();
        assert_eq!(graph.num_edges(), lattice.num_edges());
        assert_eq!(graph.num_edges(), 40 * 6 / 2);
    }
}

#[test]
fn test_scale_free_edge_count_law() {
    for m in 1..5 {
        let params = TopologyParams { p: 0.1, k: 4, m };
        let graph = generate(60, TopologyKind::ScaleFree, 7, &params).unwrap();
        assert_eq!(graph.num_edges(), m * (m - 1) / 2 + m * (60 - m));
    }
}

#[test]
fn test_identical_runs_produce_identical_logs() {
    for kind in TopologyKind::ALL {
        let mut config = SimConfig::default();
        config.topology.kind = kind;
        config.simulation.num_steps = 20;

        let (log1, received1) = run_log(&config, 3);
        let (log2, received2) = run_log(&config, 3);
        assert_eq!(log1, log2);
        assert_eq!(received1, received2);
    }
}

#[test]
fn test_network_summary_from_config() {
    let config = SimConfig::default();
    let (graph, agents) = build_network(&config).unwrap();
    let summary = graph.summary("small_world");

    assert_eq!(summary.num_nodes, 50);
    assert_eq!(summary.num_edges, 100);
    assert_eq!(summary.avg_degree, 4.0);
    assert_eq!(agents.len(), 50);
}

#[test]
fn test_build_network_rejects_invalid_config() {
    let mut config = SimConfig::default();
    config.topology.kind = TopologyKind::ScaleFree;
    config.topology.m = 50;
    assert!(build_network(&config).unwrap_err().is_configuration());
}

fn topology_kind() -> impl Strategy<Value = TopologyKind> {
    prop_oneof![
        Just(TopologyKind::Random),
        Just(TopologyKind::SmallWorld),
        Just(TopologyKind::ScaleFree),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_spread_is_monotone_and_bounded(
        kind in topology_kind(),
        num_agents in 8usize..60,
        seed in any::<u64>(),
        share_probability in 0.0f64..=1.0,
        steps in 0u64..25,
    ) {
        let mut config = SimConfig::default();
        config.topology.kind = kind;
        config.simulation.num_agents = num_agents;
        config.simulation.seed = seed;
        config.simulation.share_probability = share_probability;

        let (graph, agents) = build_network(&config).unwrap();
        let mut engine = PropagationEngine::new(&graph, agents, seed, share_probability).unwrap();
        engine.inject(InformationItem::new(0, 0.5, 0.5, 0.5, seed as usize % num_agents)).unwrap();

        let mut previous_count = 1;
        let mut previous_received: Vec<usize> =
            engine.agent_records().iter().map(|r| r.received_count).collect();

        for _ in 0..steps {
            engine.step();

            let count = engine.item(0).unwrap().spread_count();
            prop_assert!(count >= previous_count);
            prop_assert!(count <= num_agents);
            previous_count = count;

            let received: Vec<usize> =
                engine.agent_records().iter().map(|r| r.received_count).collect();
            for (before, after) in previous_received.iter().zip(&received) {
                prop_assert!(after >= before);
            }
            // spread_count is exactly the number of aware agents
            prop_assert_eq!(received.iter().sum::<usize>(), count);
            previous_received = received;
        }

        prop_assert_eq!(engine.spread_log().len() as u64, steps);
    }

    #[test]
    fn prop_generation_is_deterministic(
        kind in topology_kind(),
        num_agents in 8usize..80,
        seed in any::<u64>(),
    ) {
        let params = TopologyParams::default();
        let a = generate(num_agents, kind, seed, &params).unwrap();
        let b = generate(num_agents, kind, seed, &params).unwrap();
        prop_assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
        for (u, v) in a.edges() {
            prop_assert!(u < v);
        }
    }
}

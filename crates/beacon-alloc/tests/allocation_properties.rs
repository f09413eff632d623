//! Property tests for graph construction, ordering and greedy coloring.

use beacon_alloc::{
    allocate, color_greedy, degree_order, haversine_km, is_proper, AllocConfig, Channel,
    InterferenceGraph, Node, Outcome, Palette,
};
use proptest::prelude::*;
use std::collections::HashSet;

/// Nodes scattered over a patch of roughly 5 km x 5 km near the equator.
fn arb_nodes(max: usize) -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec((0.0f64..0.05, 0.0f64..0.05), 1..max).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (lat, lon))| Node::new(format!("n{}", i), lat, lon))
            .collect()
    })
}

fn arb_palette() -> impl Strategy<Value = Palette> {
    prop::collection::hash_set(1u32..50, 1..6)
        .prop_map(|set| Palette::new(set).expect("distinct positive channels"))
}

proptest! {
    #[test]
    fn edge_iff_strictly_closer_than_radius(nodes in arb_nodes(30), radius in 0.1f64..3.0) {
        let graph = InterferenceGraph::build(&nodes, radius);
        prop_assert_eq!(graph.len(), nodes.len());
        graph.check_invariants().unwrap();

        for a in 0..nodes.len() {
            for b in 0..nodes.len() {
                if a == b {
                    prop_assert!(!graph.are_adjacent(a, b));
                    continue;
                }
                let close = haversine_km(nodes[a].position(), nodes[b].position()) < radius;
                prop_assert_eq!(graph.are_adjacent(a, b), close);
                prop_assert_eq!(graph.are_adjacent(a, b), graph.are_adjacent(b, a));
            }
        }
    }

    #[test]
    fn order_is_stable_degree_descending(nodes in arb_nodes(30), radius in 0.1f64..3.0) {
        let graph = InterferenceGraph::build(&nodes, radius);
        let order = degree_order(&graph);
        prop_assert_eq!(order.len(), nodes.len());

        for w in order.windows(2) {
            let (da, db) = (graph.degree(w[0]), graph.degree(w[1]));
            prop_assert!(da >= db);
            if da == db {
                prop_assert!(w[0] < w[1], "equal-degree vertices out of input order");
            }
        }
    }

    #[test]
    fn coloring_is_proper(nodes in arb_nodes(30), radius in 0.1f64..3.0, palette in arb_palette()) {
        let graph = InterferenceGraph::build(&nodes, radius);
        let order = degree_order(&graph);
        let outcomes = color_greedy(&graph, &order, &palette).unwrap();
        prop_assert!(is_proper(&graph, &outcomes));
        for o in &outcomes {
            if let Some(c) = o.channel() {
                prop_assert!(palette.contains(c));
            }
        }
    }

    #[test]
    fn every_choice_is_greedy(nodes in arb_nodes(30), radius in 0.1f64..3.0, palette in arb_palette()) {
        let graph = InterferenceGraph::build(&nodes, radius);
        let order = degree_order(&graph);
        let outcomes = color_greedy(&graph, &order, &palette).unwrap();

        let mut position = vec![0; order.len()];
        for (i, &v) in order.iter().enumerate() {
            position[v] = i;
        }

        for v in 0..graph.len() {
            // Channels held by neighbors decided before v
            let used: HashSet<Channel> = graph
                .neighbors(v)
                .iter()
                .filter(|&&u| position[u] < position[v])
                .filter_map(|&u| outcomes[u].channel())
                .collect();
            let expected = palette
                .iter()
                .find(|c| !used.contains(c))
                .map_or(Outcome::Unassignable, Outcome::Assigned);
            prop_assert_eq!(outcomes[v], expected);
        }
    }

    #[test]
    fn no_failures_when_palette_exceeds_degree(nodes in arb_nodes(30), radius in 0.1f64..3.0) {
        let graph = InterferenceGraph::build(&nodes, radius);
        let size = graph.max_degree() as u32 + 1;
        let config = AllocConfig::new(radius, Palette::new(1..=size).unwrap()).unwrap();
        let allocation = allocate(&nodes, &config).unwrap();
        prop_assert!(allocation.is_complete());
    }

    #[test]
    fn allocation_is_deterministic(nodes in arb_nodes(25), radius in 0.1f64..3.0, palette in arb_palette()) {
        let config = AllocConfig::new(radius, palette).unwrap();
        let first = allocate(&nodes, &config).unwrap();
        let second = allocate(&nodes, &config).unwrap();
        prop_assert_eq!(format!("{:?}", first), format!("{:?}", second));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn clique_exhaustion(p in 1usize..8) {
        // p + 1 nodes within a few meters of each other
        let nodes: Vec<Node> = (0..=p)
            .map(|i| Node::new(format!("c{}", i), 0.0, i as f64 * 1e-5))
            .collect();
        let config = AllocConfig::new(1.0, Palette::new(1..=p as u32).unwrap()).unwrap();
        let allocation = allocate(&nodes, &config).unwrap();

        let failed: Vec<&str> = allocation.unassignable().collect();
        let last = format!("c{}", p);
        prop_assert_eq!(failed, vec![last.as_str()]);

        let channels: HashSet<Channel> = allocation.assigned().map(|(_, c)| c).collect();
        prop_assert_eq!(channels.len(), p);
    }
}

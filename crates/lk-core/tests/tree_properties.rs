//! Property tests for tree building, path selection, and sequencing.

use std::sync::Arc;

use lk_core::{
    Choice, ContentTable, NodeId, ScenarioTree, ScriptedChance, Sign, build_scenario_tree,
    build_sequence, resolve_outcome, select_path,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded_tree(seed: u64) -> ScenarioTree {
    build_scenario_tree(
        &ContentTable::builtin().unwrap(),
        &mut StdRng::seed_from_u64(seed),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn every_node_has_zero_or_two_children(seed in any::<u64>()) {
        let tree = seeded_tree(seed);
        prop_assert_eq!(tree.depth(), 4);
        prop_assert_eq!(tree.len(), 15);
        for (id, node) in tree.iter() {
            match node.children() {
                Some((left, right)) => {
                    prop_assert!(node.depth() < 4);
                    prop_assert_eq!(tree.node(left).unwrap().parent(), Some(id));
                    prop_assert_eq!(tree.node(right).unwrap().parent(), Some(id));
                }
                None => prop_assert_eq!(node.depth(), 4),
            }
        }
    }

    #[test]
    fn luck_deltas_in_range(seed in any::<u64>()) {
        let tree = seeded_tree(seed);
        for (_, node) in tree.iter() {
            let delta = node.scenario().luck_delta().value();
            prop_assert!((1..=20).contains(&delta), "delta {} out of range", delta);
        }
    }

    #[test]
    fn paths_follow_edges(tree_seed in any::<u64>(), path_seed in any::<u64>()) {
        let tree = seeded_tree(tree_seed);
        let path = select_path(&tree, &mut StdRng::seed_from_u64(path_seed));
        prop_assert_eq!(path.len(), tree.depth());
        prop_assert_eq!(path.nodes()[0], NodeId::ROOT);
        for pair in path.nodes().windows(2) {
            prop_assert!(tree.is_edge(pair[0], pair[1]));
        }
        let last = *path.nodes().last().unwrap();
        prop_assert!(tree.node(last).unwrap().is_leaf());
    }

    #[test]
    fn sequence_round_trips_path(tree_seed in any::<u64>(), path_seed in any::<u64>()) {
        let tree = seeded_tree(tree_seed);
        let path = select_path(&tree, &mut StdRng::seed_from_u64(path_seed));
        let expected = path.scenarios().to_vec();
        let playthrough = build_sequence(Some(path.into_scenarios())).unwrap();
        let list = playthrough.to_list();
        prop_assert_eq!(list.len(), expected.len());
        for (a, b) in list.iter().zip(&expected) {
            prop_assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn resolution_delta_matches_scenario(seed in any::<u64>(), choice in 1u8..=2) {
        let tree = seeded_tree(seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let choice = Choice::try_from(choice).unwrap();
        for (_, node) in tree.iter() {
            let scenario = node.scenario();
            let r = resolve_outcome(scenario, choice, &mut rng);
            prop_assert_eq!(r.delta, scenario.luck_delta());
            let option = scenario.choice(choice);
            match r.sign() {
                Sign::Positive => prop_assert_eq!(r.text(), option.positive.as_str()),
                Sign::Negative => prop_assert_eq!(r.text(), option.negative.as_str()),
            }
        }
    }
}

#[test]
fn forced_left_walk_is_leftmost_spine() {
    let tree = seeded_tree(1);
    let path = select_path(&tree, &mut ScriptedChance::always(true, 1));

    let root = tree.root();
    let (left, _) = tree.children(root).unwrap();
    let (left_left, _) = tree.children(left).unwrap();
    let (leftmost_leaf, _) = tree.children(left_left).unwrap();
    assert_eq!(path.nodes(), &[root, left, left_left, leftmost_leaf]);

    let mut playthrough = build_sequence(Some(path.into_scenarios())).unwrap();
    for id in [root, left, left_left, leftmost_leaf] {
        let current = playthrough.current().unwrap();
        assert_eq!(current, tree.scenario(id).unwrap().as_ref());
        playthrough.advance();
    }
    assert!(playthrough.current().is_none());
}

#[test]
fn separate_builds_share_topology_not_deltas() {
    let a = seeded_tree(1);
    let b = seeded_tree(2);
    assert_eq!(a.len(), b.len());
    for ((ia, na), (ib, nb)) in a.iter().zip(b.iter()) {
        assert_eq!(ia, ib);
        assert_eq!(na.children(), nb.children());
        assert_eq!(na.scenario().prompt(), nb.scenario().prompt());
    }
    let deltas_a: Vec<i32> = a.iter().map(|(_, n)| n.scenario().luck_delta().value()).collect();
    let deltas_b: Vec<i32> = b.iter().map(|(_, n)| n.scenario().luck_delta().value()).collect();
    assert_ne!(deltas_a, deltas_b);
}

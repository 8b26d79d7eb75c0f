//! Scenario generation integration tests.

use block_world::core::{is_goal_reached, Block, GameRng, GoalPolicy, ScenarioConfig};
use block_world::rules::{Arm, BlockRules, Position};
use block_world::scenario::{generate_goal, generate_random, generate_scenario};
use block_world::solver::{solve, SolverConfig};
use block_world::BlockWorldError;
use proptest::prelude::*;

fn sorted_blocks(blocks: impl Iterator<Item = Block>) -> Vec<Block> {
    let mut v: Vec<Block> = blocks.collect();
    v.sort();
    v
}

// =============================================================================
// Configuration Errors
// =============================================================================

#[test]
fn test_too_many_blocks_rejected() {
    let config = ScenarioConfig::new(10, 1, 2, 4);
    let mut rng = GameRng::new(1);

    assert!(matches!(
        generate_scenario(&config, &mut rng),
        Err(BlockWorldError::CapacityExceeded { block_count: 10, stack_count: 2, capacity: 4 })
    ));
}

#[test]
fn test_grouped_goal_rejected_for_classic_shape() {
    // Six distinct values cannot each get a stack out of three
    let config = ScenarioConfig::classic().with_goal_policy(GoalPolicy::GroupedByValue);
    let mut rng = GameRng::new(1);

    assert!(matches!(
        generate_scenario(&config, &mut rng),
        Err(BlockWorldError::GroupingImpossible(_))
    ));
}

// =============================================================================
// Goal Policies
// =============================================================================

#[test]
fn test_grouped_goal_on_tubes() {
    let config = ScenarioConfig::tubes();
    let mut rng = GameRng::new(8);

    let initial = generate_random(&config, &mut rng).unwrap();
    let goal = generate_goal(GoalPolicy::GroupedByValue, &initial, &config, &mut rng).unwrap();

    assert_eq!(goal.stack_count(), 4);
    assert_eq!(
        sorted_blocks(goal.blocks()),
        sorted_blocks(initial.blocks())
    );
    for stack in goal.stacks() {
        let first = stack.blocks()[0];
        assert!(stack.blocks().iter().all(|&b| b == first));
    }
}

#[test]
fn test_same_seed_same_scenario() {
    let config = ScenarioConfig::classic();

    let a = generate_scenario(&config, &mut GameRng::new(2024)).unwrap();
    let b = generate_scenario(&config, &mut GameRng::new(2024)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_generated_goals_are_reachable() {
    let config = ScenarioConfig::classic();
    let mut rng = GameRng::new(5);

    for _ in 0..5 {
        let scenario = generate_scenario(&config, &mut rng).unwrap();
        let rules = BlockRules::new(scenario.goal.clone());
        let start = Position::new(scenario.initial.clone(), Arm::EmptyHanded);

        let result = solve(&rules, &start, &SolverConfig::default());
        assert!(result.is_solved(), "goal {} unreachable from {}", scenario.goal, scenario.initial);
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every valid configuration places each alphabet block exactly once.
    #[test]
    fn prop_initial_matches_alphabet(
        seed in any::<u64>(),
        distinct in 1u8..8,
        copies in 1usize..3,
        stacks in 1usize..5,
        capacity in 1usize..6,
    ) {
        let config = ScenarioConfig::new(distinct, copies, stacks, capacity);
        prop_assume!(config.validate().is_ok());

        let world = generate_random(&config, &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(world.stack_count(), stacks);
        prop_assert!(world.within_capacity());
        prop_assert_eq!(sorted_blocks(world.blocks()), config.alphabet());
    }

    /// Independent goals share the initial shape and block multiset.
    #[test]
    fn prop_independent_goal_same_multiset(seed in any::<u64>()) {
        let config = ScenarioConfig::classic();
        let scenario = generate_scenario(&config, &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(scenario.goal.stack_count(), scenario.initial.stack_count());
        prop_assert_eq!(scenario.goal.block_counts(), scenario.initial.block_counts());
        prop_assert!(!is_goal_reached(&scenario.initial, &scenario.goal));
    }

    /// Grouping by value preserves the initial block multiset.
    #[test]
    fn prop_grouped_goal_same_multiset(seed in any::<u64>()) {
        let config = ScenarioConfig::tubes();
        let mut rng = GameRng::new(seed);

        let initial = generate_random(&config, &mut rng).unwrap();
        let goal = generate_goal(GoalPolicy::GroupedByValue, &initial, &config, &mut rng).unwrap();

        prop_assert_eq!(goal.block_counts(), initial.block_counts());
    }
}

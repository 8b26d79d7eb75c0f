//! Random scenario generation.
//!
//! ## Placement
//!
//! The alphabet is shuffled, then each block goes to a random stack. A
//! full stack costs an attempt; after `max_placement_attempts` misses the
//! block goes to the first stack with room. The fallback always succeeds
//! because the config guarantees enough total capacity.
//!
//! ## Goals
//!
//! See `GoalPolicy`. The independent goal is re-rolled while it equals
//! the initial arrangement, up to `max_goal_attempts` times.

use serde::{Deserialize, Serialize};

use crate::core::{is_goal_reached, Block, GameRng, GoalPolicy, ScenarioConfig, WorldState};
use crate::error::{BlockWorldError, Result};

/// An initial arrangement paired with its goal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub initial: WorldState,
    pub goal: WorldState,
}

/// Generate a random arrangement of the configured alphabet.
pub fn generate_random(config: &ScenarioConfig, rng: &mut GameRng) -> Result<WorldState> {
    config.validate()?;

    let mut blocks = config.alphabet();
    rng.shuffle(&mut blocks);

    let mut world = WorldState::empty(config.stack_count, config.capacity);
    let mut fallbacks = 0usize;

    for block in blocks {
        let index = match random_open_stack(&world, config.max_placement_attempts, rng) {
            Some(index) => index,
            None => {
                fallbacks += 1;
                first_open_stack(&world).ok_or(BlockWorldError::CapacityExceeded {
                    block_count: config.block_count(),
                    stack_count: config.stack_count,
                    capacity: config.capacity,
                })?
            }
        };

        if let Some(stack) = world.stack_mut(index) {
            stack.push(block);
        }
    }

    if fallbacks > 0 {
        log::warn!(
            "Random placement fell back to the first open stack for {} block(s)",
            fallbacks
        );
    }

    Ok(world)
}

/// Derive a goal arrangement for `initial` according to `policy`.
pub fn generate_goal(
    policy: GoalPolicy,
    initial: &WorldState,
    config: &ScenarioConfig,
    rng: &mut GameRng,
) -> Result<WorldState> {
    match policy {
        GoalPolicy::Independent => independent_goal(initial, config, rng),
        GoalPolicy::GroupedByValue => grouped_goal(initial),
    }
}

/// Generate an initial arrangement and its goal.
///
/// ```
/// use block_world::core::{GameRng, ScenarioConfig};
/// use block_world::scenario::generate_scenario;
///
/// let mut rng = GameRng::new(42);
/// let scenario = generate_scenario(&ScenarioConfig::classic(), &mut rng).unwrap();
///
/// assert_eq!(scenario.initial.block_count(), 6);
/// assert_eq!(scenario.goal.block_count(), 6);
/// ```
pub fn generate_scenario(config: &ScenarioConfig, rng: &mut GameRng) -> Result<Scenario> {
    let initial = generate_random(config, rng)?;
    let goal = generate_goal(config.goal_policy, &initial, config, rng)?;

    log::info!(
        "Generated scenario: initial={} goal={} policy={:?}",
        initial,
        goal,
        config.goal_policy
    );

    Ok(Scenario { initial, goal })
}

fn random_open_stack(world: &WorldState, attempts: usize, rng: &mut GameRng) -> Option<usize> {
    for _ in 0..attempts {
        let index = rng.gen_range_usize(0..world.stack_count());
        if world.stack(index).is_some_and(|s| !s.is_full()) {
            return Some(index);
        }
    }
    None
}

fn first_open_stack(world: &WorldState) -> Option<usize> {
    world.stacks().iter().position(|s| !s.is_full())
}

fn independent_goal(
    initial: &WorldState,
    config: &ScenarioConfig,
    rng: &mut GameRng,
) -> Result<WorldState> {
    let mut goal = generate_random(config, rng)?;

    let mut attempts = 1;
    while is_goal_reached(initial, &goal) && attempts < config.max_goal_attempts {
        goal = generate_random(config, rng)?;
        attempts += 1;
    }

    if is_goal_reached(initial, &goal) {
        log::warn!(
            "Goal still equals the initial arrangement after {} attempt(s)",
            attempts
        );
    }

    Ok(goal)
}

fn grouped_goal(initial: &WorldState) -> Result<WorldState> {
    // Distinct values in order of first appearance, with multiplicity
    let mut groups: Vec<(Block, usize)> = Vec::new();
    for block in initial.blocks() {
        match groups.iter_mut().find(|(value, _)| *value == block) {
            Some((_, count)) => *count += 1,
            None => groups.push((block, 1)),
        }
    }

    if groups.len() > initial.stack_count() {
        return Err(BlockWorldError::GroupingImpossible(format!(
            "{} distinct values but only {} stacks",
            groups.len(),
            initial.stack_count()
        )));
    }
    if let Some((value, count)) = groups.iter().find(|(_, count)| *count > initial.capacity()) {
        return Err(BlockWorldError::GroupingImpossible(format!(
            "{} copies of block {} exceed capacity {}",
            count,
            value,
            initial.capacity()
        )));
    }

    let mut stacks: Vec<Vec<Block>> = groups
        .into_iter()
        .map(|(value, count)| vec![value; count])
        .collect();
    stacks.resize(initial.stack_count(), Vec::new());

    WorldState::from_stacks(initial.capacity(), stacks)
}

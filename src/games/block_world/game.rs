//! The block world controller.

use rustc_hash::FxHashMap;

use crate::core::{
    is_goal_reached, ActionLog, ArmAction, Block, GameRng, LogEvent, ScenarioConfig, WorldState,
};
use crate::error::{BlockWorldError, Result};
use crate::rules::{apply_interaction, Arm, BlockRules, Position};
use crate::scenario::{generate_scenario, Scenario};
use crate::solver::{solve, SolverConfig};

use super::clock::{format_clock, TimeRating};
use super::snapshot::GameSnapshot;

/// Arm status shown by renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArmStatus {
    /// Nothing held.
    Idle,
    /// Carrying a block.
    Executing,
}

/// What a single interaction did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractOutcome {
    /// The arm action, `None` for a no-op.
    pub action: Option<ArmAction>,

    /// True if a block was placed.
    pub moved: bool,

    /// True if the game is complete after this interaction.
    pub completed: bool,
}

/// Owns one game: world, goal, arm, counters, log and RNG.
///
/// All mutation goes through `interact` (or the `begin_interaction` /
/// `finish_interaction` pair), `tick` and `restart`.
#[derive(Clone, Debug)]
pub struct BlockWorld {
    config: ScenarioConfig,
    fixed: Option<Scenario>,
    rng: GameRng,
    world: WorldState,
    goal: WorldState,
    arm: Arm,
    moves: u32,
    elapsed: u64,
    completed: bool,
    arm_position: usize,
    pending: Option<usize>,
    log: ActionLog,
}

/// Builder for creating a `BlockWorld`.
#[derive(Clone, Debug, Default)]
pub struct BlockWorldBuilder {
    config: Option<ScenarioConfig>,
    scenario: Option<Scenario>,
}

impl BlockWorldBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given scenario configuration.
    ///
    /// Defaults to `ScenarioConfig::classic()`, or to the shape of the
    /// fixed scenario when one is given.
    #[must_use]
    pub fn config(mut self, config: ScenarioConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Start from a fixed arrangement instead of a generated one.
    ///
    /// `restart` returns to this same arrangement. Both worlds must hold
    /// the configured alphabet in the configured shape.
    #[must_use]
    pub fn scenario(mut self, initial: WorldState, goal: WorldState) -> Self {
        self.scenario = Some(Scenario { initial, goal });
        self
    }

    /// Build the game.
    pub fn build(self, seed: u64) -> Result<BlockWorld> {
        let config = match (self.config, &self.scenario) {
            (Some(config), _) => config,
            (None, Some(scenario)) => config_for(&scenario.initial)?,
            (None, None) => ScenarioConfig::default(),
        };
        config.validate()?;
        if let Some(scenario) = &self.scenario {
            check_world(&config, &scenario.initial, None)?;
            check_world(&config, &scenario.goal, None)?;
        }

        let mut game = BlockWorld {
            config,
            fixed: self.scenario,
            rng: GameRng::new(seed),
            world: WorldState::empty(0, 0),
            goal: WorldState::empty(0, 0),
            arm: Arm::EmptyHanded,
            moves: 0,
            elapsed: 0,
            completed: false,
            arm_position: 0,
            pending: None,
            log: ActionLog::new(),
        };
        game.restart()?;
        Ok(game)
    }
}

impl BlockWorld {
    /// Create a game from a configuration and seed.
    pub fn new(config: ScenarioConfig, seed: u64) -> Result<Self> {
        BlockWorldBuilder::new().config(config).build(seed)
    }

    /// Start a new game: fresh scenario, empty arm, counters reset.
    ///
    /// A fixed scenario is restored as-is; otherwise a new one is drawn
    /// from the RNG, which keeps advancing across restarts.
    pub fn restart(&mut self) -> Result<()> {
        let scenario = match &self.fixed {
            Some(scenario) => scenario.clone(),
            None => generate_scenario(&self.config, &mut self.rng)?,
        };

        self.world = scenario.initial;
        self.goal = scenario.goal;
        self.arm = Arm::EmptyHanded;
        self.moves = 0;
        self.elapsed = 0;
        self.completed = false;
        self.arm_position = 1.min(self.world.stack_count().saturating_sub(1));
        self.pending = None;
        self.log = ActionLog::new();

        log::info!("Game started: world={} goal={}", self.world, self.goal);
        Ok(())
    }

    // === Interaction ===

    /// Interact with a stack: pick from it or place onto it.
    ///
    /// Ignored while another interaction is in progress or after
    /// completion.
    pub fn interact(&mut self, stack_index: usize) -> InteractOutcome {
        if !self.begin_interaction(stack_index) {
            return self.noop();
        }
        self.finish_interaction()
    }

    /// Start an interaction and lock out others until it finishes.
    ///
    /// Renderers call this when the arm starts moving toward the stack and
    /// `finish_interaction` once the animation ends. Returns false if the
    /// interaction was refused.
    pub fn begin_interaction(&mut self, stack_index: usize) -> bool {
        if self.completed || self.pending.is_some() {
            return false;
        }
        if stack_index < self.world.stack_count() {
            self.arm_position = stack_index;
        }
        self.pending = Some(stack_index);
        true
    }

    /// Resolve the interaction started by `begin_interaction`.
    pub fn finish_interaction(&mut self) -> InteractOutcome {
        let Some(stack_index) = self.pending.take() else {
            return self.noop();
        };
        if self.completed {
            return self.noop();
        }

        let Some(action) = apply_interaction(&mut self.world, &mut self.arm, stack_index) else {
            return self.noop();
        };

        let moved = action.is_place();
        if moved {
            self.moves += 1;
        }
        self.log.record(LogEvent::Arm(action), self.moves);

        if moved && is_goal_reached(&self.world, &self.goal) {
            self.completed = true;
            self.log.record(LogEvent::GoalReached, self.moves);
            log::info!(
                "Goal reached in {} moves ({})",
                self.moves,
                format_clock(self.elapsed)
            );
        }

        InteractOutcome {
            action: Some(action),
            moved,
            completed: self.completed,
        }
    }

    /// True while an interaction is in progress.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    fn noop(&self) -> InteractOutcome {
        InteractOutcome {
            action: None,
            moved: false,
            completed: self.completed,
        }
    }

    // === Timer ===

    /// Advance the elapsed timer by one second.
    ///
    /// The timer runs from the first move until completion. Returns true
    /// if the timer advanced.
    pub fn tick(&mut self) -> bool {
        if self.completed || self.moves == 0 {
            return false;
        }
        self.elapsed += 1;
        true
    }

    /// Elapsed seconds.
    #[must_use]
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Elapsed time as `mm:ss`.
    #[must_use]
    pub fn clock(&self) -> String {
        format_clock(self.elapsed)
    }

    /// Rating for the finishing time, once complete.
    #[must_use]
    pub fn rating(&self) -> Option<TimeRating> {
        self.completed.then(|| TimeRating::for_seconds(self.elapsed))
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    #[must_use]
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    #[must_use]
    pub fn goal(&self) -> &WorldState {
        &self.goal
    }

    #[must_use]
    pub fn arm(&self) -> Arm {
        self.arm
    }

    /// The held block, if any.
    #[must_use]
    pub fn held(&self) -> Option<Block> {
        self.arm.held()
    }

    #[must_use]
    pub fn status(&self) -> ArmStatus {
        if self.arm.is_holding() {
            ArmStatus::Executing
        } else {
            ArmStatus::Idle
        }
    }

    /// Number of successful placements.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Index of the stack the arm last moved to.
    #[must_use]
    pub fn arm_position(&self) -> usize {
        self.arm_position
    }

    /// Recent events, newest first.
    #[must_use]
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Blocks in stacks plus the held block.
    #[must_use]
    pub fn block_total(&self) -> usize {
        self.world.block_count() + usize::from(self.arm.is_holding())
    }

    /// Fixed-length encoding of the world and held block.
    #[must_use]
    pub fn observation(&self) -> Vec<i64> {
        self.world.encode(self.held())
    }

    /// Current world and arm as a rules position.
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.world.clone(), self.arm)
    }

    // === Hints ===

    /// Next stack to interact with on a shortest path to the goal.
    ///
    /// `None` when complete or when no plan is found within the default
    /// search budget.
    #[must_use]
    pub fn hint(&self) -> Option<usize> {
        self.hint_with(&SolverConfig::default())
    }

    /// Like `hint`, with an explicit search budget.
    #[must_use]
    pub fn hint_with(&self, solver: &SolverConfig) -> Option<usize> {
        if self.completed {
            return None;
        }
        let rules = BlockRules::new(self.goal.clone());
        let result = solve(&rules, &self.position(), solver);
        result.plan.and_then(|plan| plan.first().copied())
    }

    // === Snapshots ===

    /// Capture the full game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            world: self.world.clone(),
            goal: self.goal.clone(),
            arm: self.arm,
            moves: self.moves,
            elapsed: self.elapsed,
            completed: self.completed,
            arm_position: self.arm_position,
            log: self.log.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// The world (with the held block) and the goal must each hold exactly
    /// the configured alphabet in the configured shape. The restored game
    /// generates fresh scenarios on restart.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self> {
        snapshot.config.validate()?;
        check_world(&snapshot.config, &snapshot.world, snapshot.arm.held())?;
        check_world(&snapshot.config, &snapshot.goal, None)?;

        Ok(Self {
            config: snapshot.config,
            fixed: None,
            rng: GameRng::from_state(&snapshot.rng),
            world: snapshot.world,
            goal: snapshot.goal,
            arm: snapshot.arm,
            moves: snapshot.moves,
            elapsed: snapshot.elapsed,
            completed: snapshot.completed,
            arm_position: snapshot.arm_position,
            pending: None,
            log: snapshot.log,
        })
    }
}

/// Shape of a fixed scenario, read off its initial arrangement.
fn config_for(initial: &WorldState) -> Result<ScenarioConfig> {
    let counts = initial.block_counts();
    let distinct = u8::try_from(counts.len()).map_err(|_| {
        BlockWorldError::ShapeMismatch(format!("{} distinct blocks", counts.len()))
    })?;
    let copies = counts.get(&Block::new(1)).copied().unwrap_or(0);

    Ok(ScenarioConfig::new(
        distinct,
        copies,
        initial.stack_count(),
        initial.capacity(),
    ))
}

/// Check that `world` plus the held block is `config`'s alphabet laid out
/// in `config`'s shape.
fn check_world(config: &ScenarioConfig, world: &WorldState, held: Option<Block>) -> Result<()> {
    world.validate()?;

    if world.stack_count() != config.stack_count || world.capacity() != config.capacity {
        return Err(BlockWorldError::ShapeMismatch(format!(
            "{} stacks of capacity {}, expected {} of capacity {}",
            world.stack_count(),
            world.capacity(),
            config.stack_count,
            config.capacity
        )));
    }

    let mut counts = world.block_counts();
    if let Some(block) = held {
        *counts.entry(block).or_insert(0) += 1;
    }

    let mut expected: FxHashMap<Block, usize> = FxHashMap::default();
    for block in config.alphabet() {
        *expected.entry(block).or_insert(0) += 1;
    }

    if counts != expected {
        return Err(BlockWorldError::ShapeMismatch(format!(
            "blocks of {} are not {} values with {} copies each",
            world, config.distinct_values, config.copies_per_value
        )));
    }
    Ok(())
}

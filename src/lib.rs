//! # block-world
//!
//! A stack-manipulation puzzle engine: blocks are dealt into bounded stacks
//! and a single arm rearranges them, one pick and one place at a time,
//! until they match a goal arrangement.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `rules::interact` maps `(world, arm, stack)` to a
//!    new world and arm. Illegal interactions are no-ops, never errors.
//!
//! 2. **Deterministic generation**: scenarios come from a seeded `GameRng`,
//!    so a seed replays the same sequence of games.
//!
//! 3. **One owner**: `BlockWorld` owns all mutable game state and is reset
//!    through `restart`, with no process-wide globals.
//!
//! ## Modules
//!
//! - `core`: Blocks, stacks, world state, goal equality, actions, RNG, configuration
//! - `scenario`: Random initial arrangements and goal derivation
//! - `rules`: The arm state machine and the `RulesEngine` trait
//! - `solver`: Shortest-plan search for hints
//! - `games`: The `BlockWorld` controller (timer, log, snapshots)

pub mod core;
pub mod error;
pub mod scenario;
pub mod rules;
pub mod solver;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    is_goal_reached, ActionLog, ActionRecord, ArmAction, Block, GameRng, GameRngState, GoalPolicy,
    LogEvent, ScenarioConfig, Stack, WorldState,
};

pub use crate::error::{BlockWorldError, Result};

pub use crate::scenario::{generate_goal, generate_random, generate_scenario, Scenario};

pub use crate::rules::{interact, legal_targets, Arm, BlockRules, Position, RulesEngine, Transition};

pub use crate::solver::{solve, SearchResult, SearchStats, SolverConfig};

pub use crate::games::block_world::{
    format_clock, ArmStatus, BlockWorld, BlockWorldBuilder, GameSnapshot, InteractOutcome, TimeRating,
};

//! Core types: blocks, stacks, world state, actions, RNG, configuration.
//!
//! This module holds the plain data the rest of the engine manipulates.
//! Nothing here knows about the arm state machine or scenario generation.

pub mod block;
pub mod stack;
pub mod world;
pub mod rng;
pub mod config;
pub mod action;

pub use block::Block;
pub use stack::Stack;
pub use world::{is_goal_reached, WorldState};
pub use rng::{GameRng, GameRngState};
pub use config::{GoalPolicy, ScenarioConfig};
pub use action::{ActionLog, ActionRecord, ArmAction, LogEvent, ACTION_LOG_LIMIT};

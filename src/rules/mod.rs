//! Move engine: the arm state machine and the rules engine trait.
//!
//! `interact` is a pure transition over `(WorldState, Arm)`. `BlockRules`
//! exposes the same transitions through `RulesEngine` so searches can
//! drive the game generically.

pub mod engine;

pub use engine::{
    apply_interaction, interact, legal_targets, Arm, BlockRules, Position, RulesEngine, Transition,
};

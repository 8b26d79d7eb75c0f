//! Scenario generation.
//!
//! Produces a random initial arrangement and a goal for it. Randomness
//! always comes from a caller-supplied `GameRng`, so a seed fully
//! determines the scenario.

pub mod generator;

pub use generator::{generate_goal, generate_random, generate_scenario, Scenario};

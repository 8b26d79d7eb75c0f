//! Plan search over any `RulesEngine`.
//!
//! Used for hints and to check that generated goals are reachable.

pub mod search;

pub use search::{solve, SearchResult, SearchStats, SolverConfig};

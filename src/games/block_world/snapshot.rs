//! Serializable game snapshots.
//!
//! A `GameSnapshot` carries everything needed to rebuild a `BlockWorld`,
//! including the RNG position so later restarts replay identically.
//! `to_bytes`/`from_bytes` use bincode.

use serde::{Deserialize, Serialize};

use crate::core::{ActionLog, GameRngState, ScenarioConfig, WorldState};
use crate::error::Result;
use crate::rules::Arm;

/// Full state of a game at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: ScenarioConfig,
    pub world: WorldState,
    pub goal: WorldState,
    pub arm: Arm,
    pub moves: u32,
    pub elapsed: u64,
    pub completed: bool,
    pub arm_position: usize,
    pub log: ActionLog,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Encode as bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

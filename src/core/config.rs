//! Scenario configuration.
//!
//! A `ScenarioConfig` fixes the shape of a game: the block alphabet
//! (`distinct_values` values, each repeated `copies_per_value` times), the
//! number of stacks, their shared capacity, and how the goal is derived.
//!
//! Two presets cover the known variants:
//! - `classic()`: six distinct blocks in three stacks of four, with an
//!   independently randomized goal
//! - `tubes()`: four colors, two blocks each, in four stacks of four, with
//!   a goal that sorts each color into its own stack

use serde::{Deserialize, Serialize};

use super::block::Block;
use crate::error::{BlockWorldError, Result};

/// How the goal arrangement is derived from the initial one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalPolicy {
    /// An independent random arrangement, re-rolled to differ from the
    /// initial arrangement when possible.
    #[default]
    Independent,
    /// One stack per distinct block value, in order of first appearance,
    /// with the remaining stacks empty.
    GroupedByValue,
}

/// Configuration for scenario generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Number of distinct block values (`1..=distinct_values`).
    pub distinct_values: u8,

    /// How many blocks carry each value.
    pub copies_per_value: usize,

    /// Number of stacks in the world.
    pub stack_count: usize,

    /// Maximum blocks per stack.
    pub capacity: usize,

    /// Goal derivation policy.
    pub goal_policy: GoalPolicy,

    /// Random placement attempts per block before falling back to the
    /// first stack with room.
    pub max_placement_attempts: usize,

    /// Goal re-rolls allowed while the independent goal equals the
    /// initial arrangement.
    pub max_goal_attempts: usize,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl ScenarioConfig {
    /// Create a configuration with default attempt limits and an
    /// independent goal.
    #[must_use]
    pub fn new(distinct_values: u8, copies_per_value: usize, stack_count: usize, capacity: usize) -> Self {
        Self {
            distinct_values,
            copies_per_value,
            stack_count,
            capacity,
            goal_policy: GoalPolicy::Independent,
            max_placement_attempts: 32,
            max_goal_attempts: 16,
        }
    }

    /// Six distinct blocks, three stacks of capacity four.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(6, 1, 3, 4)
    }

    /// Four colors with two blocks each, four stacks of capacity four,
    /// sorted-by-color goal.
    #[must_use]
    pub fn tubes() -> Self {
        Self::new(4, 2, 4, 4).with_goal_policy(GoalPolicy::GroupedByValue)
    }

    /// Set the goal policy.
    #[must_use]
    pub fn with_goal_policy(mut self, policy: GoalPolicy) -> Self {
        self.goal_policy = policy;
        self
    }

    /// Set the random placement attempt limit.
    #[must_use]
    pub fn with_max_placement_attempts(mut self, attempts: usize) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Set the goal re-roll limit.
    #[must_use]
    pub fn with_max_goal_attempts(mut self, attempts: usize) -> Self {
        self.max_goal_attempts = attempts;
        self
    }

    /// Total number of blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        usize::from(self.distinct_values) * self.copies_per_value
    }

    /// Total slots across all stacks.
    #[must_use]
    pub fn total_capacity(&self) -> usize {
        self.stack_count.saturating_mul(self.capacity)
    }

    /// The full block alphabet, grouped by value.
    #[must_use]
    pub fn alphabet(&self) -> Vec<Block> {
        Block::alphabet(self.distinct_values, self.copies_per_value)
    }

    /// Check the configuration can produce a valid world.
    pub fn validate(&self) -> Result<()> {
        if self.stack_count == 0 {
            return Err(BlockWorldError::NoStacks);
        }
        if self.capacity == 0 {
            return Err(BlockWorldError::ZeroCapacity);
        }
        if self.block_count() == 0 {
            return Err(BlockWorldError::EmptyAlphabet);
        }
        if self.block_count() > self.total_capacity() {
            return Err(BlockWorldError::CapacityExceeded {
                block_count: self.block_count(),
                stack_count: self.stack_count,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

//! World state: the full arrangement of blocks across stacks.
//!
//! ## WorldState
//!
//! An ordered collection of stacks sharing one capacity. The same type
//! describes both the live arrangement and the goal.
//!
//! ## Goal equality
//!
//! `is_goal_reached` compares two worlds structurally: stack count,
//! per-stack length and the block at every position. Capacity is part of
//! the world's shape but is not what the player is asked to match.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::block::Block;
use super::stack::Stack;
use crate::error::{BlockWorldError, Result};

/// An ordered collection of capacity-bounded stacks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldState {
    stacks: Vec<Stack>,
    capacity: usize,
}

impl WorldState {
    /// Create a world of `stack_count` empty stacks.
    #[must_use]
    pub fn empty(stack_count: usize, capacity: usize) -> Self {
        Self {
            stacks: (0..stack_count).map(|_| Stack::new(capacity)).collect(),
            capacity,
        }
    }

    /// Create a world from explicit stacks, each listed bottom-to-top.
    ///
    /// ```
    /// use block_world::core::{Block, WorldState};
    ///
    /// let world = WorldState::from_values(4, &[&[1, 2, 3], &[4, 5], &[6]]).unwrap();
    /// assert_eq!(world.stack_count(), 3);
    /// assert_eq!(world.stack(0).unwrap().top(), Some(Block::new(3)));
    /// ```
    pub fn from_values(capacity: usize, stacks: &[&[u8]]) -> Result<Self> {
        let stacks: Vec<Vec<Block>> = stacks
            .iter()
            .map(|s| s.iter().copied().map(Block::new).collect())
            .collect();
        Self::from_stacks(capacity, stacks)
    }

    /// Create a world from stacks of blocks, each listed bottom-to-top.
    pub fn from_stacks(capacity: usize, stacks: Vec<Vec<Block>>) -> Result<Self> {
        if stacks.is_empty() {
            return Err(BlockWorldError::NoStacks);
        }
        if capacity == 0 {
            return Err(BlockWorldError::ZeroCapacity);
        }

        let stacks = stacks
            .iter()
            .enumerate()
            .map(|(index, blocks)| {
                Stack::from_blocks(capacity, blocks).ok_or(BlockWorldError::StackMismatch {
                    index,
                    len: blocks.len(),
                    capacity,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { stacks, capacity })
    }

    /// Check the invariants `from_stacks` establishes.
    ///
    /// Worlds decoded from bytes skip the constructor, so every stack's
    /// own capacity and length are checked against the world capacity.
    pub fn validate(&self) -> Result<()> {
        if self.stacks.is_empty() {
            return Err(BlockWorldError::NoStacks);
        }
        if self.capacity == 0 {
            return Err(BlockWorldError::ZeroCapacity);
        }

        for (index, stack) in self.stacks.iter().enumerate() {
            if stack.capacity() != self.capacity || stack.len() > self.capacity {
                return Err(BlockWorldError::StackMismatch {
                    index,
                    len: stack.len(),
                    capacity: self.capacity,
                });
            }
        }
        Ok(())
    }

    /// Per-stack capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stacks.
    #[must_use]
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// All stacks in order.
    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Get a stack by index.
    #[must_use]
    pub fn stack(&self, index: usize) -> Option<&Stack> {
        self.stacks.get(index)
    }

    /// Get a mutable stack by index.
    pub fn stack_mut(&mut self, index: usize) -> Option<&mut Stack> {
        self.stacks.get_mut(index)
    }

    /// Total number of blocks resting in stacks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.stacks.iter().map(Stack::len).sum()
    }

    /// Iterate over all blocks, stack by stack, bottom-to-top.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.stacks.iter().flat_map(|s| s.blocks().iter().copied())
    }

    /// Count occurrences of each block value.
    #[must_use]
    pub fn block_counts(&self) -> FxHashMap<Block, usize> {
        let mut counts = FxHashMap::default();
        for block in self.blocks() {
            *counts.entry(block).or_insert(0) += 1;
        }
        counts
    }

    /// Check if no stack exceeds the capacity.
    #[must_use]
    pub fn within_capacity(&self) -> bool {
        self.stacks.iter().all(|s| s.len() <= self.capacity)
    }

    /// Stacks as plain value lists, bottom-to-top.
    #[must_use]
    pub fn to_values(&self) -> Vec<Vec<u8>> {
        self.stacks
            .iter()
            .map(|s| s.blocks().iter().map(|b| b.raw()).collect())
            .collect()
    }

    /// Fixed-length encoding for agents.
    ///
    /// `stack_count * capacity` slots in stack order, bottom-to-top, with 0
    /// for an empty slot, followed by one slot for the held block.
    #[must_use]
    pub fn encode(&self, held: Option<Block>) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.stacks.len() * self.capacity + 1);
        for stack in &self.stacks {
            for slot in 0..self.capacity {
                out.push(stack.blocks().get(slot).map_or(0, |b| i64::from(b.raw())));
            }
        }
        out.push(held.map_or(0, |b| i64::from(b.raw())));
        out
    }
}

impl std::fmt::Display for WorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, stack) in self.stacks.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", stack)?;
        }
        write!(f, "]")
    }
}

/// Check whether `world` matches `goal` exactly.
///
/// True iff both have the same number of stacks, each stack pair has the
/// same length, and every position holds the same block. A goal without
/// stacks is never reached.
#[must_use]
pub fn is_goal_reached(world: &WorldState, goal: &WorldState) -> bool {
    if goal.stacks.is_empty() || world.stacks.len() != goal.stacks.len() {
        return false;
    }

    world
        .stacks
        .iter()
        .zip(&goal.stacks)
        .all(|(current, target)| current.same_blocks(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(stacks: &[&[u8]]) -> WorldState {
        WorldState::from_values(4, stacks).unwrap()
    }

    #[test]
    fn test_goal_reached_identical() {
        let a = world(&[&[1, 2], &[4, 5], &[6, 3]]);
        let b = world(&[&[1, 2], &[4, 5], &[6, 3]]);
        assert!(is_goal_reached(&a, &b));
    }

    #[test]
    fn test_goal_not_reached_order_matters() {
        let a = world(&[&[2, 1], &[4, 5], &[6, 3]]);
        let b = world(&[&[1, 2], &[4, 5], &[6, 3]]);
        assert!(!is_goal_reached(&a, &b));
    }

    #[test]
    fn test_goal_not_reached_length_mismatch() {
        let a = world(&[&[1, 2, 3], &[4, 5], &[6]]);
        let b = world(&[&[1, 2], &[4, 5], &[6, 3]]);
        assert!(!is_goal_reached(&a, &b));
    }

    #[test]
    fn test_goal_not_reached_stack_count_mismatch() {
        let a = world(&[&[1, 2], &[3]]);
        let b = world(&[&[1, 2], &[3], &[]]);
        assert!(!is_goal_reached(&a, &b));
        assert!(!is_goal_reached(&b, &a));
    }

    #[test]
    fn test_goal_reached_ignores_capacity() {
        let a = WorldState::from_values(4, &[&[1], &[2]]).unwrap();
        let b = WorldState::from_values(5, &[&[1], &[2]]).unwrap();
        assert!(is_goal_reached(&a, &b));
    }

    #[test]
    fn test_goal_reached_empty_stacks() {
        let a = WorldState::empty(3, 4);
        let b = WorldState::empty(3, 4);
        assert!(is_goal_reached(&a, &b));
    }

    #[test]
    fn test_from_stacks_rejects_overfull() {
        let err = WorldState::from_values(2, &[&[1, 2, 3]]).unwrap_err();
        assert!(matches!(
            err,
            BlockWorldError::StackMismatch { index: 0, len: 3, capacity: 2 }
        ));
    }

    #[test]
    fn test_from_stacks_rejects_shape() {
        assert!(matches!(
            WorldState::from_values(4, &[]),
            Err(BlockWorldError::NoStacks)
        ));
        assert!(matches!(
            WorldState::from_values(0, &[&[]]),
            Err(BlockWorldError::ZeroCapacity)
        ));
    }

    #[test]
    fn test_validate_constructed_world() {
        assert!(world(&[&[1, 2, 3, 4], &[], &[5]]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_stack_capacity_drift() {
        // A stack decoded with its own, larger capacity
        let json = r#"{"stacks":[{"blocks":[1,2,3,4,5,6],"capacity":10},{"blocks":[],"capacity":4}],"capacity":4}"#;
        let w: WorldState = serde_json::from_str(json).unwrap();

        assert!(matches!(
            w.validate(),
            Err(BlockWorldError::StackMismatch { index: 0, len: 6, capacity: 4 })
        ));
    }

    #[test]
    fn test_validate_rejects_smaller_stack_capacity() {
        let json = r#"{"stacks":[{"blocks":[1],"capacity":4},{"blocks":[2],"capacity":2}],"capacity":4}"#;
        let w: WorldState = serde_json::from_str(json).unwrap();

        assert!(matches!(
            w.validate(),
            Err(BlockWorldError::StackMismatch { index: 1, len: 1, capacity: 4 })
        ));
    }

    #[test]
    fn test_block_counts() {
        let w = world(&[&[1, 1, 2], &[2], &[3]]);
        let counts = w.block_counts();

        assert_eq!(w.block_count(), 5);
        assert_eq!(counts[&Block::new(1)], 2);
        assert_eq!(counts[&Block::new(2)], 2);
        assert_eq!(counts[&Block::new(3)], 1);
    }

    #[test]
    fn test_encode() {
        let w = WorldState::from_values(2, &[&[1, 2], &[3]]).unwrap();
        assert_eq!(w.encode(None), vec![1, 2, 3, 0, 0]);
        assert_eq!(w.encode(Some(Block::new(4))), vec![1, 2, 3, 0, 4]);
    }

    #[test]
    fn test_to_values_and_display() {
        let w = world(&[&[1, 2, 3], &[4, 5], &[6]]);
        assert_eq!(w.to_values(), vec![vec![1, 2, 3], vec![4, 5], vec![6]]);
        assert_eq!(format!("{}", w), "[[1,2,3],[4,5],[6]]");
    }

    #[test]
    fn test_serde() {
        let w = world(&[&[1, 2], &[], &[3]]);
        let json = serde_json::to_string(&w).unwrap();
        let back: WorldState = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}

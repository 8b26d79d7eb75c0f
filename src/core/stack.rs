//! Capacity-bounded block stacks.
//!
//! A `Stack` stores blocks bottom-to-top: index 0 is the bottom, the last
//! element is the top. Pushing onto a full stack is refused rather than
//! truncated, so `len() <= capacity()` always holds.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::block::Block;

/// Ordered, capacity-bounded sequence of blocks.
///
/// SmallVec keeps the common capacity (4) inline without heap allocation.
///
/// ```
/// use block_world::core::{Block, Stack};
///
/// let mut stack = Stack::new(2);
/// assert!(stack.push(Block::new(1)));
/// assert!(stack.push(Block::new(2)));
/// assert!(!stack.push(Block::new(3))); // full
///
/// assert_eq!(stack.top(), Some(Block::new(2)));
/// assert_eq!(stack.pop(), Some(Block::new(2)));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stack {
    blocks: SmallVec<[Block; 4]>,
    capacity: usize,
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            blocks: SmallVec::new(),
            capacity,
        }
    }

    /// Create a stack from blocks listed bottom-to-top.
    ///
    /// Returns `None` if there are more blocks than `capacity`.
    #[must_use]
    pub fn from_blocks(capacity: usize, blocks: &[Block]) -> Option<Self> {
        if blocks.len() > capacity {
            return None;
        }
        Some(Self {
            blocks: SmallVec::from_slice(blocks),
            capacity,
        })
    }

    /// Maximum number of blocks this stack can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of blocks currently in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.blocks.len() >= self.capacity
    }

    /// Free slots left before the stack is full.
    #[must_use]
    pub fn spare_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.blocks.len())
    }

    /// Blocks bottom-to-top.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The top block, if any.
    #[must_use]
    pub fn top(&self) -> Option<Block> {
        self.blocks.last().copied()
    }

    /// Push a block on top.
    ///
    /// Returns false (and leaves the stack untouched) if the stack is full.
    pub fn push(&mut self, block: Block) -> bool {
        if self.is_full() {
            return false;
        }
        self.blocks.push(block);
        true
    }

    /// Remove and return the top block.
    pub fn pop(&mut self) -> Option<Block> {
        self.blocks.pop()
    }

    /// Check if two stacks hold the same blocks in the same order.
    ///
    /// Capacity is not compared.
    #[must_use]
    pub fn same_blocks(&self, other: &Stack) -> bool {
        self.blocks.as_slice() == other.blocks.as_slice()
    }
}

impl std::fmt::Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", block)?;
        }
        write!(f, "]")
    }
}

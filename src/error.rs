//! Error types.
//!
//! Only configuration problems and snapshot decoding are reportable.
//! Illegal moves (picking from an empty stack, placing on a full one,
//! interacting after completion) are no-ops, not errors.

use thiserror::Error;

/// Errors reported by scenario generation and snapshot handling.
#[derive(Error, Debug)]
pub enum BlockWorldError {
    #[error("{block_count} blocks do not fit in {stack_count} stacks of capacity {capacity}")]
    CapacityExceeded {
        block_count: usize,
        stack_count: usize,
        capacity: usize,
    },

    #[error("a world needs at least one stack")]
    NoStacks,

    #[error("stack capacity must be at least 1")]
    ZeroCapacity,

    #[error("the block alphabet is empty")]
    EmptyAlphabet,

    #[error("cannot group blocks by value: {0}")]
    GroupingImpossible(String),

    #[error("stack {index} holds {len} blocks but capacity is {capacity}")]
    StackMismatch {
        index: usize,
        len: usize,
        capacity: usize,
    },

    #[error("arrangement does not match the configured shape: {0}")]
    ShapeMismatch(String),

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Result alias for block world operations.
pub type Result<T> = std::result::Result<T, BlockWorldError>;

//! Arm actions and the action log.
//!
//! Every successful interaction is described by an `ArmAction`, named
//! after the classic blocks-world operators:
//! - `PICKUP(b)`: lift `b`, leaving its stack empty
//! - `UNSTACK(b, c)`: lift `b` off `c`
//! - `PUTDOWN(b)`: place `b` on an empty stack
//! - `STACK(b, c)`: place `b` on top of `c`
//!
//! These are descriptive only; win detection never looks at them.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::block::Block;

/// Maximum entries kept in an `ActionLog`.
pub const ACTION_LOG_LIMIT: usize = 50;

/// A successful arm transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmAction {
    /// Picked the only block of a stack.
    Pickup { block: Block, stack: usize },
    /// Picked a block that was resting on `below`.
    Unstack { block: Block, below: Block, stack: usize },
    /// Placed a block on an empty stack.
    Putdown { block: Block, stack: usize },
    /// Placed a block on top of `below`.
    Stack { block: Block, below: Block, stack: usize },
}

impl ArmAction {
    /// Describe a pick, given what remains below the lifted block.
    #[must_use]
    pub fn pick(block: Block, below: Option<Block>, stack: usize) -> Self {
        match below {
            Some(below) => ArmAction::Unstack { block, below, stack },
            None => ArmAction::Pickup { block, stack },
        }
    }

    /// Describe a place, given what the block now rests on.
    #[must_use]
    pub fn place(block: Block, below: Option<Block>, stack: usize) -> Self {
        match below {
            Some(below) => ArmAction::Stack { block, below, stack },
            None => ArmAction::Putdown { block, stack },
        }
    }

    /// The block that moved.
    #[must_use]
    pub fn block(&self) -> Block {
        match *self {
            ArmAction::Pickup { block, .. }
            | ArmAction::Unstack { block, .. }
            | ArmAction::Putdown { block, .. }
            | ArmAction::Stack { block, .. } => block,
        }
    }

    /// The stack the arm interacted with.
    #[must_use]
    pub fn stack(&self) -> usize {
        match *self {
            ArmAction::Pickup { stack, .. }
            | ArmAction::Unstack { stack, .. }
            | ArmAction::Putdown { stack, .. }
            | ArmAction::Stack { stack, .. } => stack,
        }
    }

    /// True for place transitions, which count as moves.
    #[must_use]
    pub fn is_place(&self) -> bool {
        matches!(self, ArmAction::Putdown { .. } | ArmAction::Stack { .. })
    }
}

impl std::fmt::Display for ArmAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArmAction::Pickup { block, .. } => write!(f, "PICKUP({})", block),
            ArmAction::Unstack { block, below, .. } => write!(f, "UNSTACK({}, {})", block, below),
            ArmAction::Putdown { block, .. } => write!(f, "PUTDOWN({})", block),
            ArmAction::Stack { block, below, .. } => write!(f, "STACK({}, {})", block, below),
        }
    }
}

/// An entry in the action log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEvent {
    /// The arm moved a block.
    Arm(ArmAction),
    /// The world matched the goal.
    GoalReached,
}

impl std::fmt::Display for LogEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogEvent::Arm(action) => write!(f, "{}", action),
            LogEvent::GoalReached => write!(f, "SYSTEM_EVENT: GOAL_REACHED"),
        }
    }
}

/// A logged event with ordering metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The event.
    pub event: LogEvent,

    /// Sequence number since the game started (0-based).
    pub sequence: u32,

    /// Move count after the event.
    pub moves: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(event: LogEvent, sequence: u32, moves: u32) -> Self {
        Self {
            event,
            sequence,
            moves,
        }
    }
}

/// Bounded history of the most recent events, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLog {
    entries: Vector<ActionRecord>,
    next_sequence: u32,
}

impl ActionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event, dropping the oldest entry past the limit.
    pub fn record(&mut self, event: LogEvent, moves: u32) {
        let record = ActionRecord::new(event, self.next_sequence, moves);
        self.next_sequence += 1;
        self.entries.push_front(record);
        if self.entries.len() > ACTION_LOG_LIMIT {
            self.entries.pop_back();
        }
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ActionRecord> {
        self.entries.iter()
    }

    /// The most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&ActionRecord> {
        self.entries.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total events recorded, including those dropped from the log.
    #[must_use]
    pub fn total_recorded(&self) -> u32 {
        self.next_sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_classification() {
        let b = Block::new(3);

        assert_eq!(ArmAction::pick(b, None, 0), ArmAction::Pickup { block: b, stack: 0 });
        assert_eq!(
            ArmAction::pick(b, Some(Block::new(2)), 0),
            ArmAction::Unstack { block: b, below: Block::new(2), stack: 0 }
        );
    }

    #[test]
    fn test_place_classification() {
        let b = Block::new(3);

        assert_eq!(ArmAction::place(b, None, 1), ArmAction::Putdown { block: b, stack: 1 });
        assert_eq!(
            ArmAction::place(b, Some(Block::new(6)), 2),
            ArmAction::Stack { block: b, below: Block::new(6), stack: 2 }
        );
    }

    #[test]
    fn test_display() {
        let b = Block::new(3);
        let c = Block::new(2);

        assert_eq!(ArmAction::pick(b, None, 0).to_string(), "PICKUP(3)");
        assert_eq!(ArmAction::pick(b, Some(c), 0).to_string(), "UNSTACK(3, 2)");
        assert_eq!(ArmAction::place(b, None, 0).to_string(), "PUTDOWN(3)");
        assert_eq!(ArmAction::place(b, Some(c), 0).to_string(), "STACK(3, 2)");
        assert_eq!(LogEvent::GoalReached.to_string(), "SYSTEM_EVENT: GOAL_REACHED");
    }

    #[test]
    fn test_accessors() {
        let action = ArmAction::place(Block::new(4), Some(Block::new(1)), 2);

        assert_eq!(action.block(), Block::new(4));
        assert_eq!(action.stack(), 2);
        assert!(action.is_place());
        assert!(!ArmAction::pick(Block::new(4), None, 2).is_place());
    }

    #[test]
    fn test_log_newest_first() {
        let mut log = ActionLog::new();
        log.record(LogEvent::Arm(ArmAction::pick(Block::new(1), None, 0)), 0);
        log.record(LogEvent::Arm(ArmAction::place(Block::new(1), None, 1)), 1);

        let sequences: Vec<u32> = log.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![1, 0]);
        assert_eq!(log.latest().unwrap().moves, 1);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut log = ActionLog::new();
        for i in 0..(ACTION_LOG_LIMIT as u32 + 10) {
            log.record(LogEvent::Arm(ArmAction::pick(Block::new(1), None, 0)), i);
        }

        assert_eq!(log.len(), ACTION_LOG_LIMIT);
        assert_eq!(log.total_recorded(), ACTION_LOG_LIMIT as u32 + 10);
        // Oldest surviving entry is the 11th recorded
        assert_eq!(log.iter().last().unwrap().sequence, 10);
    }

    #[test]
    fn test_record_serialization() {
        let record = ActionRecord::new(
            LogEvent::Arm(ArmAction::place(Block::new(3), Some(Block::new(6)), 2)),
            4,
            2,
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}

//! The arm state machine and the rules engine trait.
//!
//! ## States
//!
//! - `EmptyHanded` + interact(i): lift the top of stack i; empty stack is a no-op
//! - `Holding(b)` + interact(i): put b on stack i; full stack is a no-op
//!
//! Only a place counts as a move. Out-of-range indices are no-ops like any
//! other illegal interaction; nothing here returns an error.
//!
//! ## Example
//!
//! ```
//! use block_world::core::{Block, WorldState};
//! use block_world::rules::{interact, Arm};
//!
//! let world = WorldState::from_values(4, &[&[1, 2, 3], &[4, 5], &[6]]).unwrap();
//!
//! let picked = interact(&world, Arm::EmptyHanded, 0);
//! assert_eq!(picked.arm, Arm::Holding(Block::new(3)));
//! assert!(!picked.moved);
//!
//! let placed = interact(&picked.world, picked.arm, 2);
//! assert_eq!(placed.arm, Arm::EmptyHanded);
//! assert!(placed.moved);
//! assert_eq!(placed.world.to_values(), vec![vec![1, 2], vec![4, 5], vec![6, 3]]);
//! ```

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::core::{is_goal_reached, ArmAction, Block, WorldState};

/// What the arm is holding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arm {
    #[default]
    EmptyHanded,
    Holding(Block),
}

impl Arm {
    /// The held block, if any.
    #[must_use]
    pub fn held(self) -> Option<Block> {
        match self {
            Arm::EmptyHanded => None,
            Arm::Holding(block) => Some(block),
        }
    }

    #[must_use]
    pub fn is_holding(self) -> bool {
        matches!(self, Arm::Holding(_))
    }
}

/// Result of a single interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// World after the interaction.
    pub world: WorldState,

    /// Arm after the interaction.
    pub arm: Arm,

    /// True if a block was placed (the move counter advances).
    pub moved: bool,

    /// Description of what happened, `None` for a no-op.
    pub action: Option<ArmAction>,
}

impl Transition {
    /// True if the interaction changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.action.is_none()
    }
}

/// Apply one interaction without mutating the inputs.
#[must_use]
pub fn interact(world: &WorldState, arm: Arm, stack_index: usize) -> Transition {
    let mut world = world.clone();
    let mut arm = arm;
    let action = apply_interaction(&mut world, &mut arm, stack_index);

    Transition {
        world,
        arm,
        moved: action.is_some_and(|a| a.is_place()),
        action,
    }
}

/// Apply one interaction in place.
///
/// Returns the action taken, or `None` if the interaction was a no-op, in
/// which case `world` and `arm` are untouched.
pub fn apply_interaction(world: &mut WorldState, arm: &mut Arm, stack_index: usize) -> Option<ArmAction> {
    let stack = world.stack_mut(stack_index)?;

    let action = match *arm {
        Arm::EmptyHanded => {
            let block = stack.pop()?;
            *arm = Arm::Holding(block);
            ArmAction::pick(block, stack.top(), stack_index)
        }
        Arm::Holding(block) => {
            let below = stack.top();
            if !stack.push(block) {
                return None;
            }
            *arm = Arm::EmptyHanded;
            ArmAction::place(block, below, stack_index)
        }
    };

    log::debug!("{} -> {}", action, world);
    Some(action)
}

/// Stacks an interaction would change.
#[must_use]
pub fn legal_targets(world: &WorldState, arm: Arm) -> Vec<usize> {
    world
        .stacks()
        .iter()
        .enumerate()
        .filter(|(_, stack)| match arm {
            Arm::EmptyHanded => !stack.is_empty(),
            Arm::Holding(_) => !stack.is_full(),
        })
        .map(|(index, _)| index)
        .collect()
}

/// A world paired with the arm: everything the rules look at.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub world: WorldState,
    pub arm: Arm,
}

impl Position {
    #[must_use]
    pub fn new(world: WorldState, arm: Arm) -> Self {
        Self { world, arm }
    }
}

/// Rules engine trait.
///
/// Searches and agents drive a game through this trait rather than through
/// game-specific calls.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty if no action changes the state
/// - `apply_action`: Must be deterministic
/// - `is_terminal`: True once the game is won
pub trait RulesEngine {
    /// Full game position.
    type State: Clone + Eq + Hash;

    /// A single player action.
    type Action: Clone;

    /// Get every action that changes `state`.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply an action to the state.
    fn apply_action(&self, state: &mut Self::State, action: &Self::Action);

    /// Check if the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool;
}

/// Block world rules: reach a fixed goal arrangement.
#[derive(Clone, Debug)]
pub struct BlockRules {
    goal: WorldState,
}

impl BlockRules {
    #[must_use]
    pub fn new(goal: WorldState) -> Self {
        Self { goal }
    }

    /// The target arrangement.
    #[must_use]
    pub fn goal(&self) -> &WorldState {
        &self.goal
    }
}

impl RulesEngine for BlockRules {
    type State = Position;
    type Action = usize;

    fn legal_actions(&self, state: &Position) -> Vec<usize> {
        legal_targets(&state.world, state.arm)
    }

    fn apply_action(&self, state: &mut Position, action: &usize) {
        apply_interaction(&mut state.world, &mut state.arm, *action);
    }

    fn is_terminal(&self, state: &Position) -> bool {
        !state.arm.is_holding() && is_goal_reached(&state.world, &self.goal)
    }
}

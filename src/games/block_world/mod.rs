//! Block World: rearrange stacked blocks to match a goal.
//!
//! - A configured alphabet of blocks is dealt into bounded stacks
//! - Click a stack to pick its top block, click again to place it
//! - Each placement is a move; the timer starts with the first move
//! - The game ends when the stacks match the goal exactly

mod clock;
mod game;
mod snapshot;

pub use clock::{format_clock, TimeRating};
pub use game::{ArmStatus, BlockWorld, BlockWorldBuilder, InteractOutcome};
pub use snapshot::GameSnapshot;

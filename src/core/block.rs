//! Block identification.
//!
//! A `Block` is an opaque label drawn from a small alphabet. The engine only
//! compares blocks for equality; mapping a block to a color or glyph is the
//! renderer's job.
//!
//! ## Alphabet
//!
//! Block values are 1-based: a scenario with `n` distinct values uses
//! `Block(1)..=Block(n)`. Value 0 is never a block, which lets observation
//! encodings use 0 for "empty slot".
//!
//! ```
//! use block_world::core::Block;
//!
//! let alphabet = Block::alphabet(3, 2);
//! assert_eq!(alphabet.len(), 6);
//! assert_eq!(alphabet[0], Block::new(1));
//! assert_eq!(alphabet[5], Block::new(3));
//! ```

use serde::{Deserialize, Serialize};

/// Opaque identifier for a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Block(pub u8);

impl Block {
    /// Create a block with the given value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Build the full block alphabet for a scenario.
    ///
    /// Each of the `distinct` values `1..=distinct` appears `copies` times,
    /// grouped by value.
    #[must_use]
    pub fn alphabet(distinct: u8, copies: usize) -> Vec<Block> {
        (1..=distinct)
            .flat_map(|value| std::iter::repeat(Block(value)).take(copies))
            .collect()
    }
}

impl From<u8> for Block {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

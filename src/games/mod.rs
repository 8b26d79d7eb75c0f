//! Playable games built on the engine.

pub mod block_world;

//! Python bindings for the block-world engine.
//!
//! # Quick Start
//!
//! ```python
//! import block_world as bw
//!
//! game = bw.BlockWorld(config=bw.ScenarioConfig.classic(), seed=42)
//!
//! while not game.completed:
//!     step = game.hint()
//!     if step is None:  # search budget ran out
//!         break
//!     game.interact(step)
//!
//! print(game.moves, game.log[0])
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// block_world: a stack-manipulation puzzle engine.
#[pymodule]
fn block_world(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyScenarioConfig>()?;
    m.add_class::<PyBlockWorld>()?;

    Ok(())
}

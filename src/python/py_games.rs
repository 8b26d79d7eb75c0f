//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::ScenarioConfig;
use crate::games::block_world::{BlockWorld, GameSnapshot};

use super::py_core::{to_py_err, PyScenarioConfig};

/// Python wrapper for BlockWorld.
#[pyclass(name = "BlockWorld")]
pub struct PyBlockWorld {
    game: BlockWorld,
}

#[pymethods]
impl PyBlockWorld {
    /// Create a new game.
    ///
    /// # Arguments
    /// - config: Scenario configuration (defaults to the classic preset)
    /// - seed: RNG seed for deterministic scenarios
    #[new]
    #[pyo3(signature = (config = None, seed = 42))]
    fn new(config: Option<PyScenarioConfig>, seed: u64) -> PyResult<Self> {
        let config = config.map_or_else(ScenarioConfig::classic, |c| c.0);
        let game = BlockWorld::new(config, seed).map_err(to_py_err)?;
        Ok(Self { game })
    }

    /// Restore a game from bytes produced by `to_bytes`.
    #[staticmethod]
    fn from_bytes(bytes: Vec<u8>) -> PyResult<Self> {
        let snapshot = GameSnapshot::from_bytes(&bytes).map_err(to_py_err)?;
        let game = BlockWorld::from_snapshot(snapshot).map_err(to_py_err)?;
        Ok(Self { game })
    }

    /// Interact with a stack.
    ///
    /// Returns the action description (e.g. "STACK(3, 6)"), or None for a no-op.
    fn interact(&mut self, stack_index: usize) -> Option<String> {
        self.game.interact(stack_index).action.map(|a| a.to_string())
    }

    /// Advance the timer by one second.
    fn tick(&mut self) -> bool {
        self.game.tick()
    }

    /// Start a new game.
    fn restart(&mut self) -> PyResult<()> {
        self.game.restart().map_err(to_py_err)
    }

    /// Stacks that would change if clicked.
    fn legal_targets(&self) -> Vec<usize> {
        crate::rules::legal_targets(self.game.world(), self.game.arm())
    }

    /// Next stack on a shortest path to the goal.
    ///
    /// None once complete or when the search budget runs out.
    fn hint(&self) -> Option<usize> {
        self.game.hint()
    }

    /// World and held block as a flat numpy array.
    fn observation<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i64>> {
        PyArray1::from_vec_bound(py, self.game.observation())
    }

    /// Encode the full game state.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.game.snapshot().to_bytes().map_err(to_py_err)
    }

    #[getter]
    fn stacks(&self) -> Vec<Vec<u8>> {
        self.game.world().to_values()
    }

    #[getter]
    fn goal(&self) -> Vec<Vec<u8>> {
        self.game.goal().to_values()
    }

    #[getter]
    fn held(&self) -> Option<u8> {
        self.game.held().map(|b| b.raw())
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.game.moves()
    }

    #[getter]
    fn elapsed(&self) -> u64 {
        self.game.elapsed()
    }

    #[getter]
    fn completed(&self) -> bool {
        self.game.is_completed()
    }

    /// Recent action log lines, newest first.
    #[getter]
    fn log(&self) -> Vec<String> {
        self.game.log().iter().map(|r| r.event.to_string()).collect()
    }

    /// Finishing time rating, once complete.
    #[getter]
    fn rating(&self) -> Option<&'static str> {
        self.game.rating().map(|r| r.label())
    }

    fn __repr__(&self) -> String {
        format!(
            "BlockWorld(stacks={}, held={:?}, moves={}, time={}, completed={})",
            self.game.world(),
            self.held(),
            self.game.moves(),
            self.game.clock(),
            self.game.is_completed()
        )
    }
}

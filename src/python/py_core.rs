//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GoalPolicy, ScenarioConfig};
use crate::error::BlockWorldError;

/// Convert an engine error into a Python `ValueError`.
pub(crate) fn to_py_err(err: BlockWorldError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for ScenarioConfig.
#[pyclass(name = "ScenarioConfig")]
#[derive(Clone, Debug)]
pub struct PyScenarioConfig(pub ScenarioConfig);

#[pymethods]
impl PyScenarioConfig {
    /// Create a configuration.
    ///
    /// # Arguments
    /// - distinct_values: Number of distinct block values
    /// - copies_per_value: Blocks per value
    /// - stack_count: Number of stacks
    /// - capacity: Blocks per stack
    /// - grouped_goal: Sort each value into its own stack instead of a random goal
    #[new]
    #[pyo3(signature = (
        distinct_values = 6,
        copies_per_value = 1,
        stack_count = 3,
        capacity = 4,
        grouped_goal = false
    ))]
    fn new(
        distinct_values: u8,
        copies_per_value: usize,
        stack_count: usize,
        capacity: usize,
        grouped_goal: bool,
    ) -> PyResult<Self> {
        let policy = if grouped_goal {
            GoalPolicy::GroupedByValue
        } else {
            GoalPolicy::Independent
        };
        let config = ScenarioConfig::new(distinct_values, copies_per_value, stack_count, capacity)
            .with_goal_policy(policy);
        config.validate().map_err(to_py_err)?;
        Ok(Self(config))
    }

    /// Six distinct blocks in three stacks of four.
    #[staticmethod]
    fn classic() -> Self {
        Self(ScenarioConfig::classic())
    }

    /// Four colors, two blocks each, in four stacks of four.
    #[staticmethod]
    fn tubes() -> Self {
        Self(ScenarioConfig::tubes())
    }

    #[getter]
    fn block_count(&self) -> usize {
        self.0.block_count()
    }

    #[getter]
    fn stack_count(&self) -> usize {
        self.0.stack_count
    }

    #[getter]
    fn capacity(&self) -> usize {
        self.0.capacity
    }

    #[getter]
    fn grouped_goal(&self) -> bool {
        self.0.goal_policy == GoalPolicy::GroupedByValue
    }

    fn __repr__(&self) -> String {
        format!(
            "ScenarioConfig(blocks={}, stacks={}, capacity={}, goal={:?})",
            self.0.block_count(),
            self.0.stack_count,
            self.0.capacity,
            self.0.goal_policy
        )
    }
}

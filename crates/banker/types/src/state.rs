use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VectorError;
use crate::ops::vector_add;
use crate::vector::{display_matrix, ResourceVector};

/// Snapshot of a resource system: the free pool plus per-task holdings and
/// remaining needs.
///
/// `need` is trusted as given. Nothing here derives it from a maximum claim
/// or checks `need[i] = max[i] - allocation[i]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Units of each resource type not held by any task
    pub available: ResourceVector,
    /// `allocation[i][k]`: units of resource `k` held by task `i`
    pub allocation: Vec<ResourceVector>,
    /// `need[i][k]`: units of resource `k` task `i` may still request
    pub need: Vec<ResourceVector>,
}

impl ResourceState {
    pub fn new(
        available: ResourceVector,
        allocation: Vec<ResourceVector>,
        need: Vec<ResourceVector>,
    ) -> Self {
        Self {
            available,
            allocation,
            need,
        }
    }

    /// Number of tasks (`n`).
    pub fn task_count(&self) -> usize {
        self.allocation.len()
    }

    /// Number of resource types (`m`).
    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    /// Available plus everything currently allocated, per resource type.
    ///
    /// A granted request moves units between `available` and one allocation
    /// row, so this total is unchanged by any allocation decision.
    pub fn total_resources(&self) -> Result<ResourceVector, VectorError> {
        self.allocation
            .iter()
            .try_fold(self.available.clone(), |acc, row| vector_add(&acc, row))
    }
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "available={} allocation={} need={}",
            self.available,
            display_matrix(&self.allocation),
            display_matrix(&self.need)
        )
    }
}

/// An incremental request by one task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Index of the requesting task, in `[0, n)`
    pub task: usize,
    /// Units requested per resource type
    pub amounts: ResourceVector,
}

impl Request {
    pub fn new(task: usize, amounts: impl Into<ResourceVector>) -> Self {
        Self {
            task,
            amounts: amounts.into(),
        }
    }
}

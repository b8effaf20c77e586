use banker_types::VectorError;
use thiserror::Error;

/// Structural problems in a state or request, found before any arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("allocation and need matrices must have the same number of rows: allocation has {allocation}, need has {need}")]
    RowCountMismatch { allocation: usize, need: usize },

    #[error("allocation row {row} has {actual} columns, expected {expected}")]
    AllocationRowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("need row {row} has {actual} columns, expected {expected}")]
    NeedRowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("request has {actual} components but there are {expected} resource types")]
    RequestWidth { expected: usize, actual: usize },

    #[error("task index {task} is out of range for {tasks} tasks")]
    TaskOutOfRange { task: usize, tasks: usize },
}

/// Errors from the arbiter. Policy rejections are [`banker_types::Outcome`]s,
/// never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArbiterError {
    #[error("invalid resource state: {0}")]
    InvalidState(#[from] StateError),

    #[error("resource arithmetic failed: {0}")]
    Arithmetic(#[from] VectorError),
}

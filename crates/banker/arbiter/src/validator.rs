//! Structural validation of a resource state and request.
//!
//! Runs before any other component touches the state. Reports the first
//! violation only; performs no resource arithmetic and never mutates.

use banker_types::{Request, ResourceState};
use tracing::warn;

use crate::error::StateError;

/// Check matrix shapes only: row counts agree and every row has `m` columns.
pub fn validate_shape(state: &ResourceState) -> Result<(), StateError> {
    if state.allocation.len() != state.need.len() {
        return Err(StateError::RowCountMismatch {
            allocation: state.allocation.len(),
            need: state.need.len(),
        });
    }

    let expected = state.resource_count();
    if let Some((row, r)) = state
        .allocation
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != expected)
    {
        return Err(StateError::AllocationRowWidth {
            row,
            expected,
            actual: r.len(),
        });
    }
    if let Some((row, r)) = state
        .need
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != expected)
    {
        return Err(StateError::NeedRowWidth {
            row,
            expected,
            actual: r.len(),
        });
    }

    Ok(())
}

/// Validate a state together with a request against it.
pub fn validate(state: &ResourceState, request: &Request) -> Result<(), StateError> {
    validate_shape(state)?;

    if request.amounts.len() != state.resource_count() {
        return Err(StateError::RequestWidth {
            expected: state.resource_count(),
            actual: request.amounts.len(),
        });
    }
    if request.task >= state.task_count() {
        return Err(StateError::TaskOutOfRange {
            task: request.task,
            tasks: state.task_count(),
        });
    }

    Ok(())
}

/// Boolean form of [`validate`]; the diagnostic goes to the log.
pub fn is_valid(state: &ResourceState, request: &Request) -> bool {
    match validate(state, request) {
        Ok(()) => true,
        Err(err) => {
            warn!(task = request.task, error = %err, "Input validation failed");
            false
        }
    }
}

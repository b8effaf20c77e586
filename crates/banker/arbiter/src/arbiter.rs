use banker_types::{
    first_excess, vector_add, vector_sub, Outcome, Request, ResourceState, ResourceVector,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ArbiterError;
use crate::safety::{assess, assess_exhaustive, SafetyReport};
use crate::validator::validate;

/// Which safety simulation the arbiter runs on a tentative state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyStrategy {
    /// FIFO of pending tasks with progress tags
    #[default]
    TaggedQueue,
    /// Repeated full scans until a pass makes no progress
    Exhaustive,
}

/// Configuration for the [`Arbiter`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArbiterConfig {
    /// Safety simulation used before committing a grant
    pub strategy: SafetyStrategy,
    /// Log full state snapshots before and after each decision
    pub trace_state: bool,
}

/// Why the arbiter reached its outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionReason {
    /// Nothing was requested; trivially granted
    EmptyRequest,
    /// Request exceeds the task's declared need at `resource`
    ExceedsNeed { resource: usize },
    /// Request exceeds the free pool at `resource`
    ExceedsAvailable { resource: usize },
    /// Granting would leave `blocked` unable to finish
    Unsafe { blocked: Vec<usize> },
    /// Granted; the resulting state is safe
    Granted,
}

/// Outcome of one arbitration together with its reason.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub outcome: Outcome,
    pub reason: DecisionReason,
    /// Completion order that proved the new state safe, for checked grants
    pub safe_sequence: Option<Vec<usize>>,
}

impl Decision {
    fn new(outcome: Outcome, reason: DecisionReason) -> Self {
        Self {
            outcome,
            reason,
            safe_sequence: None,
        }
    }
}

/// Rows displaced by a tentative grant, kept so rollback restores them exactly.
struct Tentative {
    task: usize,
    available: ResourceVector,
    allocation: ResourceVector,
    need: ResourceVector,
}

impl Tentative {
    fn apply(
        state: &mut ResourceState,
        task: usize,
        available: ResourceVector,
        allocation: ResourceVector,
        need: ResourceVector,
    ) -> Self {
        Self {
            task,
            available: std::mem::replace(&mut state.available, available),
            allocation: std::mem::replace(&mut state.allocation[task], allocation),
            need: std::mem::replace(&mut state.need[task], need),
        }
    }

    fn roll_back(self, state: &mut ResourceState) {
        state.available = self.available;
        state.allocation[self.task] = self.allocation;
        state.need[self.task] = self.need;
    }
}

/// Allocation Arbiter: grants a request only if the result stays safe.
///
/// Each call performs one validate, tentatively apply, check, commit-or-roll-back
/// pass. The state is borrowed for the call only and is mutated only when the
/// outcome is [`Outcome::Success`].
#[derive(Clone, Debug, Default)]
pub struct Arbiter {
    config: ArbiterConfig,
}

impl Arbiter {
    pub fn new(config: ArbiterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    /// Arbitrate `request` against `state`, returning only the outcome.
    pub fn allocate(
        &self,
        state: &mut ResourceState,
        request: &Request,
    ) -> Result<Outcome, ArbiterError> {
        self.decide(state, request).map(|d| d.outcome)
    }

    /// Arbitrate `request` against `state`.
    ///
    /// Errors are structural (bad shapes, task index out of range) or an
    /// allocation row overflowing `u64`; in every error case the state is
    /// untouched.
    pub fn decide(
        &self,
        state: &mut ResourceState,
        request: &Request,
    ) -> Result<Decision, ArbiterError> {
        validate(state, request)?;
        let task = request.task;
        let amounts = &request.amounts;

        if self.config.trace_state {
            debug!(task, request = %amounts, state = %state, "Arbitrating request");
        }

        if amounts.is_zero() {
            debug!(task, "No resources requested");
            return Ok(Decision::new(Outcome::Success, DecisionReason::EmptyRequest));
        }

        if let Some(resource) = first_excess(amounts, &state.need[task])? {
            warn!(
                task,
                resource,
                request = %amounts,
                need = %state.need[task],
                "Request exceeds declared need"
            );
            return Ok(Decision::new(
                Outcome::Fail,
                DecisionReason::ExceedsNeed { resource },
            ));
        }

        if let Some(resource) = first_excess(amounts, &state.available)? {
            info!(
                task,
                resource,
                request = %amounts,
                available = %state.available,
                "Request exceeds available resources"
            );
            return Ok(Decision::new(
                Outcome::Wait,
                DecisionReason::ExceedsAvailable { resource },
            ));
        }

        let available = vector_sub(&state.available, amounts)?;
        let allocation = vector_add(&state.allocation[task], amounts)?;
        let need = vector_sub(&state.need[task], amounts)?;
        let previous = Tentative::apply(state, task, available, allocation, need);

        let report = self.check_safety(state);
        if !report.is_safe() {
            previous.roll_back(state);
            info!(
                task,
                request = %amounts,
                blocked = ?report.blocked,
                "Request cannot be granted, system would not be in a safe state"
            );
            return Ok(Decision::new(
                Outcome::Wait,
                DecisionReason::Unsafe {
                    blocked: report.blocked,
                },
            ));
        }

        debug!(
            task,
            request = %amounts,
            remaining = %state.available,
            sequence = ?report.sequence,
            "Request granted"
        );
        if self.config.trace_state {
            debug!(task, state = %state, "Resources after allocation");
        }

        Ok(Decision {
            outcome: Outcome::Success,
            reason: DecisionReason::Granted,
            safe_sequence: Some(report.sequence),
        })
    }

    fn check_safety(&self, state: &ResourceState) -> SafetyReport {
        match self.config.strategy {
            SafetyStrategy::TaggedQueue => assess(&state.available, &state.allocation, &state.need),
            SafetyStrategy::Exhaustive => {
                assess_exhaustive(&state.available, &state.allocation, &state.need)
            }
        }
    }
}

/// Arbitrate with the default configuration.
pub fn allocate(state: &mut ResourceState, request: &Request) -> Result<Outcome, ArbiterError> {
    Arbiter::default().allocate(state, request)
}

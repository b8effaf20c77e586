//! # banker-arbiter
//!
//! Deadlock-avoidance arbiter implementing the Banker's Algorithm.
//!
//! Given a snapshot of available resources, per-task allocations and per-task
//! remaining needs, the arbiter decides whether granting one incremental
//! request keeps the system in a *safe state*, one from which some ordering
//! of task completions never demands more than is available. It performs the
//! allocation only if so.
//!
//! ## Components
//!
//! - **Validator**: structural checks (matrix shapes, task index) before any
//!   arithmetic runs
//! - **Safety Checker**: simulates task completions over a FIFO of pending
//!   tasks to decide whether a state is safe
//! - **Arbiter**: validate, tentatively apply, check safety, then commit or
//!   roll back
//!
//! ## Guarantees
//!
//! - State is mutated only on [`Outcome::Success`]; `Fail`, `Wait` and every
//!   error leave it bit-identical.
//! - A granted request preserves `available + Σ allocation` per resource.
//! - One call performs exactly one decision; retrying is the caller's policy.
//!
//! The arbiter holds no state between calls and does no locking. Callers that
//! share one [`ResourceState`] across threads must serialize access.

pub mod arbiter;
pub mod error;
pub mod safety;
pub mod validator;

pub use arbiter::{allocate, Arbiter, ArbiterConfig, Decision, DecisionReason, SafetyStrategy};
pub use error::{ArbiterError, StateError};
pub use safety::{assess, assess_exhaustive, is_safe, SafetyReport};
pub use validator::{is_valid, validate, validate_shape};

pub use banker_types::{Outcome, Request, ResourceState, ResourceVector};

//! Classic five-task, three-resource walkthrough.

use banker_arbiter::{
    allocate, is_safe, Arbiter, DecisionReason, Outcome, Request, ResourceVector,
};

use super::support::{init_tracing, textbook_state};

#[test]
fn initial_state_is_safe() {
    let state = textbook_state();
    assert!(is_safe(&state.available, &state.allocation, &state.need));
}

#[test]
fn task_one_request_is_granted() {
    init_tracing();
    let mut state = textbook_state();

    let outcome = allocate(&mut state, &Request::new(1, [1, 0, 2])).unwrap();

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(state.available, ResourceVector::from([2, 3, 0]));
    assert_eq!(state.allocation[1], ResourceVector::from([3, 0, 2]));
    assert_eq!(state.need[1], ResourceVector::from([0, 2, 0]));
    assert!(is_safe(&state.available, &state.allocation, &state.need));
}

#[test]
fn task_four_request_is_refused_as_unsafe() {
    init_tracing();
    let mut state = textbook_state();

    let decision = Arbiter::default()
        .decide(&mut state, &Request::new(4, [3, 3, 0]))
        .unwrap();

    assert_eq!(decision.outcome, Outcome::Wait);
    assert!(matches!(decision.reason, DecisionReason::Unsafe { .. }));
    assert_eq!(state, textbook_state());
}

#[test]
fn follow_up_requests_after_first_grant() {
    init_tracing();
    let arbiter = Arbiter::default();
    let mut state = textbook_state();
    arbiter
        .allocate(&mut state, &Request::new(1, [1, 0, 2]))
        .unwrap();
    let after_grant = state.clone();

    // Only [2, 3, 0] is free now.
    let decision = arbiter
        .decide(&mut state, &Request::new(4, [3, 3, 0]))
        .unwrap();
    assert_eq!(decision.outcome, Outcome::Wait);
    assert_eq!(
        decision.reason,
        DecisionReason::ExceedsAvailable { resource: 0 }
    );
    assert_eq!(state, after_grant);

    // Fits in the pool but leaves no task able to finish.
    let decision = arbiter
        .decide(&mut state, &Request::new(0, [0, 2, 0]))
        .unwrap();
    assert_eq!(decision.outcome, Outcome::Wait);
    assert!(matches!(decision.reason, DecisionReason::Unsafe { .. }));
    assert_eq!(state, after_grant);
}

#[test]
fn tasks_can_drain_their_whole_need() {
    init_tracing();
    let arbiter = Arbiter::default();
    let mut state = textbook_state();

    // Task 3 asks for exactly its remaining need, which fits in the pool.
    let need = state.need[3].clone();
    assert_eq!(
        arbiter.allocate(&mut state, &Request::new(3, need)),
        Ok(Outcome::Success)
    );
    assert!(state.need[3].is_zero());
    assert_eq!(state.available, ResourceVector::from([3, 2, 1]));
}

//! Rejections and errors leave the state exactly as it was.

use banker_arbiter::{
    allocate, Arbiter, ArbiterError, DecisionReason, Outcome, Request, ResourceState,
    ResourceVector, StateError,
};

use super::support::{init_tracing, rows, textbook_state};

#[test]
fn request_beyond_need_fails_regardless_of_supply() {
    init_tracing();
    let mut state = textbook_state();
    state.available = ResourceVector::from([100, 100, 100]);
    let before = state.clone();

    let outcome = allocate(&mut state, &Request::new(1, [2, 0, 0])).unwrap();

    assert_eq!(outcome, Outcome::Fail);
    assert_eq!(state, before);
}

#[test]
fn request_equal_to_available_passes_supply_check() {
    let mut state = ResourceState::new(
        ResourceVector::from([2, 1]),
        rows(&[&[0, 0], &[1, 1]]),
        rows(&[&[2, 1], &[1, 0]]),
    );

    let outcome = allocate(&mut state, &Request::new(0, [2, 1])).unwrap();

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(state.available, ResourceVector::from([0, 0]));
    assert!(state.need[0].is_zero());
}

#[test]
fn zero_request_succeeds_even_in_unsafe_state() {
    let mut state = ResourceState::new(
        ResourceVector::from([0]),
        rows(&[&[1], &[1]]),
        rows(&[&[1], &[1]]),
    );
    let before = state.clone();

    let decision = Arbiter::default()
        .decide(&mut state, &Request::new(1, [0]))
        .unwrap();

    assert_eq!(decision.outcome, Outcome::Success);
    assert_eq!(decision.reason, DecisionReason::EmptyRequest);
    assert_eq!(state, before);
}

#[test]
fn zero_resource_system_grants_empty_request() {
    let mut state = ResourceState::new(
        ResourceVector::default(),
        vec![ResourceVector::default()],
        vec![ResourceVector::default()],
    );
    assert_eq!(
        allocate(&mut state, &Request::new(0, ResourceVector::default())),
        Ok(Outcome::Success)
    );
}

#[test]
fn structural_errors_are_reported_before_any_check() {
    let mut state = textbook_state();
    state.need[2] = ResourceVector::from([6, 0]);

    let err = allocate(&mut state, &Request::new(0, [9, 9, 9])).unwrap_err();

    assert_eq!(
        err,
        ArbiterError::InvalidState(StateError::NeedRowWidth {
            row: 2,
            expected: 3,
            actual: 2
        })
    );
}

#[test]
fn snapshot_round_trips_through_json() {
    let json = r#"{
        "available": [3, 3, 2],
        "allocation": [[0, 1, 0], [2, 0, 0], [3, 0, 2], [2, 1, 1], [0, 0, 2]],
        "need": [[7, 4, 3], [1, 2, 2], [6, 0, 0], [0, 1, 1], [4, 3, 1]]
    }"#;
    let mut state: ResourceState = serde_json::from_str(json).unwrap();
    assert_eq!(state, textbook_state());

    let decision = Arbiter::default()
        .decide(&mut state, &Request::new(1, [1, 0, 2]))
        .unwrap();
    let encoded = serde_json::to_value(&decision).unwrap();
    assert_eq!(encoded["outcome"], "Success");
    assert_eq!(encoded["reason"], "Granted");
}

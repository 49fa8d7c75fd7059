//! Tests that the game invariants hold across whole lifecycles.

use noughts::invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    MonotonicBoardInvariant,
};
use noughts::{GameController, InputEvent};

fn assert_all_hold(controller: &GameController) {
    let state = controller.state();
    assert!(MonotonicBoardInvariant::holds(state));
    assert!(AlternatingTurnInvariant::holds(state));
    assert!(HistoryConsistentInvariant::holds(state));
    assert!(GameInvariants::check_all(state).is_ok());
}

#[test]
fn test_invariants_hold_after_every_move() {
    let mut controller = GameController::new();
    assert_all_hold(&controller);

    // A full game ending in a draw.
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        controller.handle(InputEvent::CellSelected(index));
        assert_all_hold(&controller);
    }
}

#[test]
fn test_invariants_hold_through_a_win() {
    let mut controller = GameController::new();

    for index in [0, 3, 1, 4, 2] {
        controller.handle(InputEvent::CellSelected(index));
        assert_all_hold(&controller);
    }
}

#[test]
fn test_invariants_hold_after_rejections() {
    let mut controller = GameController::new();
    controller.handle(InputEvent::CellSelected(4));

    // Rejected moves leave the state untouched.
    controller.handle(InputEvent::CellSelected(4));
    controller.handle(InputEvent::CellSelected(99));
    assert_all_hold(&controller);
}

#[test]
fn test_invariants_hold_after_reset() {
    let mut controller = GameController::new();
    for index in [0, 3, 1] {
        controller.handle(InputEvent::CellSelected(index));
    }

    controller.handle(InputEvent::ResetRequested);
    assert_all_hold(&controller);
}

#[test]
fn test_invariant_descriptions_are_distinct() {
    let descriptions = [
        MonotonicBoardInvariant::description(),
        AlternatingTurnInvariant::description(),
        HistoryConsistentInvariant::description(),
    ];

    for (i, a) in descriptions.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &descriptions[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

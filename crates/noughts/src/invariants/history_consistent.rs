//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::types::{GameState, Square};

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
/// No moves are missing, no squares are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let occupied = state
            .board()
            .squares()
            .iter()
            .filter(|square| **square != Square::Empty)
            .count();

        state.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

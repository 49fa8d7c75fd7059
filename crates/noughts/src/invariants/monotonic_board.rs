//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::types::{Board, GameState, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it never changes.
/// This is verified by replaying the move history and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        // Reconstruct board from history
        let mut reconstructed = Board::new();

        for mov in state.history() {
            // Square must be empty before placing
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }

            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        // Reconstructed board must match current board
        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

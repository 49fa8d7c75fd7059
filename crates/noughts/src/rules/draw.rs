//! Draw detection.

use crate::types::{Board, Square};
use tracing::instrument;

/// True when every square is occupied.
///
/// A full board alone does not decide the game: the caller must rule
/// out a win first, since the final move can both fill the board and
/// complete a line.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board
        .squares()
        .iter()
        .all(|square| *square != Square::Empty)
}

//! Moves recorded against the game history.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single placement: which player marked which position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who made the move.
    pub player: Player,
    /// The position they marked.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mov = Move::new(Player::X, Position::Center);
        assert_eq!(mov.to_string(), "X -> Center");
    }

    #[test]
    fn test_serde_round_trip() {
        let mov = Move::new(Player::O, Position::TopRight);
        let json = serde_json::to_string(&mov).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mov);
    }
}

//! The event boundary between the game core and its front ends.
//!
//! A front end translates user gestures into [`InputEvent`]s, hands
//! them to the controller, and applies the returned [`Effect`]s to its
//! display. Nothing else crosses the boundary.

use crate::position::Position;
use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};

/// An inbound request from a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The user selected the cell at this board index.
    CellSelected(usize),
    /// The user asked for a fresh game.
    ResetRequested,
}

/// An outbound display instruction for the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Show `square` at `position`.
    CellUpdated {
        /// The cell to redraw.
        position: Position,
        /// Its new content.
        square: Square,
    },
    /// Replace the status line.
    StatusUpdated(StatusMessage),
}

/// The full set of status lines the game can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusMessage {
    /// No outcome to report; the status area is blank.
    Cleared,
    /// The given player has won.
    Win(Player),
    /// The board filled with no winner.
    Draw,
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusMessage::Cleared => Ok(()),
            StatusMessage::Win(player) => write!(f, "Player {player} wins!"),
            StatusMessage::Draw => write!(f, "It's a draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_text() {
        assert_eq!(StatusMessage::Cleared.to_string(), "");
        assert_eq!(StatusMessage::Win(Player::X).to_string(), "Player X wins!");
        assert_eq!(StatusMessage::Win(Player::O).to_string(), "Player O wins!");
        assert_eq!(StatusMessage::Draw.to_string(), "It's a draw!");
    }

    #[test]
    fn test_effect_serde_round_trip() {
        let effect = Effect::CellUpdated {
            position: Position::Center,
            square: Square::Occupied(Player::O),
        };
        let json = serde_json::to_string(&effect).unwrap();
        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, effect);
    }
}

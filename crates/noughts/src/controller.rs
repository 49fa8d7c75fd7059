//! The game controller: single owner of the game state.

use crate::action::Move;
use crate::events::{Effect, InputEvent, StatusMessage};
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, GameStatus, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Why a submitted move was not applied.
///
/// Rejections never reach the front end. A rejected move produces no
/// effects; the reason is logged at debug level and the state is left
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
enum Rejection {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a board square.
    #[display("Index {} is out of range", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square at {} is already occupied", _0)]
    Occupied(Position),
}

/// Error from [`GameController::replay`]: a scripted move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Move {} (index {}) was rejected", move_number, index)]
pub struct ReplayError {
    /// 1-based number of the rejected move in the script.
    pub move_number: usize,
    /// The board index that move named.
    pub index: usize,
}

impl std::error::Error for ReplayError {}

/// Owns the full game state and applies the rules to incoming events.
///
/// The controller is the only writer of [`GameState`]. Front ends feed
/// it [`InputEvent`]s and apply the returned [`Effect`]s to their
/// display; they never touch the state directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// Creates a controller over a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Read access to the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The status line a front end should currently show.
    pub fn status_message(&self) -> StatusMessage {
        match self.state.status() {
            GameStatus::InProgress => StatusMessage::Cleared,
            GameStatus::Won(player) => StatusMessage::Win(player),
            GameStatus::Draw => StatusMessage::Draw,
        }
    }

    /// The completed line, once the game has been won.
    ///
    /// When one move finishes several lines at once, this is the first
    /// match in [`rules::WINNING_LINES`] order.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.state.board()).map(|(_, line)| line)
    }

    /// Routes an input event to the matching operation.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: InputEvent) -> Vec<Effect> {
        match event {
            InputEvent::CellSelected(index) => self.submit_move(index),
            InputEvent::ResetRequested => self.reset(),
        }
    }

    /// Applies the current player's mark at the given board index.
    ///
    /// Returns the display effects of the move: the updated square,
    /// plus a status update when the move ends the game. An invalid
    /// request (game over, index out of range, occupied square) changes
    /// nothing and returns no effects.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    pub fn submit_move(&mut self, index: usize) -> Vec<Effect> {
        let position = match self.validate(index) {
            Ok(position) => position,
            Err(rejection) => {
                debug!(%rejection, "move rejected");
                return Vec::new();
            }
        };

        let player = self.state.turn();
        self.state.place(Move::new(player, position));

        let mut effects = vec![Effect::CellUpdated {
            position,
            square: Square::Occupied(player),
        }];

        // A full board with a completed line is a win, so the win check
        // runs first.
        if let Some((winner, line)) = rules::winning_line(self.state.board()) {
            info!(%winner, ?line, "game won");
            self.state.set_status(GameStatus::Won(winner));
            effects.push(Effect::StatusUpdated(StatusMessage::Win(winner)));
        } else if rules::is_full(self.state.board()) {
            info!("game drawn");
            self.state.set_status(GameStatus::Draw);
            effects.push(Effect::StatusUpdated(StatusMessage::Draw));
        } else {
            self.state.advance_turn();
        }

        debug!(board = %self.state.board().render(), "board after move");
        invariants::assert_invariants(&self.state);
        effects
    }

    /// Clears the board and starts a fresh game with X to move.
    ///
    /// Emits one empty-square update per position followed by a cleared
    /// status line, so a front end can redraw without special cases.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Vec<Effect> {
        info!("game reset");
        self.state = GameState::new();

        let mut effects: Vec<Effect> = Position::iter()
            .map(|position| Effect::CellUpdated {
                position,
                square: Square::Empty,
            })
            .collect();
        effects.push(Effect::StatusUpdated(StatusMessage::Cleared));
        effects
    }

    fn validate(&self, index: usize) -> Result<Position, Rejection> {
        if self.state.status().is_terminal() {
            return Err(Rejection::GameOver);
        }

        let position = Position::from_index(index).ok_or(Rejection::OutOfRange(index))?;

        if !self.state.board().is_empty(position) {
            return Err(Rejection::Occupied(position));
        }

        Ok(position)
    }

    /// Rebuilds a controller by submitting each index in order.
    ///
    /// Fails on the first move the controller rejects. Useful for tests
    /// and tooling that script games as index sequences.
    pub fn replay(indices: &[usize]) -> Result<Self, ReplayError> {
        let mut controller = Self::new();

        for (i, &index) in indices.iter().enumerate() {
            let effects = controller.submit_move(index);
            if effects.is_empty() {
                return Err(ReplayError {
                    move_number: i + 1,
                    index,
                });
            }
        }

        Ok(controller)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_first_move_is_x() {
        let mut controller = GameController::new();
        let effects = controller.submit_move(4);

        assert_eq!(
            effects,
            vec![Effect::CellUpdated {
                position: Position::Center,
                square: Square::Occupied(Player::X),
            }]
        );
        assert_eq!(controller.state().turn(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_rejected() {
        let mut controller = GameController::new();
        controller.submit_move(4);

        let effects = controller.submit_move(4);
        assert!(effects.is_empty());
        assert_eq!(controller.state().history().len(), 1);
        assert_eq!(controller.state().turn(), Player::O);

        // The square keeps its first mark.
        assert_eq!(
            controller.state().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut controller = GameController::new();

        assert!(controller.submit_move(9).is_empty());
        assert!(controller.submit_move(100).is_empty());
        assert_eq!(controller.state().turn(), Player::X);
    }

    #[test]
    fn test_win_reports_line_and_stops_play() {
        let mut controller = GameController::replay(&[0, 3, 1, 4]).unwrap();

        let effects = controller.submit_move(2);
        assert_eq!(effects.len(), 2);
        assert_eq!(
            effects[1],
            Effect::StatusUpdated(StatusMessage::Win(Player::X))
        );
        assert_eq!(controller.state().status(), GameStatus::Won(Player::X));
        assert_eq!(
            controller.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );

        // No further moves are accepted.
        assert!(controller.submit_move(8).is_empty());
    }

    #[test]
    fn test_replay_error_names_the_rejected_move() {
        let err = GameController::replay(&[4, 4]).unwrap_err();
        assert_eq!(
            err,
            ReplayError {
                move_number: 2,
                index: 4,
            }
        );
        assert_eq!(err.to_string(), "Move 2 (index 4) was rejected");
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::GameOver.to_string(), "Game is already over");
        assert_eq!(
            Rejection::OutOfRange(9).to_string(),
            "Index 9 is out of range"
        );
        assert_eq!(
            Rejection::Occupied(Position::Center).to_string(),
            "Square at Center is already occupied"
        );
    }
}

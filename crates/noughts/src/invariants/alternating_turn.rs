//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern, with X first. While
/// the game is in progress the turn belongs to the opponent of the last
/// mover; once the game ends the turn stops advancing and stays with
/// the player who made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let Some(first) = history.first() else {
            // No moves yet: X opens and nothing can have ended.
            return state.turn() == Player::X && !state.status().is_terminal();
        };

        if first.player != Player::X {
            return false;
        }

        // Check alternation
        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        let last = history[history.len() - 1].player;
        if state.status().is_terminal() {
            state.turn() == last
        } else {
            state.turn() == last.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::position::Position;
    use crate::types::GameStatus;

    #[test]
    fn test_fresh_state_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut state = GameState::new();
        let moves = [
            (Player::X, Position::TopLeft),
            (Player::O, Position::Center),
            (Player::X, Position::TopRight),
        ];
        for (player, position) in moves {
            state.place(Move::new(player, position));
            state.advance_turn();
        }

        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.turn(), Player::O);
    }

    #[test]
    fn test_wrong_opener_violates() {
        let mut state = GameState::new();
        state.place(Move::new(Player::O, Position::Center));
        state.advance_turn();

        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::new();
        state.place(Move::new(Player::X, Position::TopLeft));
        state.place(Move::new(Player::X, Position::Center));

        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_terminal_turn_stays_with_last_mover() {
        let mut state = GameState::new();
        let moves = [
            (Player::X, Position::TopLeft),
            (Player::O, Position::MiddleLeft),
            (Player::X, Position::TopCenter),
            (Player::O, Position::Center),
        ];
        for (player, position) in moves {
            state.place(Move::new(player, position));
            state.advance_turn();
        }

        // X completes the top row; the turn does not advance afterwards.
        state.place(Move::new(Player::X, Position::TopRight));
        state.set_status(GameStatus::Won(Player::X));
        assert!(AlternatingTurnInvariant::holds(&state));

        // A turn flip after the game has ended is a violation.
        state.advance_turn();
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}

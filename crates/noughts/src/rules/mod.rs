//! Pure rule predicates over board state.
//!
//! Nothing here mutates or allocates game state. The controller calls
//! these after each placement; tests and tooling can call them against
//! any board directly.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner, winning_line};

//! Noughts - a two-player tic-tac-toe engine behind an event boundary.
//!
//! # Architecture
//!
//! - **Controller**: [`GameController`] owns the game state and is its only writer
//! - **Rules**: pure win and draw predicates over board snapshots
//! - **Events**: [`InputEvent`]s in, [`Effect`]s out; nothing else crosses the boundary
//! - **Invariants**: first-class state guarantees, checked in debug builds
//!
//! # Example
//!
//! ```
//! use noughts::{GameController, InputEvent, Player, StatusMessage};
//!
//! let mut controller = GameController::new();
//!
//! // X takes the top row while O answers in the middle row.
//! for index in [0, 3, 1, 4, 2] {
//!     controller.handle(InputEvent::CellSelected(index));
//! }
//!
//! assert_eq!(controller.status_message(), StatusMessage::Win(Player::X));
//! assert_eq!(controller.status_message().to_string(), "Player X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod controller;
mod events;
mod position;
mod types;

// Public modules - checkable surfaces
pub mod invariants;
pub mod rules;

// Crate-level exports - Controller
pub use controller::{GameController, ReplayError};

// Crate-level exports - Event boundary
pub use events::{Effect, InputEvent, StatusMessage};

// Crate-level exports - Moves and positions
pub use action::Move;
pub use position::Position;

// Crate-level exports - Core state types
pub use types::{Board, GameState, GameStatus, Player, Square};

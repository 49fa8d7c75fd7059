//! Application state and logic.

use crate::config::Theme;
use crate::input;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use noughts::{Effect, GameController, InputEvent, Position};
use ratatui::layout::{Position as ScreenPosition, Rect};
use tracing::debug;

/// Whether the main loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep polling and drawing.
    Continue,
    /// Tear the terminal down and exit.
    Quit,
}

/// Main application state.
pub struct App {
    controller: GameController,
    status_line: String,
    cursor: Position,
    cell_rects: [Rect; 9],
    theme: Theme,
    show_help: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(theme: Theme, show_help: bool) -> Self {
        Self {
            controller: GameController::new(),
            status_line: String::new(),
            cursor: Position::Center,
            cell_rects: [Rect::default(); 9],
            theme,
            show_help,
        }
    }

    /// The game controller backing the display.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// The current status line, verbatim from the game.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// The square the keyboard cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The mark colors in use.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the help line is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Records where each cell was drawn, for mouse hit-testing.
    pub fn set_cell_rects(&mut self, rects: [Rect; 9]) {
        self.cell_rects = rects;
    }

    /// Feeds an input event to the game and applies the effects.
    pub fn dispatch(&mut self, event: InputEvent) {
        debug!(?event, "Dispatching input event");
        for effect in self.controller.handle(event) {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::CellUpdated { position, square } => {
                // The board is redrawn from state every frame, so a
                // cell update only needs to be logged.
                debug!(?position, ?square, "Cell updated");
            }
            Effect::StatusUpdated(message) => {
                self.status_line = message.to_string();
            }
        }
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Flow::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.dispatch(InputEvent::ResetRequested);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(InputEvent::CellSelected(self.cursor.to_index()));
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = input::digit_to_position(c) {
                    self.dispatch(InputEvent::CellSelected(position.to_index()));
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key.code);
            }
            _ => {}
        }

        Flow::Continue
    }

    /// Handles a mouse event. Only left clicks on a drawn cell do
    /// anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Flow {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Flow::Continue;
        }

        let click = ScreenPosition::new(mouse.column, mouse.row);
        for (index, rect) in self.cell_rects.iter().enumerate() {
            if rect.contains(click) {
                self.dispatch(InputEvent::CellSelected(index));
                break;
            }
        }

        Flow::Continue
    }
}

//! Keyboard mapping helpers.

use crossterm::event::KeyCode;
use noughts::Position;

/// Maps the digit keys 1-9 onto board positions, top-left to
/// bottom-right. '0' and non-digits map to nothing.
pub fn digit_to_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    let index = digit.checked_sub(1)?;
    Position::from_index(index)
}

/// Moves the cursor one square in the given direction, stopping at the
/// board edge. Keys that are not arrows leave the cursor in place.
pub fn move_cursor(cursor: Position, code: KeyCode) -> Position {
    let (mut row, mut col) = (cursor.row(), cursor.col());

    match code {
        KeyCode::Up => row = row.saturating_sub(1),
        KeyCode::Down => row = (row + 1).min(2),
        KeyCode::Left => col = col.saturating_sub(1),
        KeyCode::Right => col = (col + 1).min(2),
        _ => {}
    }

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

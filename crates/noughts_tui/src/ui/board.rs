//! Board rendering and cell geometry.

use crate::app::App;
use noughts::{GameStatus, Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 12;

/// Computes the screen rectangle of each cell, in board index order.
///
/// The same geometry drives both drawing and mouse hit-testing, so the
/// two can never disagree.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let [top, _, middle, _, bottom] = row_areas(area);

    let mut rects = [Rect::default(); 9];
    for (r, row) in [top, middle, bottom].into_iter().enumerate() {
        let [left, _, center, _, right] = col_areas(row);
        for (c, cell) in [left, center, right].into_iter().enumerate() {
            rects[r * 3 + c] = cell;
        }
    }
    rects
}

/// Renders the board block, grid lines, and squares.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let state = app.controller().state();
    let title = match state.status() {
        GameStatus::InProgress => format!("Player {} to move", state.turn()),
        GameStatus::Won(_) | GameStatus::Draw => "Game over".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    f.render_widget(block, area);

    let [top, h_sep_1, middle, h_sep_2, bottom] = row_areas(area);
    render_separator(f, h_sep_1);
    render_separator(f, h_sep_2);
    for row in [top, middle, bottom] {
        let [_, v_sep_1, _, v_sep_2, _] = col_areas(row);
        render_vertical_sep(f, v_sep_1);
        render_vertical_sep(f, v_sep_2);
    }

    for (rect, pos) in cell_rects(area).into_iter().zip(Position::ALL) {
        render_square(f, rect, app, pos);
    }
}

fn row_areas(area: Rect) -> [Rect; 5] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(board_area)
}

fn col_areas(row: Rect) -> [Rect; 5] {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .areas(row)
}

fn render_square(f: &mut Frame, area: Rect, app: &App, pos: Position) {
    let state = app.controller().state();
    let theme = app.theme();

    let (text, mut style) = match state.board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(theme.x).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(theme.o).add_modifier(Modifier::BOLD),
        ),
    };

    if let Some(line) = app.controller().winning_line()
        && line.contains(&pos)
    {
        style = style.add_modifier(Modifier::REVERSED);
    } else if pos == app.cursor() && !state.status().is_terminal() {
        style = style.bg(Color::DarkGray).fg(Color::White);
    }

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .areas(area);
    let [_, centered, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .areas(middle);
    centered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rects_form_a_grid() {
        let area = Rect::new(0, 0, 60, 20);
        let rects = cell_rects(area);

        for rect in &rects {
            assert!(rect.width > 0);
            assert_eq!(rect.height, 3);
        }

        // Rows share a y coordinate, columns share an x coordinate.
        for row in 0..3 {
            assert_eq!(rects[row * 3].y, rects[row * 3 + 1].y);
            assert_eq!(rects[row * 3].y, rects[row * 3 + 2].y);
        }
        for col in 0..3 {
            assert_eq!(rects[col].x, rects[col + 3].x);
            assert_eq!(rects[col].x, rects[col + 6].x);
        }

        // Left to right, top to bottom.
        assert!(rects[0].x < rects[1].x);
        assert!(rects[0].y < rects[3].y);
    }

    #[test]
    fn test_cell_rects_fit_inside_the_area() {
        let area = Rect::new(5, 2, 60, 20);
        for rect in cell_rects(area) {
            assert!(rect.x >= area.x);
            assert!(rect.y >= area.y);
            assert!(rect.right() <= area.right());
            assert!(rect.bottom() <= area.bottom());
        }
    }
}

//! Frame layout and widgets.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Draws the whole frame and records where each cell landed so mouse
/// clicks can be resolved against the same geometry.
pub fn draw(f: &mut Frame, app: &mut App) {
    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Min(14),
        Constraint::Length(3),
    ];
    if app.show_help() {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    render_title(f, chunks[0]);

    app.set_cell_rects(board::cell_rects(chunks[1]));
    board::render_board(f, chunks[1], app);

    render_status(f, chunks[2], app);

    if app.show_help() {
        render_help(f, chunks[3]);
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("Noughts & Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(app.status_line().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("1-9 or arrows + Enter to move | click a square | r restart | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, area);
}

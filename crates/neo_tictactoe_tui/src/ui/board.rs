//! Tic-tac-toe board rendering.

use neo_tictactoe::{CellView, GameView, Position, Roster};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{center_rect, mark_color};

/// Renders the board with cursor, bounce and winning-line highlights.
pub fn render_board(f: &mut Frame, area: Rect, view: &GameView, roster: &Roster, cursor: Position) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], view, roster, cursor, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], view, roster, cursor, 1);
    render_separator(f, rows[3]);
    render_row(f, rows[4], view, roster, cursor, 2);
}

fn render_row(f: &mut Frame, area: Rect, view: &GameView, roster: &Roster, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            render_square(f, cols[col * 2], view.cell(pos), roster, pos == cursor);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, cell: &CellView, roster: &Roster, under_cursor: bool) {
    let (text, mut style) = match cell.mark {
        Some(mark) => (
            roster.profile(mark).emoji().clone(),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        ),
        None if cell.selectable => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(Color::Gray),
        ),
        None => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    if cell.in_winning_line {
        style = style.bg(Color::Yellow);
    }
    if cell.bouncing {
        style = style.bg(Color::Rgb(226, 176, 122)).add_modifier(Modifier::BOLD);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Bouncing marks sit one line higher, as if mid-hop.
    let mut lines = vec![Line::default(); 3];
    let slot = if cell.bouncing { 0 } else { 1 };
    lines[slot] = Line::from(Span::styled(text, style));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::Rgb(91, 58, 27)));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::Rgb(91, 58, 27)))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

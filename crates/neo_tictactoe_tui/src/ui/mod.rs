//! UI rendering using ratatui.

mod board;
mod confetti;

use neo_tictactoe::{Banner, GameView, Mark, Position, Roster};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use confetti::render_confetti;

/// Title shown above the board.
pub const TITLE: &str = "Neo's Tic-Tac-Toe";

/// Draws one frame.
pub fn draw(f: &mut Frame, view: &GameView, roster: &Roster, cursor: Position, tick: u64) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Roster
            Constraint::Length(3), // Banner
            Constraint::Length(3), // Restart
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_roster(f, chunks[1], roster);
    render_banner(f, chunks[2], &view.banner);
    render_restart(f, chunks[3], view.restart_pulse);

    let board_area = shake_offset(chunks[4], view.shake, tick);
    render_board(f, board_area, view, roster, cursor);
    if !view.confetti.is_empty() {
        render_confetti(f, chunks[4], &view.confetti);
    }

    let help = Paragraph::new("1-9 or arrows + Enter: place | R: restart | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[5]);
}

fn render_roster(f: &mut Frame, area: Rect, roster: &Roster) {
    let entry = |mark: Mark| {
        let profile = roster.profile(mark);
        Span::styled(
            format!("{} {}", profile.emoji(), profile.name()),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        )
    };
    let line = Line::from(vec![entry(Mark::A), Span::raw("   vs   "), entry(Mark::B)]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_banner(f: &mut Frame, area: Rect, banner: &Banner) {
    let style = match banner {
        Banner::Turn { mark, .. } => Style::default().fg(mark_color(*mark)),
        Banner::Winner { .. } => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Banner::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    };
    let text = match banner {
        Banner::Winner { profile, .. } => format!("{} {}", profile.emoji(), banner),
        _ => banner.to_string(),
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_restart(f: &mut Frame, area: Rect, pulse: bool) {
    let style = if pulse {
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(169, 116, 58))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Rgb(226, 176, 122))
    };
    let button = Paragraph::new("[ R ] Restart Game")
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, center_rect(area, 28, area.height));
}

/// Colour associated with a mark.
pub(crate) fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::A => Color::Rgb(169, 116, 58),
        Mark::B => Color::Rgb(91, 58, 27),
    }
}

/// Jitters `area` sideways on alternate frames while shaking.
pub(crate) fn shake_offset(area: Rect, shake: bool, tick: u64) -> Rect {
    if !shake || area.width < 2 {
        return area;
    }
    let mut shifted = area;
    if tick % 2 == 0 {
        shifted.x = area.x.saturating_add(1);
    }
    shifted.width = area.width - 1;
    shifted
}

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_tictactoe::{GameController, RecordingTimer};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(game: &GameController<RecordingTimer>, tick: u64) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).expect("test terminal");
        let view = game.view();
        terminal
            .draw(|f| draw(f, &view, game.roster(), Position::Center, tick))
            .expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_initial_frame() {
        let game = GameController::new(RecordingTimer::new());
        let text = render(&game, 0);
        assert!(text.contains(TITLE));
        assert!(text.contains("Current Turn: Beaver"));
        assert!(text.contains("Restart Game"));
    }

    #[test]
    fn test_win_and_draw_banners() {
        let mut game = GameController::new(RecordingTimer::new()).with_seed(5);
        for pos in [0, 4, 1, 3, 2] {
            game.handle_cell_select(Position::from_index(pos).expect("index"));
        }
        assert!(render(&game, 0).contains("Beaver Wins!"));

        game.handle_restart();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.handle_cell_select(Position::from_index(pos).expect("index"));
        }
        assert!(render(&game, 1).contains("It's a Draw!"));
    }

    #[test]
    fn test_shake_offset_alternates() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(shake_offset(area, false, 0), area);
        assert_eq!(shake_offset(area, true, 0).x, 1);
        assert_eq!(shake_offset(area, true, 1).x, 0);
        assert_eq!(shake_offset(area, true, 1).width, 19);
    }

    #[test]
    fn test_center_rect() {
        let area = Rect::new(0, 0, 40, 20);
        let inner = center_rect(area, 10, 4);
        assert_eq!(inner, Rect::new(15, 8, 10, 4));
    }
}

//! Confetti overlay.

use neo_tictactoe::ConfettiPiece;
use ratatui::{Frame, layout::Rect, text::Span};
use unicode_width::UnicodeWidthStr;

/// Draws each piece at its percentage position inside `area`.
pub fn render_confetti(f: &mut Frame, area: Rect, pieces: &[ConfettiPiece]) {
    for piece in pieces {
        if let Some(spot) = piece_rect(area, piece) {
            f.render_widget(Span::raw(piece.glyph), spot);
        }
    }
}

/// Cell rectangle for `piece`, or `None` if it would not fit in `area`.
pub(crate) fn piece_rect(area: Rect, piece: &ConfettiPiece) -> Option<Rect> {
    let width = piece.glyph.width() as u16;
    if width == 0 || area.width < width || area.height == 0 {
        return None;
    }
    let x = area.x + ((f32::from(area.width - width) * piece.x_percent / 100.0) as u16);
    let y = area.y + ((f32::from(area.height - 1) * piece.y_percent / 100.0) as u16);
    Some(Rect::new(x, y, width, 1))
}

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use super::next_queue::draw_mini_piece;
use crate::engine::piece::PieceKind;
use crate::ui::theme;

/// The hold slot panel; the piece dims once hold is spent for this piece.
pub struct HoldBoxWidget {
    pub kind: Option<PieceKind>,
    pub available: bool,
}

impl Widget for HoldBoxWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 5 {
            return;
        }

        let x = area.x;
        let mut y = area.y;

        buf.set_string(x + 1, y, "HOLD", theme::header_style());
        y += 1;
        let sep: String = theme::PANEL_H.repeat(area.width as usize);
        buf.set_string(x, y, &sep, Style::default().fg(theme::PANEL_COLOR));
        y += 1;

        if let Some(kind) = self.kind {
            let color = if self.available {
                kind.color()
            } else {
                kind.dim_color()
            };
            draw_mini_piece(buf, x + 1, y, kind, color);
        }
    }
}

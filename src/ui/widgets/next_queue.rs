use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::engine::piece::{mask, mask_cells, PieceKind, Rotation};
use crate::ui::theme;

/// Upcoming pieces, next on top.
pub struct NextQueueWidget {
    pub pieces: Vec<PieceKind>,
}

impl Widget for NextQueueWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 3 {
            return;
        }

        let x = area.x;
        let mut y = area.y;

        buf.set_string(x + 1, y, "NEXT", theme::header_style());
        y += 1;
        let sep: String = theme::PANEL_H.repeat(area.width as usize);
        buf.set_string(x, y, &sep, Style::default().fg(theme::PANEL_COLOR));
        y += 1;

        for (i, &kind) in self.pieces.iter().enumerate() {
            if y + 3 > area.y + area.height {
                break;
            }
            let color = if i == 0 {
                kind.bright_color()
            } else {
                kind.color()
            };
            draw_mini_piece(buf, x + 1, y, kind, color);
            y += 3;
        }
    }
}

/// Draw a piece's spawn-state cells in a 2-row thumbnail at (x, y).
pub fn draw_mini_piece(buf: &mut Buffer, x: u16, y: u16, kind: PieceKind, color: Color) {
    let style = Style::default().fg(color);
    let cells = mask_cells(mask(kind, Rotation::R0), 0, 0);

    let min_x = cells.iter().map(|c| c.0).min().unwrap_or(0);
    let max_y = cells.iter().map(|c| c.1).max().unwrap_or(0);

    let offset_x = match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        _ => 1,
    };

    for &(cx, cy) in &cells {
        let sx = x + offset_x + (cx - min_x) as u16 * 2;
        let sy = y + (max_y - cy) as u16;
        if sx + 1 < buf.area.width && sy < buf.area.height {
            buf.set_string(sx, sy, theme::BLOCK_FULL, style);
        }
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::engine::stats::Stats;
use crate::ui::theme;

/// Result overlay once a duel ends.
pub struct GameOverScreen<'a> {
    /// Index of the surviving player, if any.
    pub winner: Option<usize>,
    pub stats: [&'a Stats; 2],
    pub frame: u64,
}

impl<'a> Widget for GameOverScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                buf.set_string(x, y, " ", Style::default().bg(theme::BG_COLOR));
            }
        }

        let center_x = area.x + area.width / 2;
        let mut y = area.y + area.height / 5;

        let banner = match self.winner {
            Some(0) => "PLAYER 1 WINS",
            Some(1) => "PLAYER 2 WINS",
            _ => "DRAW",
        };
        let pulse = if (self.frame / 30) % 2 == 0 {
            Color::Rgb(253, 213, 58)
        } else {
            Color::Rgb(253, 178, 38)
        };
        let style = Style::default().fg(pulse).add_modifier(Modifier::BOLD);
        let bx = center_x.saturating_sub(banner.width() as u16 / 2);
        buf.set_string(bx, y, banner, style);
        y += 3;

        // Two stat columns.
        let col_w: u16 = 24;
        let left_x = center_x.saturating_sub(col_w + 2);
        let right_x = center_x + 2;
        for (player, &stats) in self.stats.iter().enumerate() {
            let x = if player == 0 { left_x } else { right_x };
            let mut row = y;
            let header = if player == 0 { "PLAYER 1" } else { "PLAYER 2" };
            buf.set_string(x, row, header, theme::header_style());
            row += 2;
            for (label, value) in [
                ("TIME", stats.format_time()),
                ("PIECES", stats.pieces_placed.to_string()),
                ("ATTACK", stats.attack_sent.to_string()),
                ("RECEIVED", stats.garbage_received.to_string()),
                ("APM", format!("{:.1}", stats.apm())),
                ("PPS", format!("{:.2}", stats.pps())),
                ("MAX COMBO", stats.max_combo.to_string()),
                ("MAX B2B", stats.max_b2b.to_string()),
            ] {
                if row >= area.y + area.height {
                    break;
                }
                buf.set_string(x, row, label, theme::stat_label_style());
                let vx = x + col_w.saturating_sub(value.width() as u16);
                buf.set_string(vx, row, &value, theme::stat_value_style());
                row += 1;
            }
        }

        let hint = "Enter/r: rematch   Esc/q: menu";
        let hx = center_x.saturating_sub(hint.width() as u16 / 2);
        let hy = area.y + area.height - 2;
        buf.set_string(hx, hy, hint, theme::menu_desc_style());
    }
}

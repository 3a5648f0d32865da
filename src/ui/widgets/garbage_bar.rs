use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::engine::board::VISIBLE_HEIGHT;
use crate::ui::theme;

/// Incoming-garbage meter beside the board: queued lines fill from the
/// bottom, turning hot once a full 8-row insertion is owed.
pub struct GarbageBarWidget {
    /// Lines queued for insertion plus lines still travelling.
    pub incoming: u32,
}

impl Widget for GarbageBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 1 || area.height < 2 {
            return;
        }

        let x = area.x;
        let bar_height = area.height.min(VISIBLE_HEIGHT as u16);
        let filled = (self.incoming as u16).min(bar_height);

        for row in 0..bar_height {
            let y = area.y + area.height.saturating_sub(1) - row;
            if row < filled {
                let color = if self.incoming >= 8 {
                    theme::DANGER_COLOR
                } else {
                    theme::GARBAGE_BAR_COLOR
                };
                buf.set_string(x, y, "▐", Style::default().fg(color));
            } else {
                buf.set_string(x, y, "▐", Style::default().fg(theme::GARBAGE_BAR_BG));
            }
        }
    }
}

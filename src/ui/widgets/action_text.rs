use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::engine::clear::ClearKind;
use crate::engine::scoring::Scoring;
use crate::ui::theme;

/// Floating text over the board: last clear kind, combo and B2B chain.
pub struct ActionTextWidget<'a> {
    pub clear_kind: Option<&'a ClearKind>,
    pub scoring: &'a Scoring,
    pub opacity: f32,
}

impl<'a> Widget for ActionTextWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.opacity <= 0.01 || area.width < 10 || area.height < 1 {
            return;
        }

        let x = area.x;
        let mut y = area.y;

        if self.scoring.b2b_chain >= 2 {
            let text = format!("B2B ×{}", self.scoring.b2b_chain);
            let style = Style::default()
                .fg(theme::b2b_color(self.scoring.b2b_chain))
                .add_modifier(Modifier::BOLD);
            buf.set_string(x, y, &text, style);
            y += 1;
        }

        if let Some(kind) = self.clear_kind {
            if !matches!(kind, ClearKind::None) && y < area.y + area.height {
                let style = Style::default()
                    .fg(theme::clear_kind_color(kind))
                    .add_modifier(Modifier::BOLD);
                buf.set_string(x, y, kind.display_name(), style);
                y += 1;
            }
        }

        if self.scoring.combo > 0 && y < area.y + area.height {
            let combo = self.scoring.combo as u32;
            let style = Style::default()
                .fg(theme::combo_color(combo))
                .add_modifier(Modifier::BOLD);
            buf.set_string(x, y, &format!("{} COMBO", combo), style);
        }
    }
}

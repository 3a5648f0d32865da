use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::engine::scoring::Scoring;
use crate::engine::stats::Stats;
use crate::ui::theme;

/// Score/combo sidebar for one player.
pub struct SidebarWidget<'a> {
    pub scoring: &'a Scoring,
    pub stats: &'a Stats,
    pub title: &'a str,
}

impl<'a> Widget for SidebarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 10 {
            return;
        }

        let x = area.x;
        let mut y = area.y;

        let title = format!(" {} ", self.title);
        buf.set_string(x, y, &title, theme::header_style());
        y += 1;
        let sep: String = theme::PANEL_H.repeat(area.width as usize);
        buf.set_string(x, y, &sep, Style::default().fg(theme::PANEL_COLOR));
        y += 1;

        self.draw_stat(buf, x, y, "SCORE", &format_number(self.scoring.score));
        y += 2;
        self.draw_stat(buf, x, y, "LINES", &self.scoring.lines_cleared.to_string());
        y += 2;
        self.draw_stat(buf, x, y, "TIME", &self.stats.format_time());
        y += 2;

        if y + 1 < area.y + area.height {
            self.draw_stat(buf, x, y, "PPS", &format!("{:.2}", self.stats.pps()));
            y += 2;
        }

        if y + 1 < area.y + area.height && self.scoring.combo >= 0 {
            buf.set_string(x + 1, y, "COMBO", theme::stat_label_style());
            y += 1;
            let combo = self.scoring.combo as u32;
            let style = Style::default().fg(theme::combo_color(combo));
            buf.set_string(x + 1, y, &combo.to_string(), style);
            y += 2;
        }

        if y < area.y + area.height && self.scoring.b2b_chain >= 2 {
            let text = format!("B2B ×{}", self.scoring.b2b_chain);
            let style = Style::default().fg(theme::b2b_color(self.scoring.b2b_chain));
            buf.set_string(x + 1, y, &text, style);
        }
    }
}

impl<'a> SidebarWidget<'a> {
    fn draw_stat(&self, buf: &mut Buffer, x: u16, y: u16, label: &str, value: &str) {
        buf.set_string(x + 1, y, label, theme::stat_label_style());
        buf.set_string(x + 1, y + 1, value, theme::stat_value_style());
    }
}

/// Format a number with thousands separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

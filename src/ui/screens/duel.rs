use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::engine::versus::Match;
use crate::ui::effects::Effects;
use crate::ui::layout::{DuelLayout, PaneLayout};
use crate::ui::theme;
use crate::ui::widgets::action_text::ActionTextWidget;
use crate::ui::widgets::board::BoardWidget;
use crate::ui::widgets::garbage_bar::GarbageBarWidget;
use crate::ui::widgets::hold_box::HoldBoxWidget;
use crate::ui::widgets::next_queue::NextQueueWidget;
use crate::ui::widgets::sidebar::SidebarWidget;

const NEXT_PREVIEW: usize = 3;

/// The full two-player duel screen.
pub struct DuelScreen<'a> {
    pub duel: &'a Match,
    pub effects: &'a [Effects; 2],
    pub layout: &'a DuelLayout,
    pub paused: bool,
}

impl<'a> Widget for DuelScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                buf.set_string(x, y, " ", Style::default().bg(theme::BG_COLOR));
            }
        }

        for player in 0..2 {
            self.render_pane(player, &self.layout.panes[player], buf);
        }

        let center = self.layout.center;
        buf.set_string(
            center.x,
            center.y + 1,
            " VS ",
            Style::default()
                .fg(Color::Rgb(253, 98, 98))
                .add_modifier(Modifier::BOLD),
        );

        self.render_controls(buf);

        if self.paused {
            self.render_pause_overlay(area, buf);
        }
    }
}

impl<'a> DuelScreen<'a> {
    fn render_pane(&self, player: usize, pane: &PaneLayout, buf: &mut Buffer) {
        let field = self.duel.board(player);
        let effects = &self.effects[player];

        HoldBoxWidget {
            kind: field.held_kind(),
            available: field.hold.available(),
        }
        .render(pane.hold, buf);

        BoardWidget {
            field,
            effects,
            show_grid: true,
        }
        .render(pane.board, buf);

        GarbageBarWidget {
            incoming: field.garbage_queued() + self.duel.pending_garbage(player),
        }
        .render(pane.garbage_bar, buf);

        NextQueueWidget {
            pieces: field.next_queue(NEXT_PREVIEW),
        }
        .render(pane.next, buf);

        let title = if player == 0 { "PLAYER 1" } else { "PLAYER 2" };
        SidebarWidget {
            scoring: &field.scoring,
            stats: &field.stats,
            title,
        }
        .render(pane.left_sidebar, buf);

        self.render_right_sidebar(player, pane, buf);

        if effects.action_text_opacity > 0.01 {
            ActionTextWidget {
                clear_kind: field.last_clear_kind.as_ref(),
                scoring: &field.scoring,
                opacity: effects.action_text_opacity,
            }
            .render(pane.action_text, buf);
        }

        let info = format!(
            "ATK:{} RCV:{}",
            field.stats.attack_sent, field.stats.garbage_received
        );
        buf.set_string(pane.info.x + 1, pane.info.y, &info, theme::stat_value_style());

        if field.is_game_over() {
            let msg = "TOPPED OUT";
            let x = pane.board.x + (pane.board.width.saturating_sub(msg.len() as u16)) / 2;
            let y = pane.board.y + pane.board.height / 2;
            buf.set_string(x, y, msg, theme::game_over_style());
        }
    }

    fn render_right_sidebar(&self, player: usize, pane: &PaneLayout, buf: &mut Buffer) {
        let area = pane.right_sidebar;
        if area.width < 8 || area.height < 4 {
            return;
        }
        let stats = &self.duel.board(player).stats;

        let x = area.x;
        let mut y = area.y;

        buf.set_string(x + 1, y, "APM", theme::stat_label_style());
        y += 1;
        buf.set_string(x + 1, y, &format!("{:.1}", stats.apm()), theme::stat_value_style());
        y += 2;

        if y + 1 < area.y + area.height {
            buf.set_string(x + 1, y, "MAX CMB", theme::stat_label_style());
            y += 1;
            buf.set_string(x + 1, y, &stats.max_combo.to_string(), theme::stat_value_style());
            y += 2;
        }

        if y + 1 < area.y + area.height {
            buf.set_string(x + 1, y, "ATTACK", theme::stat_label_style());
            y += 1;
            buf.set_string(x + 1, y, &stats.attack_sent.to_string(), theme::stat_value_style());
        }
    }

    fn render_controls(&self, buf: &mut Buffer) {
        let area = self.layout.controls;
        if area.width < 40 || area.height < 2 {
            return;
        }
        let p1 = "P1  a/d:←→  s:↓  w:drop  q/e:rot  x:180  c:hold";
        let p2 = "P2  ←/→  ↓  ↑:drop  ,/.:rot  /:180  m:hold  Esc:pause";
        let x1 = area.x + area.width.saturating_sub(p1.len() as u16) / 2;
        buf.set_string(x1, area.y, p1, theme::menu_desc_style());
        let x2 = area.x + area.width.saturating_sub(p2.len() as u16) / 2;
        buf.set_string(x2, area.y + 1, p2, theme::menu_desc_style());
    }

    fn render_pause_overlay(&self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                buf.set_string(x, y, " ", Style::default().bg(theme::BG_COLOR));
            }
        }

        let center_x = area.x + area.width / 2;
        let center_y = area.y + area.height / 2;

        let text = "║  PAUSED  ║";
        let x = center_x.saturating_sub(text.len() as u16 / 2);
        let style = Style::default()
            .fg(theme::TEXT_BRIGHT)
            .add_modifier(Modifier::BOLD);

        buf.set_string(x, center_y - 2, "╔══════════╗", style);
        buf.set_string(x, center_y - 1, "║          ║", style);
        buf.set_string(x, center_y, text, style);
        buf.set_string(x, center_y + 1, "║          ║", style);
        buf.set_string(x, center_y + 2, "╚══════════╝", style);

        let resume = "[Esc] Resume   [R] Restart   [Q] Menu";
        let rx = center_x.saturating_sub(resume.len() as u16 / 2);
        buf.set_string(rx, center_y + 4, resume, theme::menu_desc_style());
    }
}
